pub mod domain;
pub mod repository;

pub use domain::{AddedThread, DetailThread, NewThread};
pub use repository::{SqliteThreadRepository, ThreadRepository};
