// Caller identity: users and bearer sessions. Credential checks live elsewhere;
// the forum only needs to know who is calling.
pub mod session;
pub mod users;
