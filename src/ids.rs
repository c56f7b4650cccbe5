/// Source of the unique suffix used in thread, comment and reply ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Time-ordered UUID v7 ids, hyphen-free.
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::now_v7().simple().to_string()
    }
}

/// Always returns the same id. Lets tests predict `comment-123` and friends.
pub struct FixedIdGenerator(pub String);

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
