use uuid::Uuid;

/// Source of identifiers for meals, ingredients and looked-up foods.
///
/// Ids only need to be unique within one assembled plan, but the default
/// implementation is globally unique anyway.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

/// UUID v4 ids. Used in production.
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
