/// Database model definitions.
pub mod models;
/// Profile gateway: the single stored user record.
pub mod profile_store;
/// Storage abstraction layer errors.
pub mod storage;
