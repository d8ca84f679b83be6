#[cfg(feature = "file-store")]
pub mod file;
pub mod memory;

use futures::future::BoxFuture;

use crate::dao::{
    models::{PROFILE_KEY, ProfileRecord},
    storage::{StorageError, StorageResult},
};

/// Load/save access to the single stored user record.
///
/// One writer and one reader at a time; callers treat a missing record as
/// "nobody signed in".
pub trait ProfileStore: Send + Sync {
    fn load(&self) -> BoxFuture<'static, StorageResult<Option<ProfileRecord>>>;
    fn save(&self, record: ProfileRecord) -> BoxFuture<'static, StorageResult<()>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}

/// Serialize a record into the blob kept under [`PROFILE_KEY`].
fn encode(record: &ProfileRecord) -> StorageResult<String> {
    serde_json::to_string(record).map_err(|err| StorageError::corrupted(PROFILE_KEY, err))
}

/// Parse the blob kept under [`PROFILE_KEY`].
fn decode(blob: &str) -> StorageResult<ProfileRecord> {
    serde_json::from_str(blob).map_err(|err| StorageError::corrupted(PROFILE_KEY, err))
}
