use std::{collections::HashMap, sync::Arc};

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use super::{ProfileStore, decode, encode};
use crate::dao::{
    models::{PROFILE_KEY, ProfileRecord},
    storage::StorageResult,
};

/// Key-value blobs kept in process memory, lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<Option<ProfileRecord>>> {
        let blobs = self.blobs.clone();
        Box::pin(async move {
            let guard = blobs.read().await;
            guard.get(PROFILE_KEY).map(|blob| decode(blob)).transpose()
        })
    }

    fn save(&self, record: ProfileRecord) -> BoxFuture<'static, StorageResult<()>> {
        let blobs = self.blobs.clone();
        Box::pin(async move {
            let blob = encode(&record)?;
            blobs.write().await.insert(PROFILE_KEY.to_string(), blob);
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
