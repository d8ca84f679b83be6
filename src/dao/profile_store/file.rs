use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::BoxFuture;
use tokio::{fs, sync::Mutex};
use tracing::debug;

use super::{ProfileStore, decode, encode};
use crate::dao::{
    models::{PROFILE_KEY, ProfileRecord},
    storage::{StorageError, StorageResult},
};

/// Key-value blobs persisted as one JSON object on local disk.
///
/// The file is created on the first save. A missing file means nothing was
/// ever stored.
#[derive(Debug, Clone)]
pub struct JsonFileProfileStore {
    path: Arc<PathBuf>,
    write_gate: Arc<Mutex<()>>,
}

impl JsonFileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_gate: Arc::new(Mutex::new(())),
        }
    }
}

impl ProfileStore for JsonFileProfileStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<Option<ProfileRecord>>> {
        let path = self.path.clone();
        Box::pin(async move {
            let blobs = read_blobs(&path).await?;
            blobs.get(PROFILE_KEY).map(|blob| decode(blob)).transpose()
        })
    }

    fn save(&self, record: ProfileRecord) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        let gate = self.write_gate.clone();
        Box::pin(async move {
            let _guard = gate.lock().await;

            let mut blobs = read_blobs(&path).await?;
            blobs.insert(PROFILE_KEY.to_string(), encode(&record)?);
            let contents = serde_json::to_vec_pretty(&blobs)
                .map_err(|err| StorageError::corrupted(PROFILE_KEY, err))?;

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await.map_err(|err| {
                    StorageError::unavailable(format!("creating {}", parent.display()), err)
                })?;
            }

            let staging = path.with_extension("json.tmp");
            fs::write(&staging, contents).await.map_err(|err| {
                StorageError::unavailable(format!("writing {}", staging.display()), err)
            })?;
            fs::rename(&staging, path.as_path()).await.map_err(|err| {
                StorageError::unavailable(format!("replacing {}", path.display()), err)
            })?;

            debug!(path = %path.display(), "profile record saved");
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        Box::pin(async move { read_blobs(&path).await.map(|_| ()) })
    }
}

async fn read_blobs(path: &Path) -> StorageResult<HashMap<String, String>> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map_err(|err| StorageError::corrupted(&path.display().to_string(), err)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
        Err(err) => Err(StorageError::unavailable(
            format!("reading {}", path.display()),
            err,
        )),
    }
}
