//! File-backed counter store.
//!
//! One file, fully overwritten on save. No locking, no atomic rename, no
//! fsync: a replica set pointing at the same file (a shared volume) sees
//! each other's increments through nothing but these two calls, and a crash
//! mid-write can truncate the value.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use tally_core::error::Result;
use tally_core::store::CounterStore;
use tally_core::value;

/// Mode for newly created counter files.
#[cfg(unix)]
const COUNTER_FILE_MODE: u32 = 0o644;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CounterStore for FileStore {
    async fn load(&self) -> Result<Option<u64>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(value::parse_counter(&content))
    }

    async fn save(&self, value: u64) -> Result<()> {
        let mut opts = OpenOptions::new();
        opts.create(true).write(true).truncate(true);
        #[cfg(unix)]
        opts.mode(COUNTER_FILE_MODE);

        let mut file = opts.open(&self.path).await?;
        file.write_all(value::format_counter(value).as_bytes())
            .await?;
        // tokio files buffer writes; without this the value may never land.
        file.flush().await?;

        Ok(())
    }
}
