//! LMDB implementation of WorldState.
//!
//! One database, `world_state`: UTF-8 key bytes → record bytes. LMDB keeps
//! keys in byte order, which is the order range queries must return.

use std::ops::Bound;
use std::path::{Path, PathBuf};

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};
use tracing::debug;

use atcc_store::{KeyValue, StoreError, WorldState, WriteSet};

use crate::LmdbError;

const WORLD_STATE_DB: &str = "world_state";
const MAX_DBS: u32 = 1;

pub struct LmdbWorldState {
    env: Env,
    state_db: Database<Bytes, Bytes>,
    path: PathBuf,
}

impl LmdbWorldState {
    /// Default memory map size (64 MiB).
    pub const DEFAULT_MAP_SIZE: usize = 64 * 1024 * 1024;

    /// Open or create the world state under `path`.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;

        let mut options = EnvOpenOptions::new();
        options.map_size(map_size).max_dbs(MAX_DBS);
        // SAFETY: the environment is opened once per path by this process and
        // the memory map is never touched outside heed.
        let env = unsafe { options.open(path)? };

        let mut wtxn = env.write_txn()?;
        let state_db: Database<Bytes, Bytes> =
            env.create_database(&mut wtxn, Some(WORLD_STATE_DB))?;
        wtxn.commit()?;

        debug!(path = %path.display(), map_size, "opened LMDB world state");
        Ok(Self {
            env,
            state_db,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn bound(key: &str) -> Bound<&[u8]> {
    if key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(key.as_bytes())
    }
}

fn upper_bound(key: &str) -> Bound<&[u8]> {
    if key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(key.as_bytes())
    }
}

impl WorldState for LmdbWorldState {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let value = self
            .state_db
            .get(&rtxn, key.as_bytes())
            .map_err(LmdbError::from)?;
        Ok(value.map(<[u8]>::to_vec))
    }

    fn range(&self, start: &str, end: &str) -> Result<Vec<KeyValue>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let bounds = (bound(start), upper_bound(end));
        let iter = self
            .state_db
            .range(&rtxn, &bounds)
            .map_err(LmdbError::from)?;

        let mut results = Vec::new();
        for result in iter {
            let (key, value) = result.map_err(LmdbError::from)?;
            let key = std::str::from_utf8(key)
                .map_err(|e| LmdbError::Corruption(format!("non UTF-8 key: {e}")))?;
            results.push(KeyValue::new(key, value.to_vec()));
        }
        Ok(results)
    }

    fn apply(&self, writes: &WriteSet) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        for (key, value) in writes.iter() {
            self.state_db
                .put(&mut wtxn, key.as_bytes(), value)
                .map_err(LmdbError::from)?;
        }
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn len(&self) -> Result<u64, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        Ok(self.state_db.len(&rtxn).map_err(LmdbError::from)?)
    }
}
