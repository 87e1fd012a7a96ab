use crate::config::StoreConfig;
use crate::error::GuardResult;
use log::info;

/// Sled-backed store that persists records grouped by record type.
///
/// Each record type gets its own tree, named by
/// [`Record::RECORD_TYPE`](crate::model::Record::RECORD_TYPE), so listing a
/// type never scans another type's records.
#[derive(Clone)]
pub struct RecordStore {
    /// The underlying sled database instance
    db: sled::Db,
}

impl RecordStore {
    /// Open a store at the configured storage path.
    pub fn open(config: &StoreConfig) -> GuardResult<Self> {
        let db = sled::open(&config.storage_path)?;
        info!("Opened record store at {}", config.storage_path.display());
        Ok(Self { db })
    }

    /// Wrap an already-open sled database.
    pub fn new(db: sled::Db) -> Self {
        Self { db }
    }

    /// Gets a reference to the underlying database
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    /// Tree holding all records of the given type.
    pub(crate) fn tree_for(&self, record_type: &str) -> GuardResult<sled::Tree> {
        Ok(self.db.open_tree(record_type)?)
    }
}
