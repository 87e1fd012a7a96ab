use super::core::RecordStore;
use crate::error::{GuardError, GuardResult};
use crate::model::Record;

impl RecordStore {
    /// Serializes and writes a record, overwriting any previous version.
    ///
    /// This is the raw write path: it does not consult
    /// [`Allowed::explain_why_invalid`](crate::model::Allowed::explain_why_invalid).
    /// Gated writes go through [`Allowed::save`](crate::model::Allowed::save);
    /// callers writing here directly take on the validation responsibility
    /// themselves, the same way bulk writes do.
    pub fn insert_record<M: Record>(&self, record: &M) -> GuardResult<()> {
        let tree = self.tree_for(M::RECORD_TYPE)?;
        let bytes = serde_json::to_vec(record)?;
        tree.insert(record.record_id().as_bytes(), bytes)?;

        // Ensure the data is durably written to disk
        tree.flush()?;
        Ok(())
    }

    /// Retrieves a record by primary key.
    pub fn get_record<M: Record>(&self, id: &str) -> GuardResult<Option<M>> {
        let tree = self.tree_for(M::RECORD_TYPE)?;
        match tree.get(id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// All stored records of the given type.
    pub fn list_records<M: Record>(&self) -> GuardResult<Vec<M>> {
        let tree = self.tree_for(M::RECORD_TYPE)?;
        let mut records = Vec::new();
        for entry in tree.iter() {
            let (_, bytes) = entry.map_err(|e| {
                GuardError::Database(format!("Failed to scan {}: {}", M::RECORD_TYPE, e))
            })?;
            records.push(serde_json::from_slice(&bytes)?);
        }
        Ok(records)
    }

    /// Deletes a record by primary key. Returns whether a record existed.
    pub fn delete_record<M: Record>(&self, id: &str) -> GuardResult<bool> {
        let tree = self.tree_for(M::RECORD_TYPE)?;
        let previous = tree.remove(id.as_bytes())?;
        tree.flush()?;
        Ok(previous.is_some())
    }

    /// Number of stored records of the given type.
    pub fn count_records<M: Record>(&self) -> GuardResult<u64> {
        let tree = self.tree_for(M::RECORD_TYPE)?;
        Ok(tree.len() as u64)
    }
}
