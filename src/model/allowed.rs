use super::{Record, UserId};
use crate::db_operations::RecordStore;
use crate::error::{GuardError, GuardResult};
use log::warn;

/// Permission and validation capabilities for a persisted record type.
///
/// Implement under any record type that needs to check who is allowed to do
/// things to its instances, especially types published through an API or
/// edited through reusable UI tooling. The two filters are the extension
/// points; the listing helpers and the save gate are derived from them.
pub trait Allowed: Record {
    /// Narrow `candidates` to "live" records: not deleted or deactivated,
    /// appropriate for showing in the user interface.
    fn filter_live(candidates: Vec<Self>) -> Vec<Self>;

    /// Narrow `candidates` to the records `user` may access.
    fn filter_allowed_by_user(user: &UserId, candidates: Vec<Self>) -> Vec<Self>;

    /// All records `user` may access, regardless of whether they are
    /// deleted. Useful for API callers that need every accessible record.
    fn allowed_by_user(store: &RecordStore, user: &UserId) -> GuardResult<Vec<Self>> {
        Ok(Self::filter_allowed_by_user(
            user,
            store.list_records::<Self>()?,
        ))
    }

    /// Same as [`Allowed::allowed_by_user`], minus anything deleted or
    /// deactivated. Useful for the web, where deleted records stay hidden.
    ///
    /// The permission filter runs first; `filter_live` only ever sees the
    /// already-narrowed set. Implementations must not reorder the two even
    /// when their filters commute.
    fn allowed_by_user_live(store: &RecordStore, user: &UserId) -> GuardResult<Vec<Self>> {
        Ok(Self::filter_live(Self::allowed_by_user(store, user)?))
    }

    /// Validation beyond required fields, basic type checking, and
    /// who-has-permission-to-see-what. Override to keep bad data out of
    /// writes arriving through an API or UI tooling. `None` means valid.
    fn explain_why_invalid(&self) -> Option<String> {
        None
    }

    /// Gated write: asks the record to validate itself and rejects the save
    /// when it reports a problem. Only writes going through
    /// [`RecordStore::insert_record`] directly bypass this gate.
    fn save(&self, store: &RecordStore) -> GuardResult<()> {
        if let Some(why_invalid) = self.explain_why_invalid() {
            warn!(
                "Rejected save of {} '{}': {}",
                Self::RECORD_TYPE,
                self.record_id(),
                why_invalid
            );
            return Err(GuardError::Validation(why_invalid));
        }
        store.insert_record(self)
    }
}
