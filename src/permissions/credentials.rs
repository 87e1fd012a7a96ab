use crate::db_operations::RecordStore;
use crate::error::{GuardError, GuardResult};
use crate::model::{Allowed, UserId};
use crate::permissions::registry::RecordTypeRegistry;
use serde_json::Value;

/// Capability contract for "who is asking": a logged-in user or an API key.
pub trait Credentials {
    /// Records of type `M` these credentials may access.
    fn allowed_list<M: Allowed>(&self, store: &RecordStore) -> GuardResult<Vec<M>>;

    /// Reason these credentials cannot create records of type `M`, if any.
    /// `Ok(None)` means creation is permitted.
    fn explain_why_can_not_create<M: Allowed>(
        &self,
        store: &RecordStore,
    ) -> GuardResult<Option<String>>;

    /// Whether these credentials may access the specific record. Built on
    /// [`Credentials::allowed_list`]: true iff the record's primary key
    /// appears in the allowed set. Re-evaluated on every call, never cached.
    fn allowed_instance<M: Allowed>(
        &self,
        store: &RecordStore,
        instance: &M,
    ) -> GuardResult<bool> {
        let allowed = self.allowed_list::<M>(store)?;
        Ok(allowed
            .iter()
            .any(|record| record.record_id() == instance.record_id()))
    }
}

/// Credentials that reduce to "does this user have access".
///
/// Implement this instead of [`Credentials`] when the caller is tied to a
/// single user: listing then delegates to the record type's
/// [`Allowed::allowed_by_user`], which will come in handy if API keys ever
/// exist on a level other than user.
pub trait HasUserCredentials {
    /// The authenticated user these credentials act for.
    fn user(&self) -> &UserId;

    /// Creation policy for user-backed credentials. The specialization only
    /// defines listing; override this to define creation policy.
    fn explain_why_user_can_not_create<M: Allowed>(
        &self,
        _store: &RecordStore,
    ) -> GuardResult<Option<String>> {
        Err(GuardError::not_implemented(
            "explain_why_can_not_create",
            std::any::type_name::<Self>(),
        ))
    }

    /// Records of the named type this user may access, serialized for
    /// callers that only hold a record type name at runtime (API layers).
    ///
    /// Fails with [`GuardError::ConventionViolation`] when the named type
    /// never registered a user filter.
    fn allowed_list_named(
        &self,
        store: &RecordStore,
        registry: &RecordTypeRegistry,
        record_type: &str,
    ) -> GuardResult<Vec<Value>> {
        registry.allowed_by_user(store, record_type, self.user())
    }

    /// Name-keyed variant of [`Credentials::allowed_instance`].
    fn allowed_instance_named(
        &self,
        store: &RecordStore,
        registry: &RecordTypeRegistry,
        record_type: &str,
        id: &str,
    ) -> GuardResult<bool> {
        registry.allowed_instance_by_user(store, record_type, self.user(), id)
    }
}

impl<C: HasUserCredentials> Credentials for C {
    fn allowed_list<M: Allowed>(&self, store: &RecordStore) -> GuardResult<Vec<M>> {
        M::allowed_by_user(store, self.user())
    }

    fn explain_why_can_not_create<M: Allowed>(
        &self,
        store: &RecordStore,
    ) -> GuardResult<Option<String>> {
        self.explain_why_user_can_not_create::<M>(store)
    }
}

/// Minimal concrete credentials: one user id, no further behavior.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    user: UserId,
}

impl UserCredentials {
    pub fn new(user: impl Into<UserId>) -> Self {
        Self { user: user.into() }
    }
}

impl HasUserCredentials for UserCredentials {
    fn user(&self) -> &UserId {
        &self.user
    }
}
