use crate::db_operations::RecordStore;
use crate::error::{GuardError, GuardResult};
use crate::model::{Allowed, Record, UserId};
use log::info;
use serde_json::Value;
use std::collections::HashMap;

type UserListFn = fn(&RecordStore, &UserId) -> GuardResult<Vec<Value>>;
type UserContainsFn = fn(&RecordStore, &UserId, &str) -> GuardResult<bool>;

/// Capabilities a record type registered for runtime, name-keyed dispatch.
pub struct RecordTypeDescriptor {
    record_type: &'static str,
    allowed_by_user: Option<UserListFn>,
    allowed_by_user_live: Option<UserListFn>,
    allowed_instance_by_user: Option<UserContainsFn>,
}

impl RecordTypeDescriptor {
    pub fn record_type(&self) -> &'static str {
        self.record_type
    }

    /// Whether the type registered the user-filter capability.
    pub fn supports_user_filter(&self) -> bool {
        self.allowed_by_user.is_some()
    }
}

fn erased_allowed_by_user<M: Allowed>(
    store: &RecordStore,
    user: &UserId,
) -> GuardResult<Vec<Value>> {
    let records = M::allowed_by_user(store, user)?;
    records
        .iter()
        .map(|record| serde_json::to_value(record).map_err(GuardError::from))
        .collect()
}

fn erased_allowed_by_user_live<M: Allowed>(
    store: &RecordStore,
    user: &UserId,
) -> GuardResult<Vec<Value>> {
    let records = M::allowed_by_user_live(store, user)?;
    records
        .iter()
        .map(|record| serde_json::to_value(record).map_err(GuardError::from))
        .collect()
}

fn erased_allowed_instance_by_user<M: Allowed>(
    store: &RecordStore,
    user: &UserId,
    id: &str,
) -> GuardResult<bool> {
    let records = M::allowed_by_user(store, user)?;
    Ok(records.iter().any(|record| record.record_id() == id))
}

/// Registry of record types for callers that only hold a type name at
/// runtime, such as an HTTP layer resolving a path segment.
///
/// Registration is the capability assertion: a type registered through
/// [`RecordTypeRegistry::register_allowed`] can answer user-filtered
/// listings by name; a type registered through
/// [`RecordTypeRegistry::register`] is persisted but not permission-aware,
/// and name-keyed listing fails loudly instead of returning an empty or
/// unrestricted set.
#[derive(Default)]
pub struct RecordTypeRegistry {
    types: HashMap<&'static str, RecordTypeDescriptor>,
}

impl RecordTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a persisted record type without permission capabilities.
    pub fn register<M: Record>(&mut self) {
        info!("Registered record type '{}'", M::RECORD_TYPE);
        self.types.insert(
            M::RECORD_TYPE,
            RecordTypeDescriptor {
                record_type: M::RECORD_TYPE,
                allowed_by_user: None,
                allowed_by_user_live: None,
                allowed_instance_by_user: None,
            },
        );
    }

    /// Register a record type together with its user-filter capability.
    pub fn register_allowed<M: Allowed>(&mut self) {
        info!(
            "Registered record type '{}' with user permission filters",
            M::RECORD_TYPE
        );
        self.types.insert(
            M::RECORD_TYPE,
            RecordTypeDescriptor {
                record_type: M::RECORD_TYPE,
                allowed_by_user: Some(erased_allowed_by_user::<M>),
                allowed_by_user_live: Some(erased_allowed_by_user_live::<M>),
                allowed_instance_by_user: Some(erased_allowed_instance_by_user::<M>),
            },
        );
    }

    pub fn is_registered(&self, record_type: &str) -> bool {
        self.types.contains_key(record_type)
    }

    pub fn registered_types(&self) -> Vec<&'static str> {
        self.types.keys().copied().collect()
    }

    pub fn descriptor(&self, record_type: &str) -> Option<&RecordTypeDescriptor> {
        self.types.get(record_type)
    }

    /// Records of the named type `user` may access, regardless of liveness.
    pub fn allowed_by_user(
        &self,
        store: &RecordStore,
        record_type: &str,
        user: &UserId,
    ) -> GuardResult<Vec<Value>> {
        let descriptor = self.lookup(record_type)?;
        let list = descriptor
            .allowed_by_user
            .ok_or_else(|| GuardError::convention_violation(record_type))?;
        list(store, user)
    }

    /// Live records of the named type `user` may access.
    pub fn allowed_by_user_live(
        &self,
        store: &RecordStore,
        record_type: &str,
        user: &UserId,
    ) -> GuardResult<Vec<Value>> {
        let descriptor = self.lookup(record_type)?;
        let list = descriptor
            .allowed_by_user_live
            .ok_or_else(|| GuardError::convention_violation(record_type))?;
        list(store, user)
    }

    /// Whether `user` may access the record of the named type with the
    /// given primary key.
    pub fn allowed_instance_by_user(
        &self,
        store: &RecordStore,
        record_type: &str,
        user: &UserId,
        id: &str,
    ) -> GuardResult<bool> {
        let descriptor = self.lookup(record_type)?;
        let contains = descriptor
            .allowed_instance_by_user
            .ok_or_else(|| GuardError::convention_violation(record_type))?;
        contains(store, user, id)
    }

    fn lookup(&self, record_type: &str) -> GuardResult<&RecordTypeDescriptor> {
        self.types.get(record_type).ok_or_else(|| {
            GuardError::NotFound(format!("Record type '{}' is not registered", record_type))
        })
    }
}
