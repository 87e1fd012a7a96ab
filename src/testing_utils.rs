//! Consolidated testing utilities for store setup and shared sample records.
//!
//! Used by the crate's own unit and integration tests; downstream crates can
//! opt in through the `test-utils` feature.

use crate::db_operations::RecordStore;
use crate::error::{GuardError, GuardResult};
use crate::model::{Allowed, Record, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Consolidated temporary store creation for tests
pub struct TestStoreFactory;

impl TestStoreFactory {
    /// Create a temporary sled database for testing
    pub fn create_temp_sled_db() -> Result<sled::Db, sled::Error> {
        sled::Config::new().temporary(true).open()
    }

    /// Create a temporary RecordStore for testing
    pub fn create_temp_store() -> GuardResult<RecordStore> {
        let db = Self::create_temp_sled_db()?;
        Ok(RecordStore::new(db))
    }
}

/// Sample document record used across unit and integration tests.
///
/// Permission reduces to ownership; liveness to not being soft-deleted; a
/// document with an empty title reports itself invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    pub id: String,
    pub owner: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Doc {
    pub fn new(owner: impl Into<UserId>, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner: owner.into(),
            title: title.into(),
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Soft-delete this document
    pub fn mark_deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }
}

impl Record for Doc {
    const RECORD_TYPE: &'static str = "doc";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Allowed for Doc {
    fn filter_live(candidates: Vec<Self>) -> Vec<Self> {
        candidates
            .into_iter()
            .filter(|doc| doc.deleted_at.is_none())
            .collect()
    }

    fn filter_allowed_by_user(user: &UserId, candidates: Vec<Self>) -> Vec<Self> {
        candidates
            .into_iter()
            .filter(|doc| doc.owner == *user)
            .collect()
    }

    fn explain_why_invalid(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title must not be empty".to_string());
        }
        None
    }
}

/// Sample record that is persisted but deliberately not permission-aware:
/// it implements [`Record`] only, never [`Allowed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub message: String,
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            recorded_at: Utc::now(),
        }
    }
}

impl Record for AuditEntry {
    const RECORD_TYPE: &'static str = "audit_entry";

    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Assert an error is the ConventionViolation for the given record type
pub fn assert_convention_violation(err: GuardError, record_type: &str) {
    match err {
        GuardError::ConventionViolation { record_type: named } => {
            assert_eq!(named, record_type)
        }
        other => panic!("Expected ConventionViolation, got: {other}"),
    }
}
