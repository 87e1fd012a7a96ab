//! Credentials behavior against a live store: listing, membership checks,
//! and the fail-loud paths.

use recordguard::testing_utils::{assert_convention_violation, AuditEntry, Doc, TestStoreFactory};
use recordguard::{
    Allowed, Credentials, GuardError, HasUserCredentials, RecordTypeRegistry, UserCredentials,
    UserId,
};

#[test]
fn allowed_list_matches_the_record_types_own_filter() {
    let store = TestStoreFactory::create_temp_store().unwrap();
    let alice = UserId::new("alice");

    store.insert_record(&Doc::new("alice", "Mine")).unwrap();
    store.insert_record(&Doc::new("alice", "Also mine")).unwrap();
    store.insert_record(&Doc::new("bob", "Not mine")).unwrap();

    let credentials = UserCredentials::new("alice");
    let mut listed: Vec<String> = credentials
        .allowed_list::<Doc>(&store)
        .unwrap()
        .into_iter()
        .map(|doc| doc.id)
        .collect();
    let mut direct: Vec<String> = Doc::allowed_by_user(&store, &alice)
        .unwrap()
        .into_iter()
        .map(|doc| doc.id)
        .collect();

    listed.sort();
    direct.sort();
    assert_eq!(listed, direct);
    assert_eq!(listed.len(), 2);
}

#[test]
fn allowed_instance_is_membership_in_allowed_list() {
    let store = TestStoreFactory::create_temp_store().unwrap();

    let mine = Doc::new("alice", "Mine");
    let theirs = Doc::new("bob", "Theirs");
    store.insert_record(&mine).unwrap();
    store.insert_record(&theirs).unwrap();

    let credentials = UserCredentials::new("alice");
    assert!(credentials.allowed_instance(&store, &mine).unwrap());
    assert!(!credentials.allowed_instance(&store, &theirs).unwrap());
}

#[test]
fn allowed_instance_reflects_current_state_not_a_cache() {
    let store = TestStoreFactory::create_temp_store().unwrap();
    let credentials = UserCredentials::new("alice");

    let mut doc = Doc::new("alice", "Mine for now");
    store.insert_record(&doc).unwrap();
    assert!(credentials.allowed_instance(&store, &doc).unwrap());

    // Ownership transfer revokes access on the very next check
    doc.owner = UserId::new("bob");
    store.insert_record(&doc).unwrap();
    assert!(!credentials.allowed_instance(&store, &doc).unwrap());
}

#[test]
fn minimal_user_credentials_have_no_creation_policy() {
    let store = TestStoreFactory::create_temp_store().unwrap();
    let credentials = UserCredentials::new("alice");

    let err = credentials
        .explain_why_can_not_create::<Doc>(&store)
        .unwrap_err();
    match err {
        GuardError::NotImplemented { operation, .. } => {
            assert_eq!(operation, "explain_why_can_not_create")
        }
        other => panic!("Expected NotImplemented, got: {other}"),
    }
}

#[test]
fn creation_policy_can_be_overridden_by_a_specialization() {
    struct ReadOnlyCredentials {
        user: UserId,
    }

    impl HasUserCredentials for ReadOnlyCredentials {
        fn user(&self) -> &UserId {
            &self.user
        }

        fn explain_why_user_can_not_create<M: Allowed>(
            &self,
            _store: &recordguard::RecordStore,
        ) -> recordguard::GuardResult<Option<String>> {
            Ok(Some("Read-only access".to_string()))
        }
    }

    let store = TestStoreFactory::create_temp_store().unwrap();
    let credentials = ReadOnlyCredentials {
        user: UserId::new("alice"),
    };

    let reason = credentials
        .explain_why_can_not_create::<Doc>(&store)
        .unwrap();
    assert_eq!(reason.as_deref(), Some("Read-only access"));
}

#[test]
fn named_listing_through_credentials() {
    let store = TestStoreFactory::create_temp_store().unwrap();
    let mut registry = RecordTypeRegistry::new();
    registry.register_allowed::<Doc>();
    registry.register::<AuditEntry>();

    let doc = Doc::new("alice", "Mine");
    store.insert_record(&doc).unwrap();
    store.insert_record(&Doc::new("bob", "Theirs")).unwrap();

    let credentials = UserCredentials::new("alice");
    let listed = credentials
        .allowed_list_named(&store, &registry, "doc")
        .unwrap();
    assert_eq!(listed.len(), 1);

    assert!(credentials
        .allowed_instance_named(&store, &registry, "doc", &doc.id)
        .unwrap());
    assert!(!credentials
        .allowed_instance_named(&store, &registry, "doc", "no-such-id")
        .unwrap());

    // AuditEntry is persisted but not permission-aware: fail loud, not open
    let err = credentials
        .allowed_list_named(&store, &registry, "audit_entry")
        .unwrap_err();
    assert_convention_violation(err, "audit_entry");
}
