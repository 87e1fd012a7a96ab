use crate::model::Record;
use crate::testing_utils::{Doc, TestStoreFactory};

#[test]
fn insert_and_get_record() {
    let store = TestStoreFactory::create_temp_store().unwrap();
    let doc = Doc::new("alice", "Quarterly report");

    store.insert_record(&doc).unwrap();
    let loaded: Doc = store.get_record(&doc.id).unwrap().unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn get_missing_record_returns_none() {
    let store = TestStoreFactory::create_temp_store().unwrap();
    assert!(store.get_record::<Doc>("no-such-id").unwrap().is_none());
}

#[test]
fn insert_overwrites_previous_version() {
    let store = TestStoreFactory::create_temp_store().unwrap();
    let mut doc = Doc::new("alice", "Draft");
    store.insert_record(&doc).unwrap();

    doc.title = "Final".to_string();
    store.insert_record(&doc).unwrap();

    let loaded: Doc = store.get_record(&doc.id).unwrap().unwrap();
    assert_eq!(loaded.title, "Final");
    assert_eq!(store.count_records::<Doc>().unwrap(), 1);
}

#[test]
fn list_records_returns_all_of_one_type() {
    let store = TestStoreFactory::create_temp_store().unwrap();
    for title in ["one", "two", "three"] {
        store.insert_record(&Doc::new("alice", title)).unwrap();
    }

    let docs = store.list_records::<Doc>().unwrap();
    assert_eq!(docs.len(), 3);
}

#[test]
fn record_types_are_stored_in_separate_trees() {
    use crate::testing_utils::AuditEntry;

    let store = TestStoreFactory::create_temp_store().unwrap();
    store.insert_record(&Doc::new("alice", "doc")).unwrap();
    store.insert_record(&AuditEntry::new("logged in")).unwrap();

    assert_eq!(store.count_records::<Doc>().unwrap(), 1);
    assert_eq!(store.count_records::<AuditEntry>().unwrap(), 1);
    assert_eq!(
        store.db().open_tree(Doc::RECORD_TYPE).unwrap().len(),
        1
    );
}

#[test]
fn delete_record_reports_existence() {
    let store = TestStoreFactory::create_temp_store().unwrap();
    let doc = Doc::new("alice", "short-lived");
    store.insert_record(&doc).unwrap();

    assert!(store.delete_record::<Doc>(&doc.id).unwrap());
    assert!(!store.delete_record::<Doc>(&doc.id).unwrap());
    assert!(store.get_record::<Doc>(&doc.id).unwrap().is_none());
}
