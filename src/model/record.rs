use serde::{de::DeserializeOwned, Serialize};

/// Contract every persisted entity satisfies.
///
/// A record type names itself (`RECORD_TYPE` keys its tree in the store and
/// its entry in the type registry) and exposes its primary key. Serde bounds
/// are how the store moves instances in and out of sled.
pub trait Record: Serialize + DeserializeOwned {
    /// Stable name for this record type. Tree name in the store and key in
    /// the registry; must be unique within a store.
    const RECORD_TYPE: &'static str;

    /// Primary key, unique within the record type.
    fn record_id(&self) -> &str;
}
