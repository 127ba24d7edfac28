//! Serialization contract
//!
//! Every entity exposes a flat field -> value mapping. The field set per
//! entity is fixed (`FIELDS`) and must never grow or shrink silently.

use serde_json::{Map, Value};

/// Flat mapping from public field name to value
pub type Record = Map<String, Value>;

/// Produce the external representation of an entity
pub trait ToRecord {
    /// Field names exposed by `to_record`, in declaration order
    const FIELDS: &'static [&'static str];

    fn to_record(&self) -> Record;
}

/// Build a record from `(field, value)` pairs
pub(crate) fn record<const N: usize>(pairs: [(&str, Value); N]) -> Record {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
