//! Directory records and request DTOs
//!
//! Records are loosely typed: any field missing from a stored document, or
//! holding a type the record cannot use, falls back to its default, and
//! fields this crate does not know about are kept in `extra` so they survive
//! a read/serialize round trip.

pub mod investor;
mod lenient;
pub mod startup;

pub use investor::*;
pub use startup::*;

use serde::Serialize;
use serde_json::{Map, Value};

/// Serialize a request into the set of fields it actually carries.
///
/// Update requests skip `None` fields during serialization, so the resulting
/// map holds exactly the fields a partial update should write.
pub(crate) fn to_field_map<T: Serialize>(value: &T) -> anyhow::Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("expected an object, got {other}"),
    }
}
