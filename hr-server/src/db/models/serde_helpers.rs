//! Common serde helpers for SurrealDB record ids
//!
//! Records are keyed on their business identifier (EMP001, TRF001, ...), so
//! the `id` field must round-trip between two shapes:
//! - plain string "EMP001" or "employee:EMP001" (API JSON)
//! - SurrealDB native RecordId (from the database)

use serde::{Deserialize, Deserializer, Serializer};
use surrealdb::RecordId;

/// Record key that deserializes from either a string or a native RecordId
#[derive(Debug, Clone)]
struct FlexibleKey(String);

fn strip_table(value: &str) -> String {
    let key = match value.split_once(':') {
        Some((_, k)) => k,
        None => value,
    };
    key.trim_matches(['\u{27e8}', '\u{27e9}']).to_string()
}

impl<'de> Deserialize<'de> for FlexibleKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct FlexibleVisitor;

        impl<'de> Visitor<'de> for FlexibleVisitor {
            type Value = FlexibleKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a record key string or a RecordId")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexibleKey(strip_table(value)))
            }

            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                // Delegate to the native RecordId deserializer, keep the key part
                RecordId::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(|rid| FlexibleKey(strip_table(&rid.key().to_string())))
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}

/// Record key serialization as a plain key string
pub mod record_key {
    use super::*;

    pub fn serialize<S>(key: &str, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(key)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        FlexibleKey::deserialize(d).map(|f| f.0)
    }
}
