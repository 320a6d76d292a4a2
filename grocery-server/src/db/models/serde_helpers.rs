//! Serde helpers for SurrealDB documents
//!
//! RecordId fields accept two input shapes:
//! - the string form `table:key` (API JSON)
//! - SurrealDB's native form (database results)

use serde::{Deserialize, Deserializer, Serializer};
use surrealdb::RecordId;

/// Deserialize bool that treats null as false
pub fn bool_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(false))
}

/// Accepts both the string and the native RecordId form
#[derive(Debug, Clone)]
struct FlexibleRecordId(RecordId);

impl<'de> Deserialize<'de> for FlexibleRecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct FlexibleVisitor;

        impl<'de> Visitor<'de> for FlexibleVisitor {
            type Value = FlexibleRecordId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string 'table:key' or RecordId")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .parse::<RecordId>()
                    .map(FlexibleRecordId)
                    .map_err(|_| de::Error::custom(format!("invalid RecordId: {}", value)))
            }

            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                RecordId::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(FlexibleRecordId)
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}

/// Option<RecordId> serialization as "table:key" string
pub mod option_record_id {
    use super::*;

    pub fn serialize<S>(id: &Option<RecordId>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => s.serialize_some(&id.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<FlexibleRecordId>::deserialize(d).map(|opt| opt.map(|f| f.0))
    }
}

/// Render an optional id as `table:key`, empty when absent
pub fn id_to_string(id: &Option<RecordId>) -> String {
    id.as_ref().map(|id| id.to_string()).unwrap_or_default()
}

/// Stored Unix milliseconds as a UTC timestamp; out-of-range values clamp to the epoch
pub fn millis_to_datetime(millis: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Doc {
        #[serde(default, skip_serializing_if = "Option::is_none", with = "option_record_id")]
        id: Option<RecordId>,
        #[serde(default, deserialize_with = "bool_false")]
        flag: bool,
    }

    #[test]
    fn parses_string_record_id() {
        let doc: Doc = serde_json::from_str(r#"{"id":"product:domates","flag":null}"#).unwrap();
        let id = doc.id.unwrap();
        assert_eq!(id.table(), "product");
        assert!(!doc.flag);
    }

    #[test]
    fn rejects_malformed_record_id() {
        assert!(serde_json::from_str::<Doc>(r#"{"id":"no table here"}"#).is_err());
    }

    #[test]
    fn skips_absent_id_on_serialize() {
        let json = serde_json::to_string(&Doc { id: None, flag: true }).unwrap();
        assert_eq!(json, r#"{"flag":true}"#);
    }

    #[test]
    fn id_to_string_roundtrip() {
        let id = RecordId::from_table_key("order", "abc");
        assert_eq!(id_to_string(&Some(id)), "order:abc");
        assert_eq!(id_to_string(&None), "");
    }

    #[test]
    fn millis_convert_to_utc() {
        let dt = millis_to_datetime(1_700_000_000_123);
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_123);
        assert_eq!(millis_to_datetime(0).timestamp(), 0);
    }
}
