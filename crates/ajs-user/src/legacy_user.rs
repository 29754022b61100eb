use crate::Traits;

use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;

/// Combined `{id, traits}` record written by older releases under the old
/// cookie key. Only ever read.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    traits: Value,
}

impl LegacyUser {
    /// Only a JSON object is a legacy record; arrays and scalars are rejected.
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        match serde_json::from_str::<Value>(raw)? {
            record @ Value::Object(_) => serde_json::from_value(record),
            other => Err(serde_json::Error::custom(format!(
                "expected a legacy user object, found {other}"
            ))),
        }
    }

    /// Missing or non-object traits read as empty.
    pub fn traits(&self) -> Traits {
        Traits::from_value(self.traits.clone())
    }
}
