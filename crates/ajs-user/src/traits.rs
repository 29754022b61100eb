use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat user profile: trait name to arbitrary JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Traits(Map<String, Value>);

impl Traits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any value that is not a JSON object becomes an empty mapping.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Overlays `other`: its keys win, keys only present here are kept.
    pub fn merge(&mut self, other: Traits) {
        self.0.extend(other.0);
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for Traits {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Traits {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Map<String, Value>> for Traits {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for Traits {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Traits> for Value {
    fn from(traits: Traits) -> Self {
        traits.into_value()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Traits {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
