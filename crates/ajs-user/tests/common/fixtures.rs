use ajs_user::Traits;

use serde_json::{Value, json};

/// Builds traits from a `json!` object literal.
pub fn traits(value: Value) -> Traits {
    Traits::from_value(value)
}

/// Legacy combined cookie as older releases wrote it.
pub fn legacy_cookie(id: &str, traits: Value) -> String {
    json!({ "id": id, "traits": traits }).to_string()
}
