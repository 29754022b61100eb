use serde_json::Value;

/// Recursively merge `patch` into `base`.
///
/// Objects merge key by key. Scalars and arrays in `patch` replace whatever
/// `base` holds. A `null` in `patch` leaves the `base` value in place, so a
/// caller can spell out a key without overriding its default.
pub fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, value) in patch_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        if !value.is_null() {
                            base_map.insert(key, value);
                        }
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}
