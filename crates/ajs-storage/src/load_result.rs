use serde_json::Value;

/// Result of loading a stored value - distinguishes "not found" from corruption.
#[derive(Debug)]
pub struct LoadResult {
    pub value: Option<Value>,
    /// Present if the slot exists but could not be parsed
    pub corruption_error: Option<String>,
}
