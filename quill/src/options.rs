//! Engine options
//!
//! A free-form map of settings. The engine itself does not read any of them;
//! they are kept for embedders and tags that need shared configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Engine configuration
///
/// ```rust
/// use quill::Options;
///
/// let options = Options::from_json(r#"{"site": "example.org"}"#).unwrap();
/// assert_eq!(options.get("site").and_then(|v| v.as_str()), Some("example.org"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    values: Map<String, Value>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads options from a JSON object
    pub fn from_json(src: &str) -> serde_json::Result<Self> {
        serde_json::from_str(src)
    }

    /// Returns these options with `key` set to `value`
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
