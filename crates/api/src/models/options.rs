use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Construction-time configuration for a formatter.
///
/// `pretty` is understood by every formatter; anything else lands in
/// `extensions` and is read by the formatter that knows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatterOptions {
    #[serde(default)]
    pub pretty: bool,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl FormatterOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    pub fn extension_str(&self, key: &str) -> Option<&str> {
        self.extension(key).and_then(Value::as_str)
    }
}
