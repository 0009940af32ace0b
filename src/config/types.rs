use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Setting naming the fallback service to construct.
pub const FALLBACK_SERVICE_KEY: &str = "FallBackImageService";
/// Setting enabling validation through the fallback service.
pub const ENABLE_FALLBACK_KEY: &str = "EnableFallBack";
/// Maximum download size for remote images, in bytes.
pub const MAX_BYTES_KEY: &str = "MaxBytes";
/// Remote download timeout, in milliseconds.
pub const TIMEOUT_KEY: &str = "Timeout";

/// Top-level configuration of an image service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageServiceConfig {
    /// Request prefix the pipeline routes to this service.
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub settings: ServiceSettings,

    /// Allowed remote origins (absolute http/https URLs).
    #[serde(default)]
    pub whitelist: Vec<String>,
}

/// Key/value settings handed to an image service.
///
/// Values are kept as strings the way the image pipeline passes them around;
/// typed accessors parse on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSettings(BTreeMap<String, String>);

impl ServiceSettings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The value of `key` unless it is missing or only whitespace.
    pub fn get_non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Parse `key` as a boolean.
    ///
    /// Accepts `true`/`false` in any case, surrounded by whitespace. Anything
    /// else, including a missing key, yields `None`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        let value = self.get(key)?.trim();
        if value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key)?.trim().parse().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ServiceSettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Setting values as they may appear in a TOML file.
#[derive(Deserialize)]
#[serde(untagged)]
enum SettingValue {
    String(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl SettingValue {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::Bool(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, SettingValue>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(k, v)| (k, v.into_string()))
                .collect(),
        ))
    }
}
