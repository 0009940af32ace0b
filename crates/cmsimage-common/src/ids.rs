//! Typed content identifiers.
//!
//! A [`ContentLink`] addresses one item in the host content repository. It is
//! made of the numeric content id, an optional work (version) id and an
//! optional provider name for content served by a non-default provider.

use serde::{Deserialize, Serialize};

/// Reference to a managed content item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentLink {
    id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    work_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
}

impl ContentLink {
    /// Link to the published version of an item in the default provider.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            work_id: None,
            provider: None,
        }
    }

    /// Pin the link to a specific version.
    #[must_use]
    pub fn with_work_id(mut self, work_id: u64) -> Self {
        self.work_id = Some(work_id);
        self
    }

    /// Route the link to a named content provider.
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn work_id(&self) -> Option<u64> {
        self.work_id
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }
}

impl std::fmt::Display for ContentLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)?;
        match (self.work_id, self.provider.as_deref()) {
            (None, None) => Ok(()),
            (Some(work), None) => write!(f, "_{}", work),
            (None, Some(provider)) => write!(f, "__{}", provider),
            (Some(work), Some(provider)) => write!(f, "_{}_{}", work, provider),
        }
    }
}

impl std::str::FromStr for ContentLink {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '_');
        let id = parts
            .next()
            .and_then(|p| p.parse::<u64>().ok())
            .ok_or_else(|| format!("Invalid content link: {}", s))?;

        let work_id = match parts.next() {
            None | Some("") => None,
            Some(w) => Some(
                w.parse::<u64>()
                    .map_err(|_| format!("Invalid work id in content link: {}", s))?,
            ),
        };

        let provider = match parts.next() {
            None | Some("") => None,
            Some(p) => Some(p.to_string()),
        };

        Ok(Self {
            id,
            work_id,
            provider,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain() {
        assert_eq!(ContentLink::new(7).to_string(), "7");
    }

    #[test]
    fn test_display_with_parts() {
        assert_eq!(ContentLink::new(7).with_work_id(3).to_string(), "7_3");
        assert_eq!(
            ContentLink::new(7).with_provider("dam").to_string(),
            "7__dam"
        );
        assert_eq!(
            ContentLink::new(7)
                .with_work_id(3)
                .with_provider("dam")
                .to_string(),
            "7_3_dam"
        );
    }

    #[test]
    fn test_parse() {
        let link: ContentLink = "12_4_dam".parse().unwrap();
        assert_eq!(link.id(), 12);
        assert_eq!(link.work_id(), Some(4));
        assert_eq!(link.provider(), Some("dam"));

        let link: ContentLink = "12__dam".parse().unwrap();
        assert_eq!(link.work_id(), None);
        assert_eq!(link.provider(), Some("dam"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ContentLink>().is_err());
        assert!("abc".parse::<ContentLink>().is_err());
        assert!("1_x".parse::<ContentLink>().is_err());
    }

    #[test]
    fn test_serde_skips_empty_parts() {
        let json = serde_json::to_string(&ContentLink::new(5)).unwrap();
        assert_eq!(json, r#"{"id":5}"#);
    }
}
