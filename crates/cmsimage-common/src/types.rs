//! Core type definitions for managed content.
//!
//! [`ContentKind`] is the variant tag of a content item as the host CMS
//! reports it. Only [`ContentKind::Image`] items carry retrievable binary data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of managed content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Image media backed by a blob.
    Image,
    /// A routable page.
    Page,
    /// A shared block placed on pages.
    Block,
    /// A folder in the content tree.
    Folder,
    /// Any other content type the host exposes.
    Other,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Page => write!(f, "page"),
            Self::Block => write!(f, "block"),
            Self::Folder => write!(f, "folder"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "page" => Ok(Self::Page),
            "block" => Ok(Self::Block),
            "folder" => Ok(Self::Folder),
            "other" => Ok(Self::Other),
            _ => Err(format!("Invalid content kind: {}", s)),
        }
    }
}
