//! Managed content as seen by the image pipeline.
//!
//! The host CMS resolves every incoming request to (at most) one content item.
//! This module models that item as a tagged union so callers branch on the
//! variant instead of downcasting, and defines the narrow traits through which
//! the host exposes the current item ([`ContentResolver`]) and image binary
//! data ([`Blob`]).

mod blob;
mod resolver;

pub use blob::{Blob, BlobStream, FileBlob, MemoryBlob};
pub use resolver::{ContentResolver, StaticContentResolver};

use std::sync::Arc;

use cmsimage_common::{ContentKind, ContentLink};

/// A unit of managed content.
#[derive(Clone)]
pub enum ContentItem {
    /// Image media with retrievable binary data.
    Image(ImageRecord),
    /// A routable page.
    Page(PageRecord),
    /// Anything else the host routes to (blocks, folders, custom types).
    Other(GenericContent),
}

impl ContentItem {
    /// The variant tag of this item.
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Image(_) => ContentKind::Image,
            Self::Page(_) => ContentKind::Page,
            Self::Other(c) => c.kind,
        }
    }

    /// The link identifying this item.
    pub fn content_link(&self) -> &ContentLink {
        match self {
            Self::Image(i) => &i.content_link,
            Self::Page(p) => &p.content_link,
            Self::Other(c) => &c.content_link,
        }
    }

    /// The image record, if this item is one.
    pub fn as_image(&self) -> Option<&ImageRecord> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }
}

impl std::fmt::Debug for ContentItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentItem")
            .field("kind", &self.kind())
            .field("content_link", self.content_link())
            .finish()
    }
}

/// Image media backed by a blob in the host's binary storage.
#[derive(Clone)]
pub struct ImageRecord {
    pub content_link: ContentLink,
    pub name: String,
    pub binary_data: Arc<dyn Blob>,
}

impl ImageRecord {
    pub fn new(content_link: ContentLink, name: impl Into<String>, binary_data: Arc<dyn Blob>) -> Self {
        Self {
            content_link,
            name: name.into(),
            binary_data,
        }
    }
}

/// A routable page. Pages never carry image data.
#[derive(Debug, Clone)]
pub struct PageRecord {
    pub content_link: ContentLink,
    pub name: String,
}

impl PageRecord {
    pub fn new(content_link: ContentLink, name: impl Into<String>) -> Self {
        Self {
            content_link,
            name: name.into(),
        }
    }
}

/// Content of any other kind.
#[derive(Debug, Clone)]
pub struct GenericContent {
    pub content_link: ContentLink,
    pub name: String,
    pub kind: ContentKind,
}

impl GenericContent {
    pub fn new(content_link: ContentLink, name: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            content_link,
            name: name.into(),
            kind,
        }
    }
}
