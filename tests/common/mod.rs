//! Shared fixtures for integration tests.
//!
//! Provides content item builders and stub [`ImageService`] implementations
//! that record what they were asked.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cmsimage::config::ServiceSettings;
use cmsimage::content::{
    Blob, BlobStream, ContentItem, GenericContent, ImageRecord, MemoryBlob, PageRecord,
    StaticContentResolver,
};
use cmsimage::images::ImageService;
use cmsimage_common::{ContentKind, ContentLink, Error, Result};
use reqwest::Url;

pub fn image_item(data: &[u8]) -> ContentItem {
    ContentItem::Image(ImageRecord::new(
        ContentLink::new(101),
        "hero.jpg",
        Arc::new(MemoryBlob::new("blob://hero", data.to_vec())),
    ))
}

pub fn image_item_with_blob(blob: Arc<dyn Blob>) -> ContentItem {
    ContentItem::Image(ImageRecord::new(ContentLink::new(102), "broken.jpg", blob))
}

pub fn page_item() -> ContentItem {
    ContentItem::Page(PageRecord::new(ContentLink::new(5), "Start"))
}

pub fn block_item() -> ContentItem {
    ContentItem::Other(GenericContent::new(
        ContentLink::new(9),
        "Teaser",
        ContentKind::Block,
    ))
}

pub fn resolver(content: Option<ContentItem>) -> Arc<StaticContentResolver> {
    Arc::new(StaticContentResolver::new(content))
}

/// Stub fallback answering with fixed values and recording its inputs.
pub struct StubImageService {
    pub file_local: bool,
    pub valid: bool,
    pub image: Vec<u8>,
    pub seen_paths: Mutex<Vec<Option<String>>>,
    pub seen_ids: Mutex<Vec<Option<String>>>,
    settings: ServiceSettings,
}

impl StubImageService {
    pub fn new(file_local: bool, valid: bool) -> Self {
        Self {
            file_local,
            valid,
            image: b"fallback".to_vec(),
            seen_paths: Mutex::new(Vec::new()),
            seen_ids: Mutex::new(Vec::new()),
            settings: ServiceSettings::new(),
        }
    }

    pub fn paths(&self) -> Vec<Option<String>> {
        self.seen_paths.lock().unwrap().clone()
    }

    pub fn ids(&self) -> Vec<Option<String>> {
        self.seen_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageService for StubImageService {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn is_valid_request(&self, path: Option<&str>) -> bool {
        self.seen_paths
            .lock()
            .unwrap()
            .push(path.map(str::to_string));
        self.valid
    }

    async fn get_image(&self, id: Option<&str>) -> Result<Vec<u8>> {
        self.seen_ids.lock().unwrap().push(id.map(str::to_string));
        Ok(self.image.clone())
    }

    fn prefix(&self) -> &str {
        ""
    }

    fn is_file_local_service(&self) -> bool {
        self.file_local
    }

    fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    fn whitelist(&self) -> &[Url] {
        &[]
    }
}

/// Fallback whose validation panics and whose retrieval fails.
pub struct BrokenImageService {
    settings: ServiceSettings,
}

impl BrokenImageService {
    pub fn new() -> Self {
        Self {
            settings: ServiceSettings::new(),
        }
    }
}

#[async_trait]
impl ImageService for BrokenImageService {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn is_valid_request(&self, _path: Option<&str>) -> bool {
        panic!("fallback validation exploded");
    }

    async fn get_image(&self, _id: Option<&str>) -> Result<Vec<u8>> {
        Err(Error::not_found("broken fallback has no images"))
    }

    fn prefix(&self) -> &str {
        ""
    }

    fn is_file_local_service(&self) -> bool {
        false
    }

    fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    fn whitelist(&self) -> &[Url] {
        &[]
    }
}

/// Blob whose stream cannot be opened.
pub struct UnreadableBlob;

#[async_trait]
impl Blob for UnreadableBlob {
    fn id(&self) -> &str {
        "blob://unreadable"
    }

    async fn open_read(&self) -> Result<BlobStream> {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "blob storage offline",
        )))
    }
}
