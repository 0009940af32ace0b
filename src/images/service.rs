//! The image service capability.
//!
//! An image pipeline asks an [`ImageService`] two things: whether it can
//! serve a request at all, and the raw bytes for it. Services can be chained,
//! so the trait is object safe and used as `Arc<dyn ImageService>`.

use async_trait::async_trait;
use cmsimage_common::Result;
use reqwest::Url;

use crate::config::ServiceSettings;

/// A source of original image bytes for the processing pipeline.
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this service can handle the request for `path`.
    fn is_valid_request(&self, path: Option<&str>) -> bool;

    /// Fetch the image bytes for `id`.
    async fn get_image(&self, id: Option<&str>) -> Result<Vec<u8>>;

    /// Request prefix the pipeline matches against before picking this service.
    fn prefix(&self) -> &str;

    /// Whether `path`/`id` must be a local filesystem path.
    ///
    /// Callers chaining to a file-local service map virtual paths through a
    /// [`PathMapper`](crate::images::PathMapper) first.
    fn is_file_local_service(&self) -> bool;

    /// Service specific settings.
    fn settings(&self) -> &ServiceSettings;

    /// Remote origins this service may fetch from.
    fn whitelist(&self) -> &[Url];
}

/// Descriptive configuration shared by all built-in services.
///
/// These values are pass-through: the services store them and report them
/// back but only [`RemoteImageService`](crate::images::RemoteImageService)
/// acts on any of them.
#[derive(Debug, Clone, Default)]
pub struct ServiceDescriptor {
    pub prefix: String,
    pub settings: ServiceSettings,
    pub whitelist: Vec<Url>,
}

impl ServiceDescriptor {
    pub fn new(settings: ServiceSettings) -> Self {
        Self {
            prefix: String::new(),
            settings,
            whitelist: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_whitelist(mut self, whitelist: Vec<Url>) -> Self {
        self.whitelist = whitelist;
        self
    }
}
