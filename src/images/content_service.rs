//! Image service backed by the CMS content repository.
//!
//! When the current request routes to an image record its blob is served;
//! otherwise the request may be handed to a fallback [`ImageService`].

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use async_trait::async_trait;
use cmsimage_common::{Error, Result};
use reqwest::Url;
use tracing::{debug, warn};

use super::local::LocalFileImageService;
use super::path_map::PathMapper;
use super::registry::ServiceRegistry;
use super::service::{ImageService, ServiceDescriptor};
use crate::config::{ImageServiceConfig, ServiceSettings, ENABLE_FALLBACK_KEY, FALLBACK_SERVICE_KEY};
use crate::content::{Blob, ContentResolver, ImageRecord};

/// Serves image blobs of the content item routed for the current request.
///
/// Validation through the fallback is gated by `fallback_enabled`; retrieval
/// always delegates to the fallback when the current item is not an image.
pub struct ContentImageService {
    resolver: Arc<dyn ContentResolver>,
    fallback: Option<Arc<dyn ImageService>>,
    fallback_enabled: bool,
    path_mapper: Option<Arc<dyn PathMapper>>,
    descriptor: ServiceDescriptor,
}

impl ContentImageService {
    /// Create a service with explicit collaborators.
    ///
    /// # Arguments
    ///
    /// * `resolver` - Source of the current request's content item
    /// * `fallback` - Service used when the item is not an image record
    /// * `fallback_enabled` - Whether validation may consult the fallback
    pub fn new(
        resolver: Arc<dyn ContentResolver>,
        fallback: Option<Arc<dyn ImageService>>,
        fallback_enabled: bool,
    ) -> Self {
        Self {
            resolver,
            fallback,
            fallback_enabled,
            path_mapper: None,
            descriptor: ServiceDescriptor::default(),
        }
    }

    /// Create a service the way the host wires it, from settings.
    ///
    /// `FallBackImageService` names a registry entry; when it is missing,
    /// unknown, or its factory fails the built-in [`LocalFileImageService`] is
    /// used instead. `EnableFallBack` must be `true` (any case) to enable
    /// fallback validation.
    pub fn from_settings(
        resolver: Arc<dyn ContentResolver>,
        descriptor: ServiceDescriptor,
        registry: &ServiceRegistry,
    ) -> Self {
        let fallback = resolve_fallback(&descriptor, registry);
        let fallback_enabled = descriptor
            .settings
            .get_bool(ENABLE_FALLBACK_KEY)
            .unwrap_or(false);

        debug!(
            fallback = fallback.name(),
            fallback_enabled, "Configured content image service"
        );

        Self {
            resolver,
            fallback: Some(fallback),
            fallback_enabled,
            path_mapper: None,
            descriptor,
        }
    }

    /// Create a service from a loaded configuration file.
    pub fn from_config(
        resolver: Arc<dyn ContentResolver>,
        config: &ImageServiceConfig,
        registry: &ServiceRegistry,
    ) -> anyhow::Result<Self> {
        let descriptor = ServiceDescriptor::new(config.settings.clone())
            .with_prefix(config.prefix.clone())
            .with_whitelist(config.whitelist_urls()?);
        Ok(Self::from_settings(resolver, descriptor, registry))
    }

    /// Use `mapper` to turn virtual paths into local paths for file-local fallbacks.
    #[must_use]
    pub fn with_path_mapper(mut self, mapper: Arc<dyn PathMapper>) -> Self {
        self.path_mapper = Some(mapper);
        self
    }

    #[must_use]
    pub fn with_descriptor(mut self, descriptor: ServiceDescriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    pub fn fallback(&self) -> Option<&Arc<dyn ImageService>> {
        self.fallback.as_ref()
    }

    pub fn fallback_enabled(&self) -> bool {
        self.fallback_enabled
    }

    fn current_image(&self) -> Option<ImageRecord> {
        let content = self.resolver.current_content();
        match &content {
            Some(item) => debug!(kind = %item.kind(), link = %item.content_link(), "Resolved current content"),
            None => debug!("No content routed for current request"),
        }
        content.and_then(|item| item.as_image().cloned())
    }

    fn map_for(&self, fallback: &dyn ImageService, input: &str) -> Result<String> {
        if !fallback.is_file_local_service() {
            return Ok(input.to_string());
        }

        let mapper = self
            .path_mapper
            .as_ref()
            .ok_or_else(|| Error::host_unavailable("no path mapper for file-local fallback"))?;
        let mapped = mapper.map_path(input)?;
        mapped
            .to_str()
            .map(str::to_string)
            .ok_or_else(|| Error::invalid_input(format!("mapped path is not UTF-8: {:?}", mapped)))
    }

    fn validate_with_fallback(&self, path: Option<&str>) -> Result<bool> {
        let fallback = self
            .fallback
            .as_deref()
            .ok_or_else(|| Error::host_unavailable("fallback enabled but none configured"))?;

        let mapped = match path {
            Some(p) => Some(self.map_for(fallback, p)?),
            None if fallback.is_file_local_service() => {
                return Err(Error::invalid_input("file-local fallback needs a path"))
            }
            None => None,
        };

        catch_unwind(AssertUnwindSafe(|| fallback.is_valid_request(mapped.as_deref())))
            .map_err(|_| Error::internal(format!("{} fallback panicked during validation", fallback.name())))
    }

    async fn get_from_fallback(&self, id: Option<&str>) -> Result<Vec<u8>> {
        let fallback = self.fallback.as_deref().ok_or_else(|| {
            Error::not_found("current content is not an image and no fallback is configured")
        })?;

        debug!(fallback = fallback.name(), "Delegating image retrieval");

        if fallback.is_file_local_service() {
            let id = id.ok_or_else(|| Error::invalid_input("file-local fallback needs an image id"))?;
            let local = self.map_for(fallback, id)?;
            return fallback.get_image(Some(local.as_str())).await;
        }

        fallback.get_image(id).await
    }
}

fn resolve_fallback(descriptor: &ServiceDescriptor, registry: &ServiceRegistry) -> Arc<dyn ImageService> {
    if let Some(name) = descriptor.settings.get_non_blank(FALLBACK_SERVICE_KEY) {
        match registry.create(name, descriptor.clone()) {
            Some(Ok(service)) => return service,
            Some(Err(e)) => warn!("Failed to construct fallback image service '{}': {}", name, e),
            None => warn!("Unknown fallback image service '{}'", name),
        }
    }

    Arc::new(LocalFileImageService::new(descriptor.clone()))
}

/// Copy a blob's full contents into memory.
async fn read_blob(blob: &dyn Blob) -> Result<Vec<u8>> {
    let mut stream = blob.open_read().await?;
    let mut buf = Vec::new();
    tokio::io::copy(&mut stream, &mut buf).await?;
    Ok(buf)
}

#[async_trait]
impl ImageService for ContentImageService {
    fn name(&self) -> &'static str {
        "content"
    }

    fn is_valid_request(&self, path: Option<&str>) -> bool {
        if self.current_image().is_some() {
            return true;
        }

        if !self.fallback_enabled {
            return false;
        }

        match self.validate_with_fallback(path) {
            Ok(valid) => valid,
            Err(e) => {
                warn!("Fallback validation failed: {}", e);
                false
            }
        }
    }

    async fn get_image(&self, id: Option<&str>) -> Result<Vec<u8>> {
        let Some(image) = self.current_image() else {
            return self.get_from_fallback(id).await;
        };

        let data = read_blob(image.binary_data.as_ref()).await?;
        debug!(blob = image.binary_data.id(), bytes = data.len(), "Read image blob");
        Ok(data)
    }

    fn prefix(&self) -> &str {
        &self.descriptor.prefix
    }

    fn is_file_local_service(&self) -> bool {
        false
    }

    fn settings(&self) -> &ServiceSettings {
        &self.descriptor.settings
    }

    fn whitelist(&self) -> &[Url] {
        &self.descriptor.whitelist
    }
}
