//! Built-in fallback serving images straight from local disk.

use async_trait::async_trait;
use cmsimage_common::paths::is_image_path;
use cmsimage_common::{Error, Result};
use reqwest::Url;

use super::service::{ImageService, ServiceDescriptor};
use crate::config::ServiceSettings;

/// Serves image files from the local filesystem.
///
/// Requests are already-mapped local paths; only paths with an image
/// extension are considered valid.
#[derive(Debug, Clone, Default)]
pub struct LocalFileImageService {
    descriptor: ServiceDescriptor,
}

impl LocalFileImageService {
    pub fn new(descriptor: ServiceDescriptor) -> Self {
        Self { descriptor }
    }
}

#[async_trait]
impl ImageService for LocalFileImageService {
    fn name(&self) -> &'static str {
        "local"
    }

    fn is_valid_request(&self, path: Option<&str>) -> bool {
        path.is_some_and(is_image_path)
    }

    async fn get_image(&self, id: Option<&str>) -> Result<Vec<u8>> {
        let path = id.ok_or_else(|| Error::invalid_input("local image request without a path"))?;

        match tokio::fs::read(path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::not_found(path.to_string()))
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn prefix(&self) -> &str {
        &self.descriptor.prefix
    }

    fn is_file_local_service(&self) -> bool {
        true
    }

    fn settings(&self) -> &ServiceSettings {
        &self.descriptor.settings
    }

    fn whitelist(&self) -> &[Url] {
        &self.descriptor.whitelist
    }
}
