//! Fallback fetching images from whitelisted remote origins over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use cmsimage_common::{Error, Result};
use reqwest::{Client, Url};

use super::service::{ImageService, ServiceDescriptor};
use crate::config::{ServiceSettings, MAX_BYTES_KEY, TIMEOUT_KEY};

/// Default download limit (4 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 4_194_304;
/// Default download timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Downloads images from absolute http(s) URLs.
///
/// A URL must share scheme, host and port with one of the whitelist entries
/// and start with that entry's path. An empty whitelist allows nothing.
#[derive(Debug, Clone)]
pub struct RemoteImageService {
    descriptor: ServiceDescriptor,
    client: Client,
    max_bytes: u64,
}

impl RemoteImageService {
    /// Create a service, reading `MaxBytes` and `Timeout` from the settings.
    pub fn new(descriptor: ServiceDescriptor) -> Result<Self> {
        let max_bytes = descriptor
            .settings
            .get_u64(MAX_BYTES_KEY)
            .unwrap_or(DEFAULT_MAX_BYTES);
        let timeout_ms = descriptor
            .settings
            .get_u64(TIMEOUT_KEY)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            descriptor,
            client,
            max_bytes,
        })
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    fn allowed_url(&self, path: &str) -> Option<Url> {
        let url = Url::parse(path).ok()?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return None;
        }

        self.descriptor
            .whitelist
            .iter()
            .any(|allowed| matches_origin(allowed, &url))
            .then_some(url)
    }
}

fn matches_origin(allowed: &Url, url: &Url) -> bool {
    allowed.scheme() == url.scheme()
        && allowed
            .host_str()
            .zip(url.host_str())
            .is_some_and(|(a, b)| a.eq_ignore_ascii_case(b))
        && allowed.port_or_known_default() == url.port_or_known_default()
        && url.path().starts_with(allowed.path())
}

#[async_trait]
impl ImageService for RemoteImageService {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn is_valid_request(&self, path: Option<&str>) -> bool {
        path.and_then(|p| self.allowed_url(p)).is_some()
    }

    async fn get_image(&self, id: Option<&str>) -> Result<Vec<u8>> {
        let raw = id.ok_or_else(|| Error::invalid_input("remote image request without a URL"))?;
        let url = self
            .allowed_url(raw)
            .ok_or_else(|| Error::invalid_input(format!("URL not allowed: {raw}")))?;

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::io(format!("failed to download {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::not_found(format!(
                "{url} answered with {}",
                response.status()
            )));
        }

        if response
            .content_length()
            .is_some_and(|len| len > self.max_bytes)
        {
            return Err(Error::invalid_input(format!(
                "{url} exceeds the {} byte limit",
                self.max_bytes
            )));
        }

        let mut data = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| Error::io(format!("failed to read {url}: {e}")))?
        {
            if (data.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(Error::invalid_input(format!(
                    "{url} exceeds the {} byte limit",
                    self.max_bytes
                )));
            }
            data.extend_from_slice(&chunk);
        }

        tracing::debug!(%url, bytes = data.len(), "Downloaded remote image");
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
