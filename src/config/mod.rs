mod types;

pub use types::*;

use anyhow::{Context, Result};
use reqwest::Url;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<ImageServiceConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: ImageServiceConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<ImageServiceConfig> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./cmsimage.toml",
        "~/.config/cmsimage/config.toml",
        "/etc/cmsimage/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::info!("Loading image service config from {:?}", path);
            return load_config(path);
        }
    }

    Ok(ImageServiceConfig::default())
}

impl ImageServiceConfig {
    /// Parse the whitelist entries into URLs.
    pub fn whitelist_urls(&self) -> Result<Vec<Url>> {
        self.whitelist
            .iter()
            .map(|entry| parse_whitelist_entry(entry))
            .collect()
    }
}

fn parse_whitelist_entry(entry: &str) -> Result<Url> {
    let url = Url::parse(entry.trim())
        .with_context(|| format!("Invalid whitelist URL: {}", entry))?;

    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("Whitelist URL must be http or https: {}", entry);
    }
    if url.host_str().is_none() {
        anyhow::bail!("Whitelist URL has no host: {}", entry);
    }

    Ok(url)
}

/// Validate configuration
fn validate_config(config: &ImageServiceConfig) -> Result<()> {
    config.whitelist_urls()?;

    if let Some(value) = config.settings.get(ENABLE_FALLBACK_KEY) {
        if config.settings.get_bool(ENABLE_FALLBACK_KEY).is_none() {
            tracing::warn!(
                "{} = {:?} is not a boolean; fallback stays disabled",
                ENABLE_FALLBACK_KEY,
                value
            );
        }
    }

    Ok(())
}
