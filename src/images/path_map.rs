//! Mapping of virtual request paths onto the local filesystem.

use std::path::{Component, Path, PathBuf};

use cmsimage_common::paths::strip_query;
use cmsimage_common::{Error, Result};

/// Translates a virtual path or id into a local filesystem path.
pub trait PathMapper: Send + Sync {
    fn map_path(&self, virtual_path: &str) -> Result<PathBuf>;
}

/// Maps virtual paths underneath a fixed root directory.
///
/// `~/img/a.jpg`, `/img/a.jpg` and `img/a.jpg` all map to `{root}/img/a.jpg`.
/// Query strings are dropped and paths escaping the root are rejected.
#[derive(Debug, Clone)]
pub struct RootPathMapper {
    root: PathBuf,
}

impl RootPathMapper {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PathMapper for RootPathMapper {
    fn map_path(&self, virtual_path: &str) -> Result<PathBuf> {
        let trimmed = strip_query(virtual_path.trim());
        let relative = trimmed
            .strip_prefix('~')
            .unwrap_or(trimmed)
            .trim_start_matches(['/', '\\']);

        if relative.is_empty() {
            return Err(Error::invalid_input(format!(
                "cannot map empty path '{}'",
                virtual_path
            )));
        }

        let mut mapped = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => mapped.push(part),
                Component::CurDir => {}
                _ => {
                    return Err(Error::invalid_input(format!(
                        "path '{}' escapes the content root",
                        virtual_path
                    )))
                }
            }
        }

        Ok(mapped)
    }
}

impl<T: PathMapper + ?Sized> PathMapper for std::sync::Arc<T> {
    fn map_path(&self, virtual_path: &str) -> Result<PathBuf> {
        (**self).map_path(virtual_path)
    }
}
