//! Registry of image services constructible from configuration.
//!
//! The host names its fallback service with a string setting; the
//! [`ServiceRegistry`] resolves that name to a factory function registered at
//! startup.

use std::sync::Arc;

use cmsimage_common::Result;

use super::local::LocalFileImageService;
use super::remote::RemoteImageService;
use super::service::{ImageService, ServiceDescriptor};

/// Builds an image service from its descriptor.
pub type ServiceFactory = fn(ServiceDescriptor) -> Result<Arc<dyn ImageService>>;

/// Name to factory mapping for image services.
///
/// Names are matched exactly. Later registrations under an existing name
/// replace the earlier factory.
///
/// # Examples
///
/// ```rust
/// use cmsimage::images::{ImageService, ServiceDescriptor, ServiceRegistry};
///
/// let registry = ServiceRegistry::with_builtins();
/// let service = registry
///     .create("LocalFileImageService", ServiceDescriptor::default())
///     .unwrap()
///     .unwrap();
/// assert!(service.is_file_local_service());
/// ```
pub struct ServiceRegistry {
    factories: Vec<(String, ServiceFactory)>,
}

impl ServiceRegistry {
    /// Create an empty registry with no services.
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Create a registry holding the built-in local and remote services.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("LocalFileImageService", local_factory);
        registry.register("local", local_factory);
        registry.register("RemoteImageService", remote_factory);
        registry.register("remote", remote_factory);
        registry
    }

    /// Register a factory under `name`.
    pub fn register(&mut self, name: impl Into<String>, factory: ServiceFactory) {
        let name = name.into();
        if let Some(slot) = self.factories.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = factory;
        } else {
            self.factories.push((name, factory));
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.iter().any(|(n, _)| n == name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.factories.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Construct the service registered under `name`.
    ///
    /// Returns `None` if no service with the given name has been registered.
    pub fn create(
        &self,
        name: &str,
        descriptor: ServiceDescriptor,
    ) -> Option<Result<Arc<dyn ImageService>>> {
        self.factories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, factory)| factory(descriptor))
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn local_factory(descriptor: ServiceDescriptor) -> Result<Arc<dyn ImageService>> {
    Ok(Arc::new(LocalFileImageService::new(descriptor)))
}

fn remote_factory(descriptor: ServiceDescriptor) -> Result<Arc<dyn ImageService>> {
    Ok(Arc::new(RemoteImageService::new(descriptor)?))
}
