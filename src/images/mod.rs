//! Image services for the processing pipeline.
//!
//! [`ContentImageService`] serves blobs of CMS image records and chains to a
//! fallback service otherwise. [`LocalFileImageService`] and
//! [`RemoteImageService`] are the built-in fallbacks, constructed by name
//! through the [`ServiceRegistry`].

mod content_service;
mod local;
mod path_map;
mod registry;
mod remote;
mod service;

pub use content_service::ContentImageService;
pub use local::LocalFileImageService;
pub use path_map::{PathMapper, RootPathMapper};
pub use registry::{ServiceFactory, ServiceRegistry};
pub use remote::{RemoteImageService, DEFAULT_MAX_BYTES, DEFAULT_TIMEOUT_MS};
pub use service::{ImageService, ServiceDescriptor};
