//! Cmsimage-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across cmsimage:
//!
//! - **Typed IDs**: [`ContentLink`], the identifier of a managed content item
//! - **Core Types**: [`ContentKind`], the variant tag of a content item
//! - **Path Utilities**: Functions to detect image files by extension
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use cmsimage_common::{ContentKind, ContentLink, Error, Result};
//! use cmsimage_common::paths::is_image_path;
//!
//! let link = ContentLink::new(42);
//! assert_eq!(link.to_string(), "42");
//!
//! assert_eq!(ContentKind::Image.to_string(), "image");
//! assert!(is_image_path("/globalassets/logo.png"));
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("image"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
