//! Cmsimage - CMS-backed image service for image processing pipelines
//!
//! Serves original image bytes from the content repository's blob storage
//! and falls back to another image service when the current request does
//! not route to an image record.

pub mod config;
pub mod content;
pub mod images;
