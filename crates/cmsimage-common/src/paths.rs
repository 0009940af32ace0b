//! Path utilities for detecting image requests by extension.
//!
//! The local-file fallback only serves paths that look like images. Query
//! strings are ignored so `/img/a.png?width=200` still counts as a png.

use std::path::Path;

/// List of supported image file extensions.
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff",
];

/// Check if a path has an image file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use cmsimage_common::paths::is_image_file;
///
/// assert!(is_image_file(Path::new("poster.jpg")));
/// assert!(is_image_file(Path::new("/path/to/image.PNG")));
/// assert!(!is_image_file(Path::new("notes.txt")));
/// ```
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check if a request path (which may carry a query string) names an image.
///
/// # Examples
///
/// ```
/// use cmsimage_common::paths::is_image_path;
///
/// assert!(is_image_path("/media/a.jpg?width=300"));
/// assert!(!is_image_path("/media/a.pdf"));
/// ```
pub fn is_image_path(path: &str) -> bool {
    is_image_file(Path::new(strip_query(path)))
}

/// Drop the query string and fragment from a request path.
pub fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
