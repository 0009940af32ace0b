//! Binary large objects holding image data.
//!
//! A [`Blob`] only knows how to open a fresh read stream over its bytes. The
//! stream is owned by the caller and released when dropped.

use std::path::PathBuf;
use std::pin::Pin;

use async_trait::async_trait;
use cmsimage_common::{Error, Result};
use tokio::io::AsyncRead;

/// Owned byte stream over a blob's contents.
pub type BlobStream = Pin<Box<dyn AsyncRead + Send>>;

/// Binary data stored by the host content system.
#[async_trait]
pub trait Blob: Send + Sync {
    /// Identifier of the blob in the host storage (typically a URI).
    fn id(&self) -> &str;

    /// Open a new read stream positioned at the start of the blob.
    async fn open_read(&self) -> Result<BlobStream>;
}

/// A blob held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryBlob {
    id: String,
    data: Vec<u8>,
}

impl MemoryBlob {
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

#[async_trait]
impl Blob for MemoryBlob {
    fn id(&self) -> &str {
        &self.id
    }

    async fn open_read(&self) -> Result<BlobStream> {
        Ok(Box::pin(std::io::Cursor::new(self.data.clone())))
    }
}

/// A blob stored as a file on local disk.
#[derive(Debug, Clone)]
pub struct FileBlob {
    id: String,
    path: PathBuf,
}

impl FileBlob {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl Blob for FileBlob {
    fn id(&self) -> &str {
        &self.id
    }

    async fn open_read(&self) -> Result<BlobStream> {
        let file = tokio::fs::File::open(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::not_found(format!("blob {} ({})", self.id, self.path.display()))
            } else {
                Error::Io(e)
            }
        })?;
        Ok(Box::pin(file))
    }
}
