use std::io::Cursor;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use super::error::StorageError;
use super::name::BlobName;

/// Type alias for a boxed async reader.
pub type BoxReader = Box<dyn AsyncRead + Unpin + Send>;

/// Named blob storage.
///
/// Callers are expected to reject empty payloads before storing; the store
/// itself does not special-case zero-length writes.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes and return the generated stored name.
    async fn put(&self, data: &[u8], original_name: &str) -> Result<BlobName, StorageError> {
        let reader: BoxReader = Box::new(Cursor::new(data.to_vec()));
        self.put_stream(reader, original_name).await
    }

    /// Store data from an async reader and return the generated stored name.
    async fn put_stream(
        &self,
        reader: BoxReader,
        original_name: &str,
    ) -> Result<BlobName, StorageError>;

    /// Retrieve a blob as a streaming async reader.
    async fn get_stream(&self, name: &BlobName) -> Result<BoxReader, StorageError>;

    /// Check whether a blob exists.
    async fn exists(&self, name: &BlobName) -> Result<bool, StorageError>;

    /// Get the size of a blob in bytes.
    async fn size(&self, name: &BlobName) -> Result<u64, StorageError>;
}
