use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::{AsyncReadExt, BufReader};

use super::error::StorageError;
use super::name::BlobName;
use super::traits::{BlobStore, BoxReader};

/// Filesystem-backed named blob store.
///
/// Blobs live flat in `base_path` under their generated names. Writes go to
/// `{base_path}/.tmp` first and are renamed into place, so a blob is either
/// fully present or absent.
pub struct FilesystemBlobStore {
    base_path: PathBuf,
    max_size: u64,
}

impl FilesystemBlobStore {
    /// Create a new filesystem blob store, creating the directories if absent.
    pub async fn new(base_path: PathBuf, max_size: u64) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_path).await?;
        fs::create_dir_all(base_path.join(".tmp")).await?;
        Ok(Self {
            base_path,
            max_size,
        })
    }

    /// Compute the filesystem path for a stored name.
    fn blob_path(&self, name: &BlobName) -> PathBuf {
        self.base_path.join(name.as_str())
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.base_path
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl BlobStore for FilesystemBlobStore {
    async fn put_stream(
        &self,
        mut reader: BoxReader,
        original_name: &str,
    ) -> Result<BlobName, StorageError> {
        let temp_path = self.temp_path();
        let mut total_bytes: u64 = 0;

        let mut buf = vec![0u8; 64 * 1024]; // 64KB read buffer
        let mut temp_file = fs::File::create(&temp_path).await?;

        loop {
            let n = reader.read(&mut buf).await?;
            if n == 0 {
                break;
            }

            total_bytes += n as u64;
            if total_bytes > self.max_size {
                drop(temp_file);
                let _ = fs::remove_file(&temp_path).await;
                return Err(StorageError::SizeLimitExceeded {
                    actual: total_bytes,
                    limit: self.max_size,
                });
            }

            tokio::io::AsyncWriteExt::write_all(&mut temp_file, &buf[..n]).await?;
        }

        tokio::io::AsyncWriteExt::flush(&mut temp_file).await?;
        drop(temp_file);

        let name = BlobName::generate(original_name);
        let blob_path = self.blob_path(&name);

        if let Err(e) = fs::rename(&temp_path, &blob_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(name)
    }

    async fn get_stream(&self, name: &BlobName) -> Result<BoxReader, StorageError> {
        let blob_path = self.blob_path(name);
        match fs::File::open(&blob_path).await {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.as_str().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, name: &BlobName) -> Result<bool, StorageError> {
        let blob_path = self.blob_path(name);
        Ok(fs::try_exists(&blob_path).await?)
    }

    async fn size(&self, name: &BlobName) -> Result<u64, StorageError> {
        let blob_path = self.blob_path(name);
        match fs::metadata(&blob_path).await {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.as_str().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
