use std::fmt;

use uuid::Uuid;

use super::error::StorageError;

/// Longest extension carried over from an original upload filename.
const MAX_EXTENSION_LEN: usize = 10;

/// A validated stored filename: a single flat path component inside the
/// storage directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlobName(String);

impl BlobName {
    /// Generate a fresh stored name for an upload.
    ///
    /// The base is a UUIDv7 (collision-resistant, roughly time-ordered); the
    /// extension of the original filename is kept when it looks sane so that
    /// content types can still be guessed from the stored name.
    pub fn generate(original_name: &str) -> Self {
        let base = Uuid::now_v7();
        match extension_of(original_name) {
            Some(ext) => Self(format!("{base}.{ext}")),
            None => Self(base.to_string()),
        }
    }

    /// Validate an externally supplied stored filename.
    ///
    /// Accepts only a flat component: no separators, no `..`, no null bytes
    /// or control characters, no leading dot. Everything a download request
    /// names goes through here before it is joined to the storage directory.
    pub fn parse(s: &str) -> Result<Self, StorageError> {
        if s.is_empty() {
            return Err(StorageError::InvalidName("name cannot be empty"));
        }

        if s.contains('\0') {
            return Err(StorageError::InvalidName("null bytes are not allowed"));
        }

        // Control characters would also allow HTTP header injection via
        // Content-Disposition.
        if s.chars().any(|c| c.is_ascii_control()) {
            return Err(StorageError::InvalidName(
                "control characters are not allowed",
            ));
        }

        if s.contains('/') || s.contains('\\') {
            return Err(StorageError::InvalidName(
                "path separators are not allowed",
            ));
        }

        if s == ".." {
            return Err(StorageError::InvalidName("'..' is not allowed"));
        }

        if s.starts_with('.') {
            return Err(StorageError::InvalidName(
                "hidden names (starting with '.') are not allowed",
            ));
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extract a lowercase alphanumeric extension from an original filename.
fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.len() > MAX_EXTENSION_LEN {
        return None;
    }

    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}
