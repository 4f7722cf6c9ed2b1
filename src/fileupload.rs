use actix_multipart::Multipart;
use futures_util::stream::StreamExt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::UploadError;

/// Name of the multipart field carrying the preset.
pub const FILE_FIELD: &str = "file";

/// A preset written to the storage directory.
#[derive(Debug)]
pub struct StoredUpload {
    /// Client-supplied name, for logging only.
    pub filename: String,
    pub path: PathBuf,
    pub size: usize,
}

impl StoredUpload {
    pub fn remove(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            log::warn!("Could not remove stored upload '{}': {}", self.path.display(), e);
        }
    }
}

/// Streams the `file` field of `multipart` into `storage_dir`, rejecting
/// anything larger than `max_size` bytes. Other fields are drained and
/// ignored.
pub async fn store_upload(
    mut multipart: Multipart,
    storage_dir: &Path,
    max_size: usize,
) -> Result<StoredUpload, UploadError> {
    let mut stored: Option<StoredUpload> = None;

    while let Some(item) = multipart.next().await {
        let mut field = item.map_err(|e| UploadError::Multipart(e.to_string()))?;

        let filename = field
            .content_disposition()
            .filter(|cd| cd.get_name() == Some(FILE_FIELD))
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let Some(filename) = filename.filter(|_| stored.is_none()) else {
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| UploadError::Multipart(e.to_string()))?;
            }
            continue;
        };

        std::fs::create_dir_all(storage_dir)?;
        // The client's file name never touches the file system.
        let path = storage_dir.join(format!("{}.html", uuid::Uuid::new_v4()));
        let mut file = File::create(&path)?;
        let mut size = 0usize;

        while let Some(chunk) = field.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    discard(&path);
                    return Err(UploadError::Multipart(e.to_string()));
                }
            };
            size += chunk.len();
            if size > max_size {
                discard(&path);
                return Err(UploadError::TooLarge { limit: max_size });
            }
            if let Err(e) = file.write_all(&chunk) {
                discard(&path);
                return Err(UploadError::Storage(e));
            }
        }

        log::debug!("Stored upload '{}' ({} bytes) at {}", filename, size, path.display());
        stored = Some(StoredUpload { filename, path, size });
    }

    stored.ok_or(UploadError::MissingFile)
}

fn discard(path: &Path) {
    let _ = std::fs::remove_file(path);
}
