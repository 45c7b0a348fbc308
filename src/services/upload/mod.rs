use std::path::PathBuf;

use uuid::Uuid;

use crate::{
    config::UploadConfig,
    error::{AppError, Result},
};

#[derive(Debug, Clone)]
pub struct StoredFile {
    pub file_name: String,
    pub file_size: i64,
    pub path: PathBuf,
}

pub fn ensure_allowed_type(config: &UploadConfig, content_type: &str) -> Result<()> {
    if config
        .allowed_mime_types
        .iter()
        .any(|allowed| allowed == content_type)
    {
        Ok(())
    } else {
        Err(AppError::UnsupportedFileType(content_type.to_string()))
    }
}

pub fn ensure_within_limit(config: &UploadConfig, size: usize) -> Result<()> {
    if size > config.max_file_size {
        return Err(AppError::FileTooLarge {
            max_bytes: config.max_file_size,
        });
    }
    Ok(())
}

/// Writes the upload under a generated name. The client's file name is never
/// used on disk.
pub async fn store_file(config: &UploadConfig, contents: &[u8]) -> Result<StoredFile> {
    ensure_within_limit(config, contents.len())?;

    tokio::fs::create_dir_all(&config.dir).await?;

    let file_name = Uuid::new_v4().simple().to_string();
    let path = config.dir.join(&file_name);
    tokio::fs::write(&path, contents).await?;

    tracing::debug!(file_name = %file_name, size = contents.len(), "Stored upload");

    Ok(StoredFile {
        file_name,
        file_size: contents.len() as i64,
        path,
    })
}
