use std::{io, path::{Path, PathBuf}};

use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum FileIoError {
	#[error("read file failed: {}: {source}", path.display())]
	Read {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("decode utf-8 failed: {}: {source}", path.display())]
	Decode {
		path:   PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},
	#[error("write file failed: {}: {source}", path.display())]
	Write {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Whole-file UTF-8 text access.
pub trait FileStore {
	fn read_text(&self, path: &Path) -> Result<String, FileIoError>;
	fn write_text(&self, path: &Path, text: &str) -> Result<(), FileIoError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
	fn read_text(&self, path: &Path) -> Result<String, FileIoError> {
		let file_bytes = std::fs::read(path).map_err(|source| {
			error!("read_text failed: {}: {}", path.display(), source);
			FileIoError::Read { path: path.to_path_buf(), source }
		})?;
		debug!("read {} bytes from {}", file_bytes.len(), path.display());
		String::from_utf8(file_bytes).map_err(|source| {
			error!("read_text failed: {} is not valid utf-8", path.display());
			FileIoError::Decode { path: path.to_path_buf(), source }
		})
	}

	fn write_text(&self, path: &Path, text: &str) -> Result<(), FileIoError> {
		std::fs::write(path, text.as_bytes()).map_err(|source| {
			error!("write_text failed: {}: {}", path.display(), source);
			FileIoError::Write { path: path.to_path_buf(), source }
		})?;
		debug!("wrote {} bytes to {}", text.len(), path.display());
		Ok(())
	}
}
