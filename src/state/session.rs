use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::buffer::TextBuffer;
use super::frontend::{Confirmation, Frontend};
use crate::config::EditorConfig;
use crate::file_io::{FileIoError, FileStore};

#[derive(Debug, Error)]
pub enum SessionError {
	#[error("Failed to open file: {source}")]
	Open {
		path:   PathBuf,
		#[source]
		source: FileIoError,
	},
	#[error("Failed to save file: {source}")]
	Save {
		path:   PathBuf,
		#[source]
		source: FileIoError,
	},
}

impl SessionError {
	pub fn path(&self) -> &Path {
		match self {
			Self::Open { path, .. } | Self::Save { path, .. } => path,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Completed,
	Cancelled,
}

/// The one open document: its text and the file it belongs to, if any.
#[derive(Debug)]
pub struct Session {
	config: EditorConfig,
	path:   Option<PathBuf>,
	buffer: TextBuffer,
}

impl Session {
	pub fn new(config: EditorConfig) -> Self {
		let buffer = TextBuffer::new(config.undo_limit);
		Self { config, path: None, buffer }
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	pub fn buffer(&self) -> &TextBuffer {
		&self.buffer
	}

	pub fn buffer_mut(&mut self) -> &mut TextBuffer {
		&mut self.buffer
	}

	pub fn is_dirty(&self) -> bool {
		self.buffer.is_modified()
	}

	pub fn title(&self) -> String {
		match &self.path {
			Some(path) => format!("{} - {}", self.config.app_title, path.display()),
			None => self.config.app_title.clone(),
		}
	}

	pub fn status_text(&self) -> String {
		let (line, col) = self.buffer.line_col();
		format!("Ln {}, Col {}", line + 1, col)
	}

	pub fn new_document(
		&mut self,
		frontend: &mut impl Frontend,
		store: &impl FileStore,
	) -> Result<Outcome, SessionError> {
		if self.confirm_discard(frontend, store)? == Outcome::Cancelled {
			return Ok(Outcome::Cancelled);
		}
		self.buffer.replace("");
		self.path = None;
		info!("new document");
		Ok(Outcome::Completed)
	}

	pub fn open(&mut self, frontend: &mut impl Frontend, store: &impl FileStore) -> Result<Outcome, SessionError> {
		if self.confirm_discard(frontend, store)? == Outcome::Cancelled {
			return Ok(Outcome::Cancelled);
		}
		let Some(path) = frontend.pick_open_path(&self.config.filters) else {
			return Ok(Outcome::Cancelled);
		};
		self.load(frontend, store, path)
	}

	/// Replaces the document with the file at `path`, without asking for it.
	/// The discard protocol is the caller's business.
	pub fn load(
		&mut self,
		frontend: &mut impl Frontend,
		store: &impl FileStore,
		path: PathBuf,
	) -> Result<Outcome, SessionError> {
		let text = match store.read_text(&path) {
			Ok(text) => text,
			Err(source) => {
				let err = SessionError::Open { path, source };
				warn!("open failed: {}", err);
				frontend.show_error("Error", &err.to_string());
				return Err(err);
			}
		};
		self.buffer.replace(&text);
		info!("opened {} ({} chars)", path.display(), self.buffer.len_chars());
		self.path = Some(path);
		Ok(Outcome::Completed)
	}

	pub fn save(&mut self, frontend: &mut impl Frontend, store: &impl FileStore) -> Result<Outcome, SessionError> {
		let Some(path) = self.path.clone() else {
			return self.save_as(frontend, store);
		};
		self.write_to(frontend, store, path)
	}

	pub fn save_as(&mut self, frontend: &mut impl Frontend, store: &impl FileStore) -> Result<Outcome, SessionError> {
		let Some(path) = frontend.pick_save_path(&self.config.filters, &self.config.default_extension) else {
			return Ok(Outcome::Cancelled);
		};
		self.write_to(frontend, store, path)
	}

	/// Gate for anything that would throw the current text away.
	///
	/// Proceeds when the document is clean, when the user declines to save, or
	/// when the save they asked for went through. A save that was cancelled or
	/// failed stops the caller.
	pub fn confirm_discard(
		&mut self,
		frontend: &mut impl Frontend,
		store: &impl FileStore,
	) -> Result<Outcome, SessionError> {
		if !self.is_dirty() {
			return Ok(Outcome::Completed);
		}
		match frontend.confirm_discard() {
			Confirmation::Cancel => Ok(Outcome::Cancelled),
			Confirmation::Discard => {
				info!("discarding unsaved changes");
				Ok(Outcome::Completed)
			}
			Confirmation::Save => self.save(frontend, store),
		}
	}

	fn write_to(
		&mut self,
		frontend: &mut impl Frontend,
		store: &impl FileStore,
		path: PathBuf,
	) -> Result<Outcome, SessionError> {
		if let Err(source) = store.write_text(&path, &self.buffer.text()) {
			let err = SessionError::Save { path, source };
			warn!("save failed: {}", err);
			frontend.show_error("Error", &err.to_string());
			return Err(err);
		}
		info!("saved {}", path.display());
		self.path = Some(path);
		self.buffer.mark_clean();
		frontend.show_info("Saved", "File saved successfully");
		Ok(Outcome::Completed)
	}
}
