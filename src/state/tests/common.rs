use std::collections::VecDeque;
use std::path::PathBuf;

use crate::config::{EditorConfig, FileFilter};
use crate::state::{Confirmation, Frontend, Session};

/// Frontend that answers from queues and records what it was asked to show.
#[derive(Debug, Default)]
pub(super) struct ScriptedFrontend {
	pub open_paths:    VecDeque<Option<PathBuf>>,
	pub save_paths:    VecDeque<Option<PathBuf>>,
	pub confirmations: VecDeque<Confirmation>,
	pub errors:        Vec<String>,
	pub infos:         Vec<String>,
	pub prompts:       usize,
}

impl ScriptedFrontend {
	pub(super) fn new() -> Self {
		Self::default()
	}

	pub(super) fn with_open(mut self, path: Option<PathBuf>) -> Self {
		self.open_paths.push_back(path);
		self
	}

	pub(super) fn with_save(mut self, path: Option<PathBuf>) -> Self {
		self.save_paths.push_back(path);
		self
	}

	pub(super) fn with_confirmation(mut self, answer: Confirmation) -> Self {
		self.confirmations.push_back(answer);
		self
	}
}

impl Frontend for ScriptedFrontend {
	fn pick_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
		self.open_paths.pop_front().expect("unexpected open dialog")
	}

	fn pick_save_path(&mut self, _filters: &[FileFilter], _default_extension: &str) -> Option<PathBuf> {
		self.save_paths.pop_front().expect("unexpected save dialog")
	}

	fn confirm_discard(&mut self) -> Confirmation {
		self.prompts += 1;
		self.confirmations.pop_front().expect("unexpected discard prompt")
	}

	fn show_error(&mut self, _title: &str, message: &str) {
		self.errors.push(message.to_string());
	}

	fn show_info(&mut self, _title: &str, message: &str) {
		self.infos.push(message.to_string());
	}
}

pub(super) fn test_session() -> Session {
	Session::new(EditorConfig::default())
}

pub(super) fn type_text(session: &mut Session, text: &str) {
	for ch in text.chars() {
		if ch == '\n' {
			session.buffer_mut().insert_newline();
		} else {
			session.buffer_mut().insert_char(ch);
		}
	}
}
