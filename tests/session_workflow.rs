use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use pynote::config::{EditorConfig, FileFilter};
use pynote::file_io::{FileIoError, FileStore, LocalFileStore};
use pynote::state::{Confirmation, Frontend, Outcome, Session};

/// In-memory store with a set of paths that refuse writes.
#[derive(Default)]
struct MemoryStore {
	files:    RefCell<HashMap<PathBuf, String>>,
	readonly: Vec<PathBuf>,
}

impl FileStore for MemoryStore {
	fn read_text(&self, path: &Path) -> Result<String, FileIoError> {
		self.files.borrow().get(path).cloned().ok_or_else(|| FileIoError::Read {
			path:   path.to_path_buf(),
			source: io::Error::from(io::ErrorKind::NotFound),
		})
	}

	fn write_text(&self, path: &Path, text: &str) -> Result<(), FileIoError> {
		if self.readonly.iter().any(|p| p == path) {
			return Err(FileIoError::Write {
				path:   path.to_path_buf(),
				source: io::Error::from(io::ErrorKind::PermissionDenied),
			});
		}
		self.files.borrow_mut().insert(path.to_path_buf(), text.to_string());
		Ok(())
	}
}

struct FixedFrontend {
	path:   Option<PathBuf>,
	answer: Confirmation,
	errors: Vec<String>,
}

impl FixedFrontend {
	fn new(path: Option<&str>, answer: Confirmation) -> Self {
		Self { path: path.map(PathBuf::from), answer, errors: Vec::new() }
	}
}

impl Frontend for FixedFrontend {
	fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
		assert_eq!(filters.len(), 2);
		self.path.clone()
	}

	fn pick_save_path(&mut self, _filters: &[FileFilter], default_extension: &str) -> Option<PathBuf> {
		assert_eq!(default_extension, "txt");
		self.path.clone()
	}

	fn confirm_discard(&mut self) -> Confirmation {
		self.answer
	}

	fn show_error(&mut self, _title: &str, message: &str) {
		self.errors.push(message.to_string());
	}

	fn show_info(&mut self, _title: &str, _message: &str) {}
}

fn type_text(session: &mut Session, text: &str) {
	for ch in text.chars() {
		session.buffer_mut().insert_char(ch);
	}
}

#[test]
fn hello_world_through_save_as_and_save() {
	let store = MemoryStore::default();
	let mut session = Session::new(EditorConfig::default());
	let mut frontend = FixedFrontend::new(Some("/tmp/a.txt"), Confirmation::Cancel);

	type_text(&mut session, "hello");
	assert_eq!(session.save_as(&mut frontend, &store).expect("save as"), Outcome::Completed);
	assert_eq!(store.read_text(Path::new("/tmp/a.txt")).expect("stored"), "hello");
	assert_eq!(session.title(), "PyNote - /tmp/a.txt");
	assert!(!session.is_dirty());

	type_text(&mut session, " world");
	assert!(session.is_dirty());
	session.save(&mut frontend, &store).expect("save");
	assert_eq!(store.read_text(Path::new("/tmp/a.txt")).expect("stored"), "hello world");
	assert!(!session.is_dirty());
}

#[test]
fn readonly_target_keeps_document_dirty() {
	let store = MemoryStore { readonly: vec![PathBuf::from("/ro/file.txt")], ..MemoryStore::default() };
	let mut session = Session::new(EditorConfig::default());
	let mut frontend = FixedFrontend::new(Some("/ro/file.txt"), Confirmation::Cancel);
	type_text(&mut session, "data");

	assert!(session.save(&mut frontend, &store).is_err());
	assert!(session.is_dirty());
	assert_eq!(session.path(), None);
	assert_eq!(frontend.errors.len(), 1);
	assert!(frontend.errors[0].contains("/ro/file.txt"));
}

#[test]
fn discard_answer_lets_open_replace_document() {
	let store = MemoryStore::default();
	store.write_text(Path::new("/docs/b.md"), "# heading\nbody").expect("seed");
	let mut session = Session::new(EditorConfig::default());
	type_text(&mut session, "scratch");
	let mut frontend = FixedFrontend::new(Some("/docs/b.md"), Confirmation::Discard);

	assert_eq!(session.open(&mut frontend, &store).expect("open"), Outcome::Completed);
	assert_eq!(session.buffer().text(), "# heading\nbody");
	assert_eq!(session.path(), Some(Path::new("/docs/b.md")));
	assert!(!session.is_dirty());
	assert_eq!(session.status_text(), "Ln 1, Col 0");
}

#[test]
fn local_store_round_trip_through_session() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("round.txt");
	let path_str = path.to_str().expect("utf-8 temp path");
	let mut session = Session::new(EditorConfig::default());
	session.buffer_mut().insert_str("line one\nzwei – drei\n");
	let mut frontend = FixedFrontend::new(Some(path_str), Confirmation::Discard);

	session.save_as(&mut frontend, &LocalFileStore).expect("save as");
	session.new_document(&mut frontend, &LocalFileStore).expect("new");
	assert!(session.buffer().is_empty());

	session.open(&mut frontend, &LocalFileStore).expect("open");
	assert_eq!(session.buffer().text(), "line one\nzwei – drei\n");
}
