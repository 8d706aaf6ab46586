use std::path::PathBuf;

use crate::config::FileFilter;

/// Answer to "save before continuing?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
	Save,
	Discard,
	Cancel,
}

/// What the document session needs from whatever presents it.
///
/// Every call is modal: it returns only once the user has answered.
pub trait Frontend {
	fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

	/// `default_extension` has no leading dot and is applied by the picker when
	/// the chosen name has no extension of its own.
	fn pick_save_path(&mut self, filters: &[FileFilter], default_extension: &str) -> Option<PathBuf>;

	fn confirm_discard(&mut self) -> Confirmation;

	fn show_error(&mut self, title: &str, message: &str);

	fn show_info(&mut self, title: &str, message: &str);
}
