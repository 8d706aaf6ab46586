mod buffer;
mod frontend;
mod menu;
mod session;
mod view;

pub use buffer::TextBuffer;
pub use frontend::{Confirmation, Frontend};
pub use menu::{MenuItem, MenuState};
pub use session::{Outcome, Session, SessionError};
pub use view::ViewState;
pub(crate) use view::{display_width_of_char_prefix, visible_slice_by_display_width};

use crate::config::EditorConfig;

/// Everything the UI draws from: the document session plus view-only state.
#[derive(Debug)]
pub struct AppState {
	pub session: Session,
	pub menu:    MenuState,
	pub view:    ViewState,
}

impl AppState {
	pub fn new(config: EditorConfig) -> Self {
		Self { session: Session::new(config), menu: MenuState::default(), view: ViewState::default() }
	}

	pub fn title(&self) -> String {
		self.session.title()
	}

	/// File name for the status bar, with `[+]` while there are unsaved edits.
	pub fn file_label(&self) -> String {
		let name = self
			.session
			.path()
			.and_then(|path| path.file_name())
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| "untitled".to_string());
		if self.session.is_dirty() { format!("{} [+]", name) } else { name }
	}

	pub fn tab_width(&self) -> usize {
		self.session.config().tab_width
	}

	pub fn align_view_to_cursor(&mut self) {
		let tab_width = self.tab_width();
		self.view.align_to_cursor(self.session.buffer(), tab_width);
	}
}

impl Default for AppState {
	fn default() -> Self {
		Self::new(EditorConfig::default())
	}
}

#[cfg(test)]
mod tests;
