use std::path::{Path, PathBuf};

use ratatui::Frame;
use ratatui::buffer::Buffer;
use tracing::{debug, error};

use super::dialog::{ConfirmDialog, MessageBox, MessageKind, ModalDialog};
use super::file_dialog::{FileDialog, FileDialogKind};
use super::terminal_session::TerminalSession;
use crate::action::{AppAction, EditorAction};
use crate::config::FileFilter;
use crate::state::{Confirmation, Frontend};

/// Runs session prompts as modal dialogs drawn over the last editor frame.
pub(crate) struct TerminalFrontend<'a> {
	terminal:  &'a mut TerminalSession,
	events:    &'a flume::Receiver<AppAction>,
	backdrop:  Buffer,
	start_dir: PathBuf,
}

impl<'a> TerminalFrontend<'a> {
	pub(crate) fn new(
		terminal: &'a mut TerminalSession,
		events: &'a flume::Receiver<AppAction>,
		backdrop: Buffer,
		start_dir: PathBuf,
	) -> Self {
		Self { terminal, events, backdrop, start_dir }
	}

	fn run_modal<D: ModalDialog>(&mut self, mut dialog: D) -> D::Output {
		loop {
			let backdrop = &self.backdrop;
			if let Err(err) = self.terminal.draw(|frame| {
				paint_backdrop(frame, backdrop);
				dialog.render(frame);
			}) {
				error!("modal dialog draw failed: {:#}", err);
				return dialog.abandon();
			}

			match self.events.recv() {
				Ok(AppAction::Editor(EditorAction::KeyPressed(key))) => {
					if let Some(output) = dialog.handle_key(key) {
						return output;
					}
				}
				Ok(other) => debug!("modal dialog ignored action: {:?}", other),
				Err(err) => {
					error!("event bus disconnected while a dialog was open: {}", err);
					return dialog.abandon();
				}
			}
		}
	}

	fn start_dir(&self) -> &Path {
		&self.start_dir
	}
}

impl Frontend for TerminalFrontend<'_> {
	fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
		let dialog = FileDialog::new(FileDialogKind::Open, filters, "", self.start_dir());
		self.run_modal(dialog)
	}

	fn pick_save_path(&mut self, filters: &[FileFilter], default_extension: &str) -> Option<PathBuf> {
		let dialog = FileDialog::new(FileDialogKind::Save, filters, default_extension, self.start_dir());
		self.run_modal(dialog)
	}

	fn confirm_discard(&mut self) -> Confirmation {
		self.run_modal(ConfirmDialog)
	}

	fn show_error(&mut self, title: &str, message: &str) {
		self.run_modal(MessageBox::new(MessageKind::Error, title, message))
	}

	fn show_info(&mut self, title: &str, message: &str) {
		self.run_modal(MessageBox::new(MessageKind::Info, title, message))
	}
}

fn paint_backdrop(frame: &mut Frame<'_>, backdrop: &Buffer) {
	let area = frame.area().intersection(backdrop.area);
	let buf = frame.buffer_mut();
	for y in area.top()..area.bottom() {
		for x in area.left()..area.right() {
			if let (Some(target), Some(source)) = (buf.cell_mut((x, y)), backdrop.cell((x, y))) {
				*target = source.clone();
			}
		}
	}
}
