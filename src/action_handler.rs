use std::ops::ControlFlow;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::action::{AppAction, EditorAction, FileAction, LayoutAction, MenuAction, SystemAction};
use crate::file_io::FileStore;
use crate::state::{AppState, Frontend, MenuItem, Outcome, SessionError};

pub struct ActionHandler;

impl ActionHandler {
	pub fn apply(
		&mut self,
		state: &mut AppState,
		frontend: &mut impl Frontend,
		store: &impl FileStore,
		action: AppAction,
	) -> ControlFlow<()> {
		match action {
			AppAction::Editor(EditorAction::KeyPressed(key)) => {
				let mapped = if state.menu.open { menu_key_action(key) } else { editor_key_action(key) };
				if let Some(action) = mapped {
					return self.apply(state, frontend, store, action);
				}
			}
			AppAction::Editor(editor_action) => {
				apply_editor_action(state, editor_action);
				state.align_view_to_cursor();
			}
			AppAction::Layout(LayoutAction::ViewportResized { width, height }) => {
				debug!("viewport resized to {}x{}", width, height);
			}
			AppAction::Menu(MenuAction::Toggle) => {
				if state.menu.open {
					state.menu.close();
				} else {
					state.menu.open();
				}
			}
			AppAction::Menu(MenuAction::Close) => state.menu.close(),
			AppAction::Menu(MenuAction::SelectNext) => state.menu.select_next(),
			AppAction::Menu(MenuAction::SelectPrev) => state.menu.select_prev(),
			AppAction::Menu(MenuAction::Activate) => {
				let item = state.menu.selected_item();
				state.menu.close();
				let action = match item {
					MenuItem::New => AppAction::File(FileAction::New),
					MenuItem::Open => AppAction::File(FileAction::Open),
					MenuItem::Save => AppAction::File(FileAction::Save),
					MenuItem::SaveAs => AppAction::File(FileAction::SaveAs),
					MenuItem::Exit => AppAction::System(SystemAction::Quit),
					MenuItem::Separator => return ControlFlow::Continue(()),
				};
				return self.apply(state, frontend, store, action);
			}
			AppAction::File(file_action) => {
				state.menu.close();
				let result = match file_action {
					FileAction::New => state.session.new_document(frontend, store),
					FileAction::Open => state.session.open(frontend, store),
					FileAction::Save => state.session.save(frontend, store),
					FileAction::SaveAs => state.session.save_as(frontend, store),
				};
				log_file_result(file_action, &result);
				if matches!(file_action, FileAction::New | FileAction::Open) && matches!(result, Ok(Outcome::Completed)) {
					state.view.reset();
				}
				state.align_view_to_cursor();
			}
			AppAction::System(SystemAction::Quit) => {
				if state.session.is_dirty() {
					warn!("quitting with unsaved changes");
				}
				info!("quit");
				return ControlFlow::Break(());
			}
		}
		ControlFlow::Continue(())
	}
}

fn apply_editor_action(state: &mut AppState, action: EditorAction) {
	let buffer = state.session.buffer_mut();
	match action {
		EditorAction::KeyPressed(_) => {}
		EditorAction::InsertChar(ch) => buffer.insert_char(ch),
		EditorAction::InsertNewline => buffer.insert_newline(),
		EditorAction::Backspace => buffer.backspace(),
		EditorAction::DeleteForward => buffer.delete_forward(),
		EditorAction::MoveLeft => buffer.move_left(),
		EditorAction::MoveRight => buffer.move_right(),
		EditorAction::MoveUp => buffer.move_up(),
		EditorAction::MoveDown => buffer.move_down(),
		EditorAction::MoveLineStart => buffer.move_line_start(),
		EditorAction::MoveLineEnd => buffer.move_line_end(),
		EditorAction::MoveFileStart => buffer.move_doc_start(),
		EditorAction::MoveFileEnd => buffer.move_doc_end(),
		EditorAction::Undo if !buffer.can_undo() => debug!("nothing to undo"),
		EditorAction::Undo => {
			buffer.undo();
		}
		EditorAction::Redo if !buffer.can_redo() => debug!("nothing to redo"),
		EditorAction::Redo => {
			buffer.redo();
		}
	}
}

fn log_file_result(action: FileAction, result: &Result<Outcome, SessionError>) {
	match result {
		Ok(Outcome::Completed) => debug!("{:?} completed", action),
		Ok(Outcome::Cancelled) => debug!("{:?} cancelled by user", action),
		Err(err) => warn!("{:?} failed for {}: {}", action, err.path().display(), err),
	}
}

/// Keys while the text area has focus.
pub(crate) fn editor_key_action(key: KeyEvent) -> Option<AppAction> {
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
	let alt = key.modifiers.contains(KeyModifiers::ALT);
	let super_key = key.modifiers.contains(KeyModifiers::SUPER);

	// Ctrl+Alt is AltGr on some layouts and produces a plain character.
	if let KeyCode::Char(ch) = key.code
		&& (ctrl || alt || super_key)
		&& !(ctrl && alt)
	{
		return match (ch.to_ascii_lowercase(), ctrl, alt, super_key) {
			('n', true, false, _) | ('n', false, false, true) => Some(AppAction::File(FileAction::New)),
			('o', true, false, _) => Some(AppAction::File(FileAction::Open)),
			('s', true, false, _) => Some(AppAction::File(FileAction::Save)),
			('z', true, false, _) => Some(AppAction::Editor(EditorAction::Undo)),
			('y', true, false, _) => Some(AppAction::Editor(EditorAction::Redo)),
			('f', false, true, _) => Some(AppAction::Menu(MenuAction::Toggle)),
			_ => None,
		};
	}

	let action = match key.code {
		KeyCode::F(10) => return Some(AppAction::Menu(MenuAction::Toggle)),
		KeyCode::Char(ch) => EditorAction::InsertChar(ch),
		KeyCode::Tab => EditorAction::InsertChar('\t'),
		KeyCode::Enter => EditorAction::InsertNewline,
		KeyCode::Backspace => EditorAction::Backspace,
		KeyCode::Delete => EditorAction::DeleteForward,
		KeyCode::Left => EditorAction::MoveLeft,
		KeyCode::Right => EditorAction::MoveRight,
		KeyCode::Up => EditorAction::MoveUp,
		KeyCode::Down => EditorAction::MoveDown,
		KeyCode::Home if ctrl => EditorAction::MoveFileStart,
		KeyCode::End if ctrl => EditorAction::MoveFileEnd,
		KeyCode::Home => EditorAction::MoveLineStart,
		KeyCode::End => EditorAction::MoveLineEnd,
		_ => return None,
	};
	Some(AppAction::Editor(action))
}

/// Keys while the File menu is dropped down.
pub(crate) fn menu_key_action(key: KeyEvent) -> Option<AppAction> {
	let action = match key.code {
		KeyCode::Esc | KeyCode::F(10) => MenuAction::Close,
		KeyCode::Char('f' | 'F') if key.modifiers.contains(KeyModifiers::ALT) => MenuAction::Close,
		KeyCode::Up => MenuAction::SelectPrev,
		KeyCode::Down => MenuAction::SelectNext,
		KeyCode::Enter => MenuAction::Activate,
		_ => return None,
	};
	Some(AppAction::Menu(action))
}
