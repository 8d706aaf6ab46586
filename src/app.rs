use std::path::PathBuf;
use std::thread;

use crossterm::event;
use thiserror::Error;
use tracing::{error, info, trace};

use crate::action::AppAction;
use crate::action_handler::ActionHandler;
use crate::config::EditorConfig;
use crate::file_io::LocalFileStore;
use crate::input::InputHandler;
use crate::state::AppState;
use crate::ui::{Renderer, TerminalFrontend, TerminalSession, TerminalSessionError};

#[derive(Debug, Error)]
pub enum AppError {
	#[error("terminal session failed")]
	Terminal(#[from] TerminalSessionError),
	#[error("event bus disconnected")]
	EventBusDisconnected,
}

pub struct App {
	state:          AppState,
	renderer:       Renderer,
	action_handler: ActionHandler,
	store:          LocalFileStore,
	event_tx:       flume::Sender<AppAction>,
	event_rx:       flume::Receiver<AppAction>,
}

impl App {
	pub fn new(config: EditorConfig) -> Self {
		let (event_tx, event_rx) = flume::bounded(1024);
		Self {
			state: AppState::new(config),
			renderer: Renderer::new(),
			action_handler: ActionHandler,
			store: LocalFileStore,
			event_tx,
			event_rx,
		}
	}

	pub fn run(mut self) -> Result<(), AppError> {
		let mut shown_title = self.state.title();
		let mut terminal = TerminalSession::enter(&shown_title)?;
		self.start_input_pump();
		info!("editor started");

		loop {
			let backdrop = terminal.draw(|frame| self.renderer.render(frame, &mut self.state))?;
			trace!("redraw");

			let action = self.event_rx.recv().map_err(|err| {
				error!("event bus disconnected while waiting for next action: {}", err);
				AppError::EventBusDisconnected
			})?;
			if matches!(action, AppAction::Layout(_)) {
				self.renderer.mark_layout_dirty();
			}

			let start_dir = self.dialog_start_dir();
			let mut frontend = TerminalFrontend::new(&mut terminal, &self.event_rx, backdrop, start_dir);
			let flow = self.action_handler.apply(&mut self.state, &mut frontend, &self.store, action);

			let title = self.state.title();
			if title != shown_title {
				terminal.set_title(&title)?;
				shown_title = title;
			}
			if flow.is_break() {
				break;
			}
		}

		Ok(())
	}

	/// File dialogs start next to the current document, else in the working directory.
	fn dialog_start_dir(&self) -> PathBuf {
		self
			.state
			.session
			.path()
			.and_then(|path| path.parent())
			.filter(|parent| !parent.as_os_str().is_empty())
			.map(|parent| parent.to_path_buf())
			.or_else(|| std::env::current_dir().ok())
			.unwrap_or_else(|| PathBuf::from("."))
	}

	fn start_input_pump(&self) {
		let event_tx = self.event_tx.clone();
		let input_handler = InputHandler::new();
		thread::spawn(move || {
			loop {
				let evt = match event::read() {
					Ok(evt) => evt,
					Err(err) => {
						error!("input pump stopped: failed to read terminal event: {}", err);
						break;
					}
				};
				let Some(action) = input_handler.action(&evt) else {
					continue;
				};
				if let Err(err) = event_tx.send(action) {
					error!("input pump stopped: failed to send action to event bus: {}", err);
					break;
				}
			}
		});
	}
}
