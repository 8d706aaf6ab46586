use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::state::Confirmation;

/// A dialog that owns the keyboard until it produces a result.
pub(crate) trait ModalDialog {
	type Output;

	fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Output>;

	fn render(&self, frame: &mut Frame<'_>);

	/// Result to use when the dialog cannot continue, e.g. the event bus closed.
	fn abandon(self) -> Self::Output;
}

pub(crate) fn popup_area(screen: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(screen.width);
	let height = height.min(screen.height);
	Rect::new(
		screen.x + (screen.width - width) / 2,
		screen.y + (screen.height - height) / 2,
		width,
		height,
	)
}

pub(crate) struct ConfirmDialog;

impl ModalDialog for ConfirmDialog {
	type Output = Confirmation;

	fn handle_key(&mut self, key: KeyEvent) -> Option<Confirmation> {
		match key.code {
			KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Confirmation::Save),
			KeyCode::Char('n' | 'N') => Some(Confirmation::Discard),
			KeyCode::Char('c' | 'C') | KeyCode::Esc => Some(Confirmation::Cancel),
			_ => None,
		}
	}

	fn render(&self, frame: &mut Frame<'_>) {
		let area = popup_area(frame.area(), 56, 6);
		frame.render_widget(Clear, area);
		let lines = vec![
			Line::from("You have unsaved changes. Save before continuing?"),
			Line::from(""),
			Line::styled("[Y]es   [N]o   [C]ancel", Style::default().add_modifier(Modifier::BOLD)),
		];
		frame.render_widget(
			Paragraph::new(lines)
				.wrap(Wrap { trim: true })
				.block(Block::default().borders(Borders::ALL).title(" Unsaved changes ")),
			area,
		);
	}

	fn abandon(self) -> Confirmation {
		Confirmation::Cancel
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MessageKind {
	Error,
	Info,
}

pub(crate) struct MessageBox {
	kind:    MessageKind,
	title:   String,
	message: String,
}

impl MessageBox {
	pub(crate) fn new(kind: MessageKind, title: &str, message: &str) -> Self {
		Self { kind, title: title.to_string(), message: message.to_string() }
	}
}

impl ModalDialog for MessageBox {
	type Output = ();

	fn handle_key(&mut self, key: KeyEvent) -> Option<()> {
		match key.code {
			KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(()),
			_ => None,
		}
	}

	fn render(&self, frame: &mut Frame<'_>) {
		let screen = frame.area();
		let width = (self.message.chars().count() as u16 + 4).clamp(24, screen.width.saturating_sub(4).max(24));
		let text_rows = (self.message.chars().count() as u16).div_ceil(width.saturating_sub(2).max(1));
		let area = popup_area(screen, width, text_rows + 4);
		let border = match self.kind {
			MessageKind::Error => Color::Red,
			MessageKind::Info => Color::Blue,
		};
		frame.render_widget(Clear, area);
		frame.render_widget(
			Paragraph::new(vec![
				Line::from(self.message.as_str()),
				Line::from(""),
				Line::styled("[OK]", Style::default().add_modifier(Modifier::BOLD)),
			])
			.wrap(Wrap { trim: false })
			.block(
				Block::default()
					.borders(Borders::ALL)
					.border_style(Style::default().fg(border))
					.title(format!(" {} ", self.title)),
			),
			area,
		);
	}

	fn abandon(self) {}
}
