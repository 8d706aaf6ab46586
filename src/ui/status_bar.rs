use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::state::AppState;

pub(super) struct StatusBarWidget {
	file_label:  String,
	status_text: String,
}

impl StatusBarWidget {
	pub(super) fn from_state(state: &AppState) -> Self {
		Self { file_label: state.file_label(), status_text: state.session.status_text() }
	}

	fn spans(self) -> Vec<Span<'static>> {
		vec![
			Span::styled(
				format!(" {} ", self.file_label),
				Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
			),
			Span::raw(" "),
			Span::raw(self.status_text),
		]
	}
}

impl Widget for StatusBarWidget {
	fn render(self, area: Rect, buf: &mut Buffer) {
		Paragraph::new(Line::from(self.spans())).render(area, buf);
	}
}
