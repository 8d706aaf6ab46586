use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::state::AppState;

pub(super) struct TopBarWidget {
	title:     String,
	menu_open: bool,
}

impl TopBarWidget {
	pub(super) fn from_state(state: &AppState) -> Self {
		Self { title: state.title(), menu_open: state.menu.open }
	}
}

impl Widget for TopBarWidget {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let menu_style = if self.menu_open {
			Style::default().fg(Color::White).bg(Color::DarkGray).add_modifier(Modifier::BOLD)
		} else {
			Style::default().fg(Color::Gray)
		};
		Paragraph::new(Line::from(vec![
			Span::styled(" File ", menu_style),
			Span::raw("  "),
			Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
		]))
		.render(area, buf);
	}
}
