use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Widget};

use crate::state::{AppState, display_width_of_char_prefix, visible_slice_by_display_width};

pub(super) struct TextAreaWidget {
	lines: Vec<String>,
}

impl TextAreaWidget {
	/// Builds the visible slice of the document and the screen position of the
	/// cursor, if it falls inside `area`.
	pub(super) fn from_state(state: &AppState, area: Rect) -> (Self, Option<(u16, u16)>) {
		let buffer = state.session.buffer();
		let view = state.view;
		let tab_width = state.tab_width();
		let width = usize::from(area.width);

		let last_line = buffer.line_count().min(view.scroll_y + usize::from(area.height));
		let lines = (view.scroll_y..last_line)
			.filter_map(|line_idx| buffer.line_text(line_idx))
			.map(|line| visible_slice_by_display_width(&line, view.scroll_x, width, tab_width))
			.collect::<Vec<_>>();

		let (line, col) = buffer.line_col();
		let line_text = buffer.line_text(line).unwrap_or_default();
		let cursor_x = display_width_of_char_prefix(&line_text, col, tab_width);
		let cursor_position = match (line.checked_sub(view.scroll_y), cursor_x.checked_sub(view.scroll_x)) {
			(Some(y), Some(x)) if y < usize::from(area.height) && x < width => {
				Some((area.x.saturating_add(x as u16), area.y.saturating_add(y as u16)))
			}
			_ => None,
		};

		(Self { lines }, cursor_position)
	}
}

impl Widget for TextAreaWidget {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let text = Text::from(self.lines.into_iter().map(Line::from).collect::<Vec<_>>());
		Paragraph::new(text).render(area, buf);
	}
}
