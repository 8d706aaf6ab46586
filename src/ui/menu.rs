use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::state::{MenuItem, MenuState};

const MENU_INNER_WIDTH: u16 = 20;

pub(super) struct FileMenuWidget {
	selected: MenuItem,
}

impl FileMenuWidget {
	pub(super) fn from_state(menu: &MenuState) -> Self {
		Self { selected: menu.selected_item() }
	}

	/// Drop-down rectangle anchored under the "File" label.
	pub(super) fn area(screen: Rect) -> Rect {
		let width = (MENU_INNER_WIDTH + 2).min(screen.width);
		let height = (MenuItem::FILE_MENU.len() as u16 + 2).min(screen.height.saturating_sub(1));
		Rect::new(screen.x, screen.y.saturating_add(1), width, height)
	}
}

impl Widget for FileMenuWidget {
	fn render(self, area: Rect, buf: &mut Buffer) {
		Clear.render(area, buf);
		let inner_width = usize::from(area.width.saturating_sub(2));
		let lines = MenuItem::FILE_MENU
			.iter()
			.map(|item| {
				if item.is_separator() {
					return Line::from("─".repeat(inner_width));
				}
				let accelerator = item.accelerator().unwrap_or("");
				let label = item.label();
				let gap = inner_width.saturating_sub(label.len() + accelerator.len() + 2);
				let text = format!(" {}{}{} ", label, " ".repeat(gap), accelerator);
				if *item == self.selected {
					Line::styled(text, Style::default().fg(Color::Black).bg(Color::Gray).add_modifier(Modifier::BOLD))
				} else {
					Line::from(text)
				}
			})
			.collect::<Vec<_>>();
		Paragraph::new(lines).block(Block::default().borders(Borders::ALL)).render(area, buf);
	}
}
