use unicode_width::UnicodeWidthChar;

use super::buffer::TextBuffer;

/// Scroll offsets and size of the text area, in lines and display columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
	pub scroll_x: usize,
	pub scroll_y: usize,
	pub width:    u16,
	pub height:   u16,
}

impl ViewState {
	pub fn resize(&mut self, width: u16, height: u16) {
		self.width = width;
		self.height = height;
	}

	/// Scrolls just enough to keep the cursor inside the visible area.
	pub fn align_to_cursor(&mut self, buffer: &TextBuffer, tab_width: usize) {
		let (line, col) = buffer.line_col();
		let rows = usize::from(self.height.max(1));
		if line < self.scroll_y {
			self.scroll_y = line;
		} else if line >= self.scroll_y + rows {
			self.scroll_y = line + 1 - rows;
		}

		let line_text = buffer.line_text(line).unwrap_or_default();
		let cursor_x = display_width_of_char_prefix(&line_text, col, tab_width);
		let cols = usize::from(self.width.max(1));
		if cursor_x < self.scroll_x {
			self.scroll_x = cursor_x;
		} else if cursor_x >= self.scroll_x + cols {
			self.scroll_x = cursor_x + 1 - cols;
		}
	}

	pub fn reset(&mut self) {
		self.scroll_x = 0;
		self.scroll_y = 0;
	}
}

pub(crate) fn char_display_width(ch: char, tab_width: usize) -> usize {
	if ch == '\t' { tab_width } else { UnicodeWidthChar::width(ch).unwrap_or(0) }
}

pub(crate) fn display_width_of_char_prefix(line: &str, char_count: usize, tab_width: usize) -> usize {
	line.chars().take(char_count).map(|ch| char_display_width(ch, tab_width)).sum()
}

/// The part of `line` visible after skipping `skip_cols` display columns, at
/// most `max_cols` wide. Tabs are expanded to spaces.
pub(crate) fn visible_slice_by_display_width(
	line: &str,
	skip_cols: usize,
	max_cols: usize,
	tab_width: usize,
) -> String {
	let mut out = String::new();
	if max_cols == 0 {
		return out;
	}

	let mut col = 0usize;
	let mut used = 0usize;
	for ch in line.chars() {
		let width = char_display_width(ch, tab_width);
		let start = col;
		col += width;
		if width == 0 {
			if start >= skip_cols && !out.is_empty() {
				out.push(ch);
			}
			continue;
		}
		if col <= skip_cols {
			continue;
		}
		// Partially scrolled-off wide chars are padded.
		let visible = if start < skip_cols { col - skip_cols } else { width };
		if used + visible > max_cols {
			break;
		}
		if ch == '\t' || start < skip_cols {
			out.extend(std::iter::repeat_n(' ', visible));
		} else {
			out.push(ch);
		}
		used += visible;
	}
	out
}
