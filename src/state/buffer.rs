use ropey::Rope;

/// A single reversible change: `deleted` was replaced by `inserted` at `char_idx`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BufferEdit {
	char_idx: usize,
	deleted:  String,
	inserted: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
	id:            u64,
	edit:          BufferEdit,
	before_cursor: usize,
	after_cursor:  usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditKind {
	Insert,
	Backspace,
	Delete,
}

/// Owned text storage with an insertion cursor and a bounded undo/redo history.
///
/// The cursor is a char index in `0..=len_chars`. Modification state is tied to
/// history positions: the buffer is modified whenever the current history state
/// is not the one recorded by the last [`TextBuffer::mark_clean`].
#[derive(Debug, Clone)]
pub struct TextBuffer {
	text:            Rope,
	cursor:          usize,
	preferred_col:   Option<usize>,
	undo_stack:      Vec<HistoryEntry>,
	redo_stack:      Vec<HistoryEntry>,
	undo_limit:      usize,
	next_history_id: u64,
	base_state_id:   u64,
	clean_state_id:  Option<u64>,
	open_group:      Option<EditKind>,
}

impl TextBuffer {
	pub fn new(undo_limit: usize) -> Self {
		Self {
			text: Rope::new(),
			cursor: 0,
			preferred_col: None,
			undo_stack: Vec::new(),
			redo_stack: Vec::new(),
			undo_limit,
			next_history_id: 1,
			base_state_id: 0,
			clean_state_id: Some(0),
			open_group: None,
		}
	}

	pub fn text(&self) -> String {
		self.text.to_string()
	}

	pub fn is_empty(&self) -> bool {
		self.text.len_chars() == 0
	}

	pub fn len_chars(&self) -> usize {
		self.text.len_chars()
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn set_cursor(&mut self, char_idx: usize) {
		self.cursor = char_idx.min(self.text.len_chars());
		self.preferred_col = None;
		self.open_group = None;
	}

	/// Zero-based line and column (in chars) of the cursor.
	pub fn line_col(&self) -> (usize, usize) {
		let line = self.text.char_to_line(self.cursor);
		(line, self.cursor - self.text.line_to_char(line))
	}

	pub fn line_count(&self) -> usize {
		self.text.len_lines()
	}

	/// Line content without its line break.
	pub fn line_text(&self, line_idx: usize) -> Option<String> {
		if line_idx >= self.line_count() {
			return None;
		}
		let line = self.text.line(line_idx);
		Some(line.slice(..self.line_len(line_idx)).to_string())
	}

	pub fn line_len(&self, line_idx: usize) -> usize {
		let line = self.text.line(line_idx);
		let mut len = line.len_chars();
		if len > 0 && is_line_break(line.char(len - 1)) {
			len -= 1;
			if len > 0 && line.char(len) == '\n' && line.char(len - 1) == '\r' {
				len -= 1;
			}
		}
		len
	}

	pub fn is_modified(&self) -> bool {
		self.clean_state_id != Some(self.current_state_id())
	}

	pub fn mark_clean(&mut self) {
		self.clean_state_id = Some(self.current_state_id());
		self.open_group = None;
	}

	/// Swaps the whole content, forgetting history. The result is clean.
	pub fn replace(&mut self, text: &str) {
		self.text = Rope::from_str(text);
		self.cursor = 0;
		self.preferred_col = None;
		self.undo_stack.clear();
		self.redo_stack.clear();
		self.base_state_id = self.fresh_history_id();
		self.clean_state_id = Some(self.base_state_id);
		self.open_group = None;
	}

	pub fn can_undo(&self) -> bool {
		!self.undo_stack.is_empty()
	}

	pub fn can_redo(&self) -> bool {
		!self.redo_stack.is_empty()
	}

	pub fn insert_char(&mut self, ch: char) {
		let kind = if is_line_break(ch) { None } else { Some(EditKind::Insert) };
		self.insert_at_cursor(ch.to_string(), kind);
	}

	pub fn insert_newline(&mut self) {
		self.insert_char('\n');
	}

	pub fn insert_str(&mut self, text: &str) {
		if text.is_empty() {
			return;
		}
		self.insert_at_cursor(text.to_string(), None);
	}

	pub fn backspace(&mut self) {
		if self.cursor == 0 {
			return;
		}
		let end = self.cursor;
		let start = if end >= 2 && self.text.char(end - 2) == '\r' && self.text.char(end - 1) == '\n' {
			end - 2
		} else {
			end - 1
		};
		let deleted = self.text.slice(start..end).to_string();
		self.text.remove(start..end);
		self.cursor = start;
		self.preferred_col = None;
		self.record(BufferEdit { char_idx: start, deleted, inserted: String::new() }, end, Some(EditKind::Backspace));
	}

	pub fn delete_forward(&mut self) {
		let len = self.text.len_chars();
		if self.cursor >= len {
			return;
		}
		let start = self.cursor;
		let end = if start + 1 < len && self.text.char(start) == '\r' && self.text.char(start + 1) == '\n' {
			start + 2
		} else {
			start + 1
		};
		let deleted = self.text.slice(start..end).to_string();
		self.text.remove(start..end);
		self.preferred_col = None;
		self.record(BufferEdit { char_idx: start, deleted, inserted: String::new() }, start, Some(EditKind::Delete));
	}

	pub fn undo(&mut self) -> bool {
		let Some(entry) = self.undo_stack.pop() else {
			return false;
		};
		let edit = &entry.edit;
		let inserted_len = edit.inserted.chars().count();
		self.text.remove(edit.char_idx..edit.char_idx + inserted_len);
		self.text.insert(edit.char_idx, &edit.deleted);
		self.cursor = entry.before_cursor.min(self.text.len_chars());
		self.preferred_col = None;
		self.open_group = None;
		self.redo_stack.push(entry);
		true
	}

	pub fn redo(&mut self) -> bool {
		let Some(entry) = self.redo_stack.pop() else {
			return false;
		};
		let edit = &entry.edit;
		let deleted_len = edit.deleted.chars().count();
		self.text.remove(edit.char_idx..edit.char_idx + deleted_len);
		self.text.insert(edit.char_idx, &edit.inserted);
		self.cursor = entry.after_cursor.min(self.text.len_chars());
		self.preferred_col = None;
		self.open_group = None;
		self.undo_stack.push(entry);
		true
	}

	pub fn move_left(&mut self) {
		if self.cursor >= 2 && self.text.char(self.cursor - 2) == '\r' && self.text.char(self.cursor - 1) == '\n' {
			self.set_cursor(self.cursor - 2);
		} else {
			self.set_cursor(self.cursor.saturating_sub(1));
		}
	}

	pub fn move_right(&mut self) {
		let len = self.text.len_chars();
		if self.cursor + 1 < len && self.text.char(self.cursor) == '\r' && self.text.char(self.cursor + 1) == '\n'
		{
			self.set_cursor(self.cursor + 2);
		} else {
			self.set_cursor((self.cursor + 1).min(len));
		}
	}

	pub fn move_up(&mut self) {
		let (line, _) = self.line_col();
		if line == 0 {
			self.move_line_start();
			return;
		}
		self.move_to_line_keeping_col(line - 1);
	}

	pub fn move_down(&mut self) {
		let (line, _) = self.line_col();
		if line + 1 >= self.text.len_lines() {
			self.move_line_end();
			return;
		}
		self.move_to_line_keeping_col(line + 1);
	}

	pub fn move_line_start(&mut self) {
		let (line, _) = self.line_col();
		self.set_cursor(self.text.line_to_char(line));
	}

	pub fn move_line_end(&mut self) {
		let (line, _) = self.line_col();
		self.set_cursor(self.text.line_to_char(line) + self.line_len(line));
	}

	pub fn move_doc_start(&mut self) {
		self.set_cursor(0);
	}

	pub fn move_doc_end(&mut self) {
		self.set_cursor(self.text.len_chars());
	}

	#[cfg(test)]
	pub(crate) fn undo_depth(&self) -> usize {
		self.undo_stack.len()
	}

	fn move_to_line_keeping_col(&mut self, target_line: usize) {
		let col = match self.preferred_col {
			Some(col) => col,
			None => self.line_col().1,
		};
		let target = self.text.line_to_char(target_line) + col.min(self.line_len(target_line));
		self.cursor = target;
		self.preferred_col = Some(col);
		self.open_group = None;
	}

	fn insert_at_cursor(&mut self, inserted: String, kind: Option<EditKind>) {
		let before_cursor = self.cursor;
		self.text.insert(before_cursor, &inserted);
		self.cursor = before_cursor + inserted.chars().count();
		self.preferred_col = None;
		self.record(BufferEdit { char_idx: before_cursor, deleted: String::new(), inserted }, before_cursor, kind);
	}

	fn record(&mut self, edit: BufferEdit, before_cursor: usize, kind: Option<EditKind>) {
		self.redo_stack.clear();
		let after_cursor = self.cursor;

		if let Some(kind) = kind
			&& self.open_group == Some(kind)
			&& let Some(top) = self.undo_stack.last_mut()
			&& absorb(&mut top.edit, &edit, kind)
		{
			top.after_cursor = after_cursor;
			top.id = self.next_history_id;
			self.next_history_id += 1;
			return;
		}

		let id = self.fresh_history_id();
		self.undo_stack.push(HistoryEntry { id, edit, before_cursor, after_cursor });
		if self.undo_stack.len() > self.undo_limit {
			let evicted = self.undo_stack.remove(0);
			self.base_state_id = evicted.id;
		}
		self.open_group = kind;
	}

	fn current_state_id(&self) -> u64 {
		self.undo_stack.last().map(|entry| entry.id).unwrap_or(self.base_state_id)
	}

	fn fresh_history_id(&mut self) -> u64 {
		let id = self.next_history_id;
		self.next_history_id += 1;
		id
	}
}

impl Default for TextBuffer {
	fn default() -> Self {
		Self::new(256)
	}
}

/// Folds `next` into `top` when both belong to one contiguous run.
fn absorb(top: &mut BufferEdit, next: &BufferEdit, kind: EditKind) -> bool {
	match kind {
		EditKind::Insert => {
			if !top.deleted.is_empty() || top.char_idx + top.inserted.chars().count() != next.char_idx {
				return false;
			}
			top.inserted.push_str(&next.inserted);
			true
		}
		EditKind::Backspace => {
			if !top.inserted.is_empty() || next.char_idx + next.deleted.chars().count() != top.char_idx {
				return false;
			}
			top.deleted.insert_str(0, &next.deleted);
			top.char_idx = next.char_idx;
			true
		}
		EditKind::Delete => {
			if !top.inserted.is_empty() || top.char_idx != next.char_idx {
				return false;
			}
			top.deleted.push_str(&next.deleted);
			true
		}
	}
}

fn is_line_break(ch: char) -> bool {
	matches!(ch, '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}
