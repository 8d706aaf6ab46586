use crate::state::TextBuffer;

fn buffer_with(text: &str) -> TextBuffer {
	let mut buffer = TextBuffer::new(256);
	buffer.replace(text);
	buffer
}

#[test]
fn new_buffer_is_empty_and_clean() {
	let buffer = TextBuffer::new(8);
	assert!(buffer.is_empty());
	assert!(!buffer.is_modified());
	assert_eq!(buffer.line_col(), (0, 0));
	assert_eq!(buffer.line_count(), 1);
}

#[test]
fn typing_marks_modified_and_moves_cursor() {
	let mut buffer = TextBuffer::new(8);
	buffer.insert_char('h');
	buffer.insert_char('i');
	assert_eq!(buffer.text(), "hi");
	assert_eq!(buffer.cursor(), 2);
	assert!(buffer.is_modified());
}

#[test]
fn contiguous_typing_undoes_as_one_step() {
	let mut buffer = TextBuffer::new(8);
	for ch in "hello".chars() {
		buffer.insert_char(ch);
	}
	assert_eq!(buffer.undo_depth(), 1);

	assert!(buffer.undo());
	assert_eq!(buffer.text(), "");
	assert_eq!(buffer.cursor(), 0);
	assert!(!buffer.is_modified());

	assert!(buffer.redo());
	assert_eq!(buffer.text(), "hello");
	assert_eq!(buffer.cursor(), 5);
}

#[test]
fn newline_breaks_undo_group() {
	let mut buffer = TextBuffer::new(8);
	buffer.insert_char('a');
	buffer.insert_newline();
	buffer.insert_char('b');
	assert_eq!(buffer.undo_depth(), 3);

	buffer.undo();
	assert_eq!(buffer.text(), "a\n");
	buffer.undo();
	assert_eq!(buffer.text(), "a");
}

#[test]
fn cursor_motion_breaks_undo_group() {
	let mut buffer = TextBuffer::new(8);
	buffer.insert_char('a');
	buffer.insert_char('b');
	buffer.move_left();
	buffer.insert_char('x');
	assert_eq!(buffer.text(), "axb");
	assert_eq!(buffer.undo_depth(), 2);

	buffer.undo();
	assert_eq!(buffer.text(), "ab");
	assert_eq!(buffer.cursor(), 1);
}

#[test]
fn backspace_run_undoes_as_one_step() {
	let mut buffer = buffer_with("abcdef");
	buffer.move_doc_end();
	buffer.backspace();
	buffer.backspace();
	buffer.backspace();
	assert_eq!(buffer.text(), "abc");
	assert_eq!(buffer.undo_depth(), 1);

	buffer.undo();
	assert_eq!(buffer.text(), "abcdef");
	assert_eq!(buffer.cursor(), 6);
}

#[test]
fn backspace_joins_lines_and_removes_crlf_as_one() {
	let mut buffer = buffer_with("ab\r\ncd");
	buffer.set_cursor(4);
	assert_eq!(buffer.line_col(), (1, 0));
	buffer.backspace();
	assert_eq!(buffer.text(), "abcd");
	assert_eq!(buffer.line_col(), (0, 2));
}

#[test]
fn backspace_at_start_and_delete_at_end_are_noops() {
	let mut buffer = buffer_with("x");
	buffer.backspace();
	buffer.move_doc_end();
	buffer.delete_forward();
	assert_eq!(buffer.text(), "x");
	assert!(!buffer.can_undo());
	assert!(!buffer.is_modified());
}

#[test]
fn delete_forward_run_undoes_as_one_step() {
	let mut buffer = buffer_with("abcdef");
	buffer.set_cursor(1);
	buffer.delete_forward();
	buffer.delete_forward();
	assert_eq!(buffer.text(), "adef");
	assert_eq!(buffer.undo_depth(), 1);

	buffer.undo();
	assert_eq!(buffer.text(), "abcdef");
	assert_eq!(buffer.cursor(), 1);
}

#[test]
fn undo_back_to_saved_state_is_clean_again() {
	let mut buffer = buffer_with("base");
	buffer.move_doc_end();
	buffer.insert_char('!');
	buffer.mark_clean();
	buffer.insert_char('?');
	assert!(buffer.is_modified());

	buffer.undo();
	assert_eq!(buffer.text(), "base!");
	assert!(!buffer.is_modified());

	buffer.undo();
	assert_eq!(buffer.text(), "base");
	assert!(buffer.is_modified());
}

#[test]
fn typing_right_after_save_does_not_extend_saved_group() {
	let mut buffer = TextBuffer::new(8);
	buffer.insert_char('a');
	buffer.mark_clean();
	buffer.insert_char('b');
	assert!(buffer.is_modified());
	assert_eq!(buffer.undo_depth(), 2);
}

#[test]
fn new_edit_after_undo_drops_redo_branch() {
	let mut buffer = TextBuffer::new(8);
	buffer.insert_char('a');
	buffer.mark_clean();
	buffer.insert_newline();
	buffer.undo();
	buffer.undo();
	buffer.insert_char('z');
	assert!(!buffer.can_redo());
	assert!(!buffer.redo());
	assert!(buffer.is_modified());
}

#[test]
fn history_is_bounded_by_undo_limit() {
	let mut buffer = TextBuffer::new(2);
	buffer.insert_newline();
	buffer.insert_newline();
	buffer.insert_newline();
	assert_eq!(buffer.undo_depth(), 2);

	assert!(buffer.undo());
	assert!(buffer.undo());
	assert!(!buffer.undo());
	assert_eq!(buffer.text(), "\n");
	assert!(buffer.is_modified());
}

#[test]
fn replace_resets_cursor_history_and_modified_flag() {
	let mut buffer = TextBuffer::new(8);
	buffer.insert_char('a');
	buffer.replace("line one\nline two");
	assert_eq!(buffer.text(), "line one\nline two");
	assert_eq!(buffer.cursor(), 0);
	assert!(!buffer.can_undo());
	assert!(!buffer.is_modified());
}

#[test]
fn vertical_motion_keeps_preferred_column() {
	let mut buffer = buffer_with("abcd\nx\nabcd");
	buffer.set_cursor(3);

	buffer.move_down();
	assert_eq!(buffer.line_col(), (1, 1));

	buffer.move_down();
	assert_eq!(buffer.line_col(), (2, 3));

	buffer.move_up();
	buffer.move_up();
	assert_eq!(buffer.line_col(), (0, 3));
}

#[test]
fn vertical_motion_at_edges_goes_to_line_bounds() {
	let mut buffer = buffer_with("abc\ndef");
	buffer.set_cursor(2);
	buffer.move_up();
	assert_eq!(buffer.cursor(), 0);

	buffer.move_down();
	buffer.move_down();
	assert_eq!(buffer.line_col(), (1, 3));
}

#[test]
fn line_start_end_and_doc_bounds() {
	let mut buffer = buffer_with("one\ntwo\r\nthree");
	buffer.set_cursor(5);
	buffer.move_line_end();
	assert_eq!(buffer.line_col(), (1, 3));
	buffer.move_line_start();
	assert_eq!(buffer.line_col(), (1, 0));
	buffer.move_doc_end();
	assert_eq!(buffer.line_col(), (2, 5));
	buffer.move_doc_start();
	assert_eq!(buffer.cursor(), 0);
}

#[test]
fn horizontal_motion_steps_over_crlf() {
	let mut buffer = buffer_with("a\r\nb");
	buffer.set_cursor(1);
	buffer.move_right();
	assert_eq!(buffer.cursor(), 3);
	buffer.move_left();
	assert_eq!(buffer.cursor(), 1);
}

#[test]
fn line_text_strips_line_breaks() {
	let buffer = buffer_with("one\ntwo\r\n");
	assert_eq!(buffer.line_count(), 3);
	assert_eq!(buffer.line_text(0).as_deref(), Some("one"));
	assert_eq!(buffer.line_text(1).as_deref(), Some("two"));
	assert_eq!(buffer.line_text(2).as_deref(), Some(""));
	assert_eq!(buffer.line_text(3), None);
}

#[test]
fn non_ascii_columns_count_chars() {
	let mut buffer = buffer_with("日本語\né");
	buffer.move_doc_end();
	assert_eq!(buffer.line_col(), (1, 1));
	buffer.move_up();
	assert_eq!(buffer.line_col(), (0, 1));
}
