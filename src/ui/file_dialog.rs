use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tracing::debug;

use super::dialog::{ModalDialog, popup_area};
use crate::config::FileFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileDialogKind {
	Open,
	Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DirEntryView {
	name:   String,
	is_dir: bool,
}

/// Path picker: a typed path plus a filtered listing of the directory it points into.
pub(crate) struct FileDialog {
	kind:              FileDialogKind,
	input:             String,
	filters:           Vec<FileFilter>,
	filter_idx:        usize,
	default_extension: String,
	entries:           Vec<DirEntryView>,
	selected:          Option<usize>,
	error:             Option<String>,
	/// Existing file the Save dialog is asking to replace.
	pending_overwrite: Option<PathBuf>,
}

impl FileDialog {
	pub(crate) fn new(
		kind: FileDialogKind,
		filters: &[FileFilter],
		default_extension: &str,
		start_dir: &Path,
	) -> Self {
		let mut input = start_dir.display().to_string();
		if !input.is_empty() && !input.ends_with(MAIN_SEPARATOR) {
			input.push(MAIN_SEPARATOR);
		}
		let mut dialog = Self {
			kind,
			input,
			filters: filters.to_vec(),
			filter_idx: 0,
			default_extension: default_extension.to_string(),
			entries: Vec::new(),
			selected: None,
			error: None,
			pending_overwrite: None,
		};
		dialog.refresh();
		dialog
	}

	fn listing_dir(&self) -> PathBuf {
		if self.input.is_empty() {
			return PathBuf::from(".");
		}
		if self.input.ends_with(MAIN_SEPARATOR) {
			return PathBuf::from(&self.input);
		}
		match Path::new(&self.input).parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
			_ => PathBuf::from("."),
		}
	}

	fn name_prefix(&self) -> &str {
		if self.input.ends_with(MAIN_SEPARATOR) {
			return "";
		}
		self.input.rsplit(MAIN_SEPARATOR).next().unwrap_or("")
	}

	fn active_filter(&self) -> Option<&FileFilter> {
		self.filters.get(self.filter_idx)
	}

	fn refresh(&mut self) {
		self.selected = None;
		self.entries.clear();
		let dir = self.listing_dir();
		let read_dir = match std::fs::read_dir(&dir) {
			Ok(read_dir) => read_dir,
			Err(err) => {
				debug!("file dialog cannot list {}: {}", dir.display(), err);
				return;
			}
		};

		let prefix = self.name_prefix().to_string();
		let mut entries = read_dir
			.filter_map(Result::ok)
			.filter_map(|entry| {
				let name = entry.file_name().to_string_lossy().into_owned();
				let is_dir = entry.file_type().map(|ty| ty.is_dir()).unwrap_or(false);
				if !name.starts_with(&prefix) {
					return None;
				}
				if !is_dir && !self.active_filter().is_none_or(|filter| filter.matches(Path::new(&name))) {
					return None;
				}
				Some(DirEntryView { name, is_dir })
			})
			.collect::<Vec<_>>();
		entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
		if prefix.is_empty() && dir.parent().is_some() {
			entries.insert(0, DirEntryView { name: "..".to_string(), is_dir: true });
		}
		self.entries = entries;
	}

	fn descend(&mut self, dir: PathBuf) {
		let mut input = dir.display().to_string();
		if !input.ends_with(MAIN_SEPARATOR) {
			input.push(MAIN_SEPARATOR);
		}
		self.input = input;
		self.error = None;
		self.refresh();
	}

	fn accept(&mut self, path: PathBuf) -> Option<Option<PathBuf>> {
		if path.is_dir() {
			self.descend(path);
			return None;
		}
		match self.kind {
			FileDialogKind::Open if !path.exists() => {
				self.error = Some(format!("File not found: {}", path.display()));
				None
			}
			FileDialogKind::Open => Some(Some(path)),
			FileDialogKind::Save => {
				let path = resolve_save_path(path, &self.default_extension);
				if path.is_dir() {
					self.descend(path);
					return None;
				}
				if path.exists() {
					debug!("save target exists, asking before replacing {}", path.display());
					self.pending_overwrite = Some(path);
					return None;
				}
				Some(Some(path))
			}
		}
	}

	fn answer_overwrite(&mut self, key: KeyEvent) -> Option<Option<PathBuf>> {
		match key.code {
			KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.pending_overwrite.take().map(Some),
			KeyCode::Char('n' | 'N') | KeyCode::Esc => {
				self.pending_overwrite = None;
				None
			}
			_ => None,
		}
	}

	fn move_selection(&mut self, down: bool) {
		if self.entries.is_empty() {
			return;
		}
		let last = self.entries.len() - 1;
		self.selected = Some(match (self.selected, down) {
			(None, true) => 0,
			(None, false) => last,
			(Some(idx), true) => (idx + 1).min(last),
			(Some(idx), false) => idx.saturating_sub(1),
		});
	}
}

impl ModalDialog for FileDialog {
	type Output = Option<PathBuf>;

	fn handle_key(&mut self, key: KeyEvent) -> Option<Option<PathBuf>> {
		if self.pending_overwrite.is_some() {
			return self.answer_overwrite(key);
		}
		match key.code {
			KeyCode::Esc => Some(None),
			KeyCode::Enter => {
				if let Some(entry) = self.selected.and_then(|idx| self.entries.get(idx)).cloned() {
					let dir = self.listing_dir();
					let path = match dir.parent() {
						Some(parent) if entry.name == ".." => parent.to_path_buf(),
						_ => dir.join(&entry.name),
					};
					return self.accept(path);
				}
				let typed = self.input.trim();
				if typed.is_empty() {
					return None;
				}
				let path = PathBuf::from(typed);
				self.accept(path)
			}
			KeyCode::Tab => {
				if !self.filters.is_empty() {
					self.filter_idx = (self.filter_idx + 1) % self.filters.len();
					self.refresh();
				}
				None
			}
			KeyCode::Up => {
				self.move_selection(false);
				None
			}
			KeyCode::Down => {
				self.move_selection(true);
				None
			}
			KeyCode::Backspace => {
				self.input.pop();
				self.error = None;
				self.refresh();
				None
			}
			KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
				self.input.push(ch);
				self.error = None;
				self.refresh();
				None
			}
			_ => None,
		}
	}

	fn render(&self, frame: &mut Frame<'_>) {
		let screen = frame.area();
		let area = popup_area(screen, screen.width.saturating_sub(8).clamp(30, 80), screen.height.saturating_sub(4).clamp(8, 20));
		frame.render_widget(Clear, area);

		let title = match self.kind {
			FileDialogKind::Open => " Open ",
			FileDialogKind::Save => " Save As ",
		};
		let filter_label = self.active_filter().map(FileFilter::label).unwrap_or_default();
		let list_rows = usize::from(area.height.saturating_sub(2)).saturating_sub(5);
		let first = self.selected.map(|idx| (idx + 1).saturating_sub(list_rows)).unwrap_or(0);

		let mut lines = vec![
			Line::from(format!("File name: {}", self.input)),
			Line::from(format!("Type: {}  (Tab to change)", filter_label)),
			Line::from(""),
		];
		for (idx, entry) in self.entries.iter().enumerate().skip(first).take(list_rows) {
			let text = if entry.is_dir { format!("{}{}", entry.name, MAIN_SEPARATOR) } else { entry.name.clone() };
			let style = if Some(idx) == self.selected {
				Style::default().fg(Color::Black).bg(Color::Gray)
			} else if entry.is_dir {
				Style::default().fg(Color::Cyan)
			} else {
				Style::default()
			};
			lines.push(Line::styled(text, style));
		}
		while lines.len() < list_rows + 3 {
			lines.push(Line::from(""));
		}
		match (&self.pending_overwrite, &self.error) {
			(Some(path), _) => {
				let name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
				lines.push(Line::styled(
					format!("{} already exists. Replace it? (y/n)", name),
					Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
				));
			}
			(None, Some(error)) => lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red))),
			(None, None) => lines.push(Line::from("")),
		}
		let hint = if self.pending_overwrite.is_some() { "y: replace   n: back" } else { "Enter: accept   Esc: cancel" };
		lines.push(Line::styled(hint, Style::default().add_modifier(Modifier::DIM)));

		frame.render_widget(Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)), area);

		let cursor_x = area.x + 1 + ("File name: ".len() + self.input.chars().count()) as u16;
		let inner_right = area.x + area.width.saturating_sub(2);
		frame.set_cursor_position((cursor_x.min(inner_right), area.y + 1));
	}

	fn abandon(self) -> Option<PathBuf> {
		None
	}
}

/// Appends `default_extension` when the chosen file name has none.
pub(crate) fn resolve_save_path(path: PathBuf, default_extension: &str) -> PathBuf {
	if default_extension.is_empty() || path.extension().is_some() {
		return path;
	}
	let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
	name.push(".");
	name.push(default_extension);
	path.with_file_name(name)
}
