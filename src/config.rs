use std::path::Path;

pub const APP_TITLE: &str = "PyNote";

/// Editor settings. Compiled in; nothing is read from disk or the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
	pub app_title:         String,
	pub undo_limit:        usize,
	pub tab_width:         usize,
	/// Extension appended by Save As when the chosen name has none, without the dot.
	pub default_extension: String,
	pub filters:           Vec<FileFilter>,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			app_title:         APP_TITLE.to_string(),
			undo_limit:        256,
			tab_width:         4,
			default_extension: "txt".to_string(),
			filters:           FileFilter::defaults(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
	pub name:     String,
	pub patterns: Vec<String>,
}

impl FileFilter {
	pub fn new(name: &str, patterns: &[&str]) -> Self {
		Self { name: name.to_string(), patterns: patterns.iter().map(|p| p.to_string()).collect() }
	}

	pub fn defaults() -> Vec<Self> {
		vec![Self::new("Text Files", &["*.txt", "*.md", "*.py"]), Self::new("All Files", &["*.*"])]
	}

	pub fn label(&self) -> String {
		format!("{} ({})", self.name, self.patterns.join(";"))
	}

	pub fn matches(&self, path: &Path) -> bool {
		self.patterns.iter().any(|pattern| pattern_matches(pattern, path))
	}
}

fn pattern_matches(pattern: &str, path: &Path) -> bool {
	if pattern == "*" || pattern == "*.*" {
		return true;
	}
	let Some(wanted) = pattern.strip_prefix("*.") else {
		return path.file_name().is_some_and(|name| name.to_string_lossy() == pattern);
	};
	path
		.extension()
		.map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
		.unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use super::{EditorConfig, FileFilter};

	#[test]
	fn text_filter_matches_listed_extensions_only() {
		let filters = FileFilter::defaults();
		let text = &filters[0];
		assert!(text.matches(Path::new("notes.txt")));
		assert!(text.matches(Path::new("README.MD")));
		assert!(text.matches(Path::new("dir/script.py")));
		assert!(!text.matches(Path::new("image.png")));
		assert!(!text.matches(Path::new("Makefile")));
	}

	#[test]
	fn all_files_filter_matches_anything() {
		let filters = FileFilter::defaults();
		let all = &filters[1];
		assert!(all.matches(Path::new("Makefile")));
		assert!(all.matches(Path::new("archive.tar.gz")));
	}

	#[test]
	fn filter_label_lists_patterns() {
		let filters = FileFilter::defaults();
		assert_eq!(filters[0].label(), "Text Files (*.txt;*.md;*.py)");
		assert_eq!(filters[1].label(), "All Files (*.*)");
	}

	#[test]
	fn default_config_uses_base_title_and_txt_extension() {
		let config = EditorConfig::default();
		assert_eq!(config.app_title, "PyNote");
		assert_eq!(config.default_extension, "txt");
		assert_eq!(config.undo_limit, 256);
	}
}
