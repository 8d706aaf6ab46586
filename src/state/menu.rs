#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
	New,
	Open,
	Save,
	SaveAs,
	Separator,
	Exit,
}

impl MenuItem {
	pub const FILE_MENU: [MenuItem; 6] =
		[MenuItem::New, MenuItem::Open, MenuItem::Save, MenuItem::SaveAs, MenuItem::Separator, MenuItem::Exit];

	pub fn label(self) -> &'static str {
		match self {
			MenuItem::New => "New",
			MenuItem::Open => "Open",
			MenuItem::Save => "Save",
			MenuItem::SaveAs => "Save As",
			MenuItem::Separator => "",
			MenuItem::Exit => "Exit",
		}
	}

	pub fn accelerator(self) -> Option<&'static str> {
		match self {
			MenuItem::New => Some("Ctrl+N"),
			MenuItem::Open => Some("Ctrl+O"),
			MenuItem::Save => Some("Ctrl+S"),
			MenuItem::SaveAs | MenuItem::Separator | MenuItem::Exit => None,
		}
	}

	pub fn is_separator(self) -> bool {
		self == MenuItem::Separator
	}
}

/// Drop-down state of the File menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
	pub open:     bool,
	pub selected: usize,
}

impl MenuState {
	pub fn open(&mut self) {
		self.open = true;
		self.selected = 0;
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	pub fn select_next(&mut self) {
		self.step(1);
	}

	pub fn select_prev(&mut self) {
		self.step(MenuItem::FILE_MENU.len() - 1);
	}

	pub fn selected_item(&self) -> MenuItem {
		MenuItem::FILE_MENU[self.selected % MenuItem::FILE_MENU.len()]
	}

	fn step(&mut self, offset: usize) {
		let len = MenuItem::FILE_MENU.len();
		let mut next = self.selected;
		loop {
			next = (next + offset) % len;
			if !MenuItem::FILE_MENU[next].is_separator() {
				break;
			}
		}
		self.selected = next;
	}
}
