use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppAction {
	Editor(EditorAction),
	Layout(LayoutAction),
	File(FileAction),
	Menu(MenuAction),
	System(SystemAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
	KeyPressed(KeyEvent),
	InsertChar(char),
	InsertNewline,
	Backspace,
	DeleteForward,
	MoveLeft,
	MoveRight,
	MoveUp,
	MoveDown,
	MoveLineStart,
	MoveLineEnd,
	MoveFileStart,
	MoveFileEnd,
	Undo,
	Redo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAction {
	ViewportResized { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
	New,
	Open,
	Save,
	SaveAs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
	Toggle,
	Close,
	SelectNext,
	SelectPrev,
	Activate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
	Quit,
}
