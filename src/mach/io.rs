/// ## Host capabilities
///
/// The interpreter owns no terminal, keyboard, or filesystem of its own.
/// The shell injects these three capabilities; tests inject scripted ones.

/// Terminal output. All operations are best-effort: implementations must
/// swallow host failures rather than surface them into a running program.
pub trait Screen {
    /// Clear the screen and move the cursor home.
    fn clear(&mut self);
    /// Move the cursor to a column, 1-based.
    fn move_column(&mut self, column: usize);
    /// Move the cursor to a row, 1-based.
    fn move_row(&mut self, row: usize);
    /// Current cursor column, 0-based. Drives PRINT zones, POS, and TAB.
    fn column(&self) -> usize;
    fn print(&mut self, text: &str);
    fn newline(&mut self);
}

/// Blocking keyboard input. Displays `prompt`, reads one line, and leaves
/// the cursor in column 0. `None` means end of input.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Line-oriented program persistence for SAVE and LOAD.
/// `load` returns `Ok(None)` when no such file exists.
pub trait Disk {
    fn save(&mut self, name: &str, lines: &[String]) -> std::io::Result<()>;
    fn load(&mut self, name: &str) -> std::io::Result<Option<Vec<String>>>;
}
