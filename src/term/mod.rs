/*!
## Terminal Module

The interactive shell: a `]` prompt with history over `linefeed`, an
ANSI screen, and a filesystem disk. Everything the running program sees
goes through the `Screen`, `LineReader`, and `Disk` capabilities; this
module is the only place that touches the real terminal.

*/

extern crate ansi_term;
extern crate linefeed;
extern crate mortal;

use crate::mach::{Disk, Interpreter, LineReader, Screen};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::cell::Cell;
use std::fs;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::rc::Rc;

pub fn main() {
    if std::env::args().count() > 2 {
        println!("Usage: applesoft [FILENAME]");
        return;
    }
    let filename = std::env::args().nth(1);
    if let Err(error) = main_loop(filename) {
        let message = format!("?ERROR: {}", error.to_string().to_ascii_uppercase());
        eprintln!("{}", Style::new().bold().paint(message));
    }
}

fn main_loop(filename: Option<String>) -> std::io::Result<()> {
    let interface = Rc::new(Interface::new("applesoft")?);
    let column = Rc::new(Cell::new(0));
    let screen = AnsiScreen {
        terminal: mortal::Terminal::new().ok(),
        column: Rc::clone(&column),
    };
    let reader = TermReader {
        interface: Rc::clone(&interface),
        column: Rc::clone(&column),
    };
    let mut interpreter =
        Interpreter::new(Box::new(screen), Box::new(reader), Box::new(FsDisk));

    println!("{}", Style::new().bold().paint("APPLESOFT BASIC"));
    if let Some(filename) = &filename {
        match fs::File::open(filename) {
            Ok(file) => {
                for line in BufReader::new(file).lines() {
                    interpreter.enter(line?.trim_end());
                }
            }
            Err(error) => {
                if error.kind() == ErrorKind::NotFound {
                    println!("?FILE NOT FOUND");
                } else {
                    return Err(error);
                }
            }
        }
    }

    loop {
        interface.set_prompt("]")?;
        match interface.read_line()? {
            ReadResult::Input(line) => {
                let trimmed = line.trim();
                if trimmed.eq_ignore_ascii_case("QUIT") || trimmed.eq_ignore_ascii_case("EXIT")
                {
                    break;
                }
                column.set(0);
                interpreter.enter(&line);
                if !trimmed.is_empty() {
                    interface.add_history_unique(line);
                }
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(())
}

/// Writes through stdout, tracking the cursor column itself. HTAB and
/// VTAB go out as CSI sequences; HOME clears through `mortal` when a
/// terminal is available. Host failures are swallowed, as the screen
/// contract requires.
struct AnsiScreen {
    terminal: Option<mortal::Terminal>,
    column: Rc<Cell<usize>>,
}

impl AnsiScreen {
    fn emit(&self, text: &str) {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

impl Screen for AnsiScreen {
    fn clear(&mut self) {
        if let Some(terminal) = &self.terminal {
            let _ = terminal.clear_screen();
        }
        self.column.set(0);
    }

    fn move_column(&mut self, column: usize) {
        self.emit(&format!("\x1b[{}G", column));
        self.column.set(column - 1);
    }

    fn move_row(&mut self, row: usize) {
        self.emit(&format!("\x1b[{}d", row));
    }

    fn column(&self) -> usize {
        self.column.get()
    }

    fn print(&mut self, text: &str) {
        self.emit(text);
        match text.rfind('\n') {
            Some(index) => self.column.set(text[index + 1..].chars().count()),
            None => self.column.set(self.column.get() + text.chars().count()),
        }
    }

    fn newline(&mut self) {
        self.emit("\n");
        self.column.set(0);
    }
}

/// INPUT reads through the same linefeed interface as the REPL so the
/// program gets line editing for free.
struct TermReader {
    interface: Rc<Interface<linefeed::DefaultTerminal>>,
    column: Rc<Cell<usize>>,
}

impl LineReader for TermReader {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if self.interface.set_prompt(prompt).is_err() {
            return None;
        }
        match self.interface.read_line() {
            Ok(ReadResult::Input(line)) => {
                self.column.set(0);
                Some(line)
            }
            _ => None,
        }
    }
}

/// One program line per physical line, ascending, `<n> <text>`.
struct FsDisk;

impl Disk for FsDisk {
    fn save(&mut self, name: &str, lines: &[String]) -> std::io::Result<()> {
        let mut file = fs::File::create(name)?;
        for line in lines {
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }

    fn load(&mut self, name: &str) -> std::io::Result<Option<Vec<String>>> {
        let file = match fs::File::open(name) {
            Ok(file) => file,
            Err(error) => {
                if error.kind() == ErrorKind::NotFound {
                    return Ok(None);
                }
                return Err(error);
            }
        };
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        Ok(Some(lines))
    }
}
