use applesoft::mach::{Disk, Interpreter, LineReader, Screen};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Scripted console for driving the interpreter from tests: output is
/// captured, INPUT answers come from a queue, SAVE/LOAD hit an
/// in-memory disk.
pub struct Console {
    out: Rc<RefCell<String>>,
    input: Rc<RefCell<VecDeque<String>>>,
    files: Rc<RefCell<HashMap<String, Vec<String>>>>,
}

#[allow(dead_code)]
impl Console {
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.out.borrow_mut())
    }

    pub fn will_type(&self, line: &str) {
        self.input.borrow_mut().push_back(line.to_string());
    }

    pub fn file(&self, name: &str) -> Option<Vec<String>> {
        self.files.borrow().get(name).cloned()
    }

    pub fn put_file(&self, name: &str, lines: &[&str]) {
        self.files.borrow_mut().insert(
            name.to_string(),
            lines.iter().map(|line| line.to_string()).collect(),
        );
    }
}

struct ConsoleScreen {
    out: Rc<RefCell<String>>,
    column: Rc<Cell<usize>>,
}

impl Screen for ConsoleScreen {
    fn clear(&mut self) {
        self.column.set(0);
    }
    fn move_column(&mut self, column: usize) {
        self.column.set(column - 1);
    }
    fn move_row(&mut self, _row: usize) {}
    fn column(&self) -> usize {
        self.column.get()
    }
    fn print(&mut self, text: &str) {
        self.out.borrow_mut().push_str(text);
        self.column.set(self.column.get() + text.chars().count());
    }
    fn newline(&mut self) {
        self.out.borrow_mut().push('\n');
        self.column.set(0);
    }
}

struct ConsoleReader {
    out: Rc<RefCell<String>>,
    column: Rc<Cell<usize>>,
    input: Rc<RefCell<VecDeque<String>>>,
}

impl LineReader for ConsoleReader {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let line = self.input.borrow_mut().pop_front()?;
        let mut out = self.out.borrow_mut();
        out.push_str(prompt);
        out.push_str(&line);
        out.push('\n');
        self.column.set(0);
        Some(line)
    }
}

struct ConsoleDisk {
    files: Rc<RefCell<HashMap<String, Vec<String>>>>,
}

impl Disk for ConsoleDisk {
    fn save(&mut self, name: &str, lines: &[String]) -> std::io::Result<()> {
        self.files
            .borrow_mut()
            .insert(name.to_string(), lines.to_vec());
        Ok(())
    }
    fn load(&mut self, name: &str) -> std::io::Result<Option<Vec<String>>> {
        Ok(self.files.borrow().get(name).cloned())
    }
}

pub fn interpreter() -> (Interpreter, Console) {
    let out = Rc::new(RefCell::new(String::new()));
    let column = Rc::new(Cell::new(0));
    let input = Rc::new(RefCell::new(VecDeque::new()));
    let files = Rc::new(RefCell::new(HashMap::new()));
    let screen = ConsoleScreen {
        out: Rc::clone(&out),
        column: Rc::clone(&column),
    };
    let reader = ConsoleReader {
        out: Rc::clone(&out),
        column: Rc::clone(&column),
        input: Rc::clone(&input),
    };
    let disk = ConsoleDisk {
        files: Rc::clone(&files),
    };
    let interpreter = Interpreter::new(Box::new(screen), Box::new(reader), Box::new(disk));
    let console = Console { out, input, files };
    (interpreter, console)
}
