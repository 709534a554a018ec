use super::eval::{self, Context};
use super::io::{Disk, LineReader, Screen};
use super::val::{self, Val};
use crate::error;
use crate::lang::token::{Literal, Operator, Token, Word};
use crate::lang::{lex, Error, Ident, LineNumber, MaxValue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashMap};

type Result<T> = std::result::Result<T, Error>;

/// PEEK and POKE address this much flat memory and nothing else.
pub const MEMORY_SIZE: usize = 65536;

const PRINT_ZONE: usize = 16;

static END_OF_LINE: Token = Token::EndOfLine;

/// ## The interpreter
///
/// Owns the program store, all variable state, the control stacks, the
/// DATA pool, user functions, memory, and the RNG. The REPL feeds it one
/// raw line at a time through [`Interpreter::enter`].
pub struct Interpreter {
    screen: Box<dyn Screen>,
    reader: Box<dyn LineReader>,
    disk: Box<dyn Disk>,
    source: BTreeMap<u16, String>,
    lines: Vec<u16>,
    program_index: usize,
    line: LineNumber,
    vars: HashMap<String, Val>,
    arrays: HashMap<String, Array>,
    for_stack: Vec<ForFrame>,
    gosub_stack: Vec<usize>,
    data: Vec<String>,
    data_pos: usize,
    functions: HashMap<String, UserFunction>,
    memory: Vec<u8>,
    rng: StdRng,
    cont: Option<usize>,
}

/// How a chain of statements left the program cursor.
enum Flow {
    /// Fell off the end of the line; take the following one.
    Next,
    /// `program_index` was rewritten; the driver lexes the new target.
    Jump,
    /// Re-enter a token snapshot (NEXT looping back into a FOR body).
    Resume(Vec<Token>, usize),
    /// Clean halt.
    End,
    /// STOP; report `BREAK` against this line.
    Stop(LineNumber),
}

struct ForFrame {
    var: String,
    limit: f64,
    step: f64,
    /// Snapshot of the FOR line and the offset just past the FOR
    /// statement. Looping re-executes this, so a one-line
    /// `FOR...:...:NEXT` iterates and edits to the stored line cannot
    /// leave the frame pointing into garbage.
    tokens: Vec<Token>,
    pos: usize,
    /// Pre-advanced index: the line after the FOR line.
    program_index: usize,
    line: LineNumber,
}

#[derive(Clone)]
struct UserFunction {
    param: String,
    body: Vec<Token>,
}

struct Array {
    dims: Vec<usize>,
    values: Vec<Val>,
}

impl Array {
    fn new(dims: Vec<usize>, is_string: bool) -> Array {
        let size = dims.iter().product();
        let fill = if is_string {
            Val::String(String::new())
        } else {
            Val::Number(0.0)
        };
        Array {
            dims,
            values: vec![fill; size],
        }
    }

    /// Flat offset for a row-major element. The index count must match
    /// the count the array was created with.
    fn offset(&self, indices: &[f64]) -> Result<usize> {
        if indices.len() != self.dims.len() {
            return Err(error!(BadSubscript));
        }
        let mut flat = 0;
        for (index, dim) in indices.iter().zip(&self.dims) {
            let i = *index as i64;
            if *index < 0.0 || i >= *dim as i64 {
                return Err(error!(BadSubscript));
            }
            flat = flat * dim + i as usize;
        }
        Ok(flat)
    }
}

enum Target {
    Var(String),
    Element(Ident, Vec<f64>),
}

impl Interpreter {
    pub fn new(
        screen: Box<dyn Screen>,
        reader: Box<dyn LineReader>,
        disk: Box<dyn Disk>,
    ) -> Interpreter {
        Interpreter {
            screen,
            reader,
            disk,
            source: BTreeMap::new(),
            lines: vec![],
            program_index: 0,
            line: None,
            vars: HashMap::new(),
            arrays: HashMap::new(),
            for_stack: vec![],
            gosub_stack: vec![],
            data: vec![],
            data_pos: 0,
            functions: HashMap::new(),
            memory: vec![0; MEMORY_SIZE],
            rng: StdRng::from_entropy(),
            cont: None,
        }
    }

    /// One raw REPL line: a leading digit stores a program line,
    /// anything else executes immediately.
    pub fn enter(&mut self, raw: &str) {
        let trimmed = raw.trim_start();
        if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            if let Err(error) = self.parse_and_store(trimmed) {
                self.report(&error);
            }
        } else {
            self.execute_direct(raw);
        }
    }

    pub fn parse_and_store(&mut self, raw: &str) -> Result<()> {
        let raw = raw.trim_start();
        let digits_end = raw
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or_else(|| raw.len());
        let (digits, rest) = raw.split_at(digits_end);
        let number = match digits.parse::<u16>() {
            Ok(number) if number <= LineNumber::max_value() => number,
            _ => return Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        };
        self.store_line(number, rest);
        Ok(())
    }

    /// Storing empty text deletes the line.
    pub fn store_line(&mut self, number: u16, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.source.remove(&number);
        } else {
            self.source.insert(number, text.to_string());
        }
        self.lines = self.source.keys().copied().collect();
        self.cont = None;
    }

    /// Executes an immediate-mode line. Errors print without a line
    /// suffix unless raised from inside a stored line it jumped into.
    pub fn execute_direct(&mut self, raw: &str) {
        self.line = None;
        self.program_index = self.lines.len();
        match lex(raw) {
            Ok(tokens) => {
                if let Err(error) = self.drive(Some((tokens, 0))) {
                    self.report(&error);
                }
            }
            Err(error) => self.report(&error),
        }
    }

    /// The outer loop. Executes pending tokens if any, otherwise lexes
    /// the line at the program cursor, until the program runs out or a
    /// statement halts it.
    fn drive(&mut self, mut pending: Option<(Vec<Token>, usize)>) -> Result<()> {
        loop {
            let (tokens, pos) = match pending.take() {
                Some(next) => next,
                None => {
                    let number = match self.lines.get(self.program_index) {
                        Some(number) => *number,
                        None => break,
                    };
                    self.program_index += 1;
                    self.line = Some(number);
                    let text = self.source.get(&number).cloned().unwrap_or_default();
                    let tokens =
                        lex(&text).map_err(|error| error.in_line_number(Some(number)))?;
                    (tokens, 0)
                }
            };
            let flow = self
                .statements(&tokens, pos)
                .map_err(|error| error.in_line_number(self.line))?;
            match flow {
                Flow::Next => {
                    if self.line.is_none() {
                        break;
                    }
                }
                Flow::Jump => {}
                Flow::Resume(tokens, pos) => pending = Some((tokens, pos)),
                Flow::End => break,
                Flow::Stop(line) => {
                    let message = match line {
                        Some(number) => format!("BREAK IN {}", number),
                        None => "BREAK".to_string(),
                    };
                    if self.screen.column() > 0 {
                        self.screen.newline();
                    }
                    self.screen.print(&message);
                    self.screen.newline();
                    break;
                }
            }
        }
        if self.screen.column() > 0 {
            self.screen.newline();
        }
        Ok(())
    }

    fn report(&mut self, error: &Error) {
        if self.screen.column() > 0 {
            self.screen.newline();
        }
        self.screen.print(&error.to_string());
        self.screen.newline();
    }

    /// Executes the statements of one line starting at `pos`.
    fn statements(&mut self, tokens: &[Token], mut pos: usize) -> Result<Flow> {
        loop {
            while tokens.get(pos) == Some(&Token::Colon) {
                pos += 1;
            }
            match tokens.get(pos) {
                None | Some(Token::EndOfLine) | Some(Token::Rem(_)) => return Ok(Flow::Next),
                _ => {}
            }
            if let Some(flow) = self.statement(tokens, &mut pos)? {
                return Ok(flow);
            }
            match tokens.get(pos) {
                Some(Token::Colon) => {}
                None | Some(Token::EndOfLine) | Some(Token::Rem(_)) => return Ok(Flow::Next),
                _ => return Err(error!(SyntaxError)),
            }
        }
    }

    /// One statement. `None` means execution continues on this line.
    fn statement(&mut self, tokens: &[Token], pos: &mut usize) -> Result<Option<Flow>> {
        let word = match &tokens[*pos] {
            Token::Word(word) => *word,
            Token::Ident(_) => {
                self.assignment(tokens, pos)?;
                return Ok(None);
            }
            _ => return Err(error!(SyntaxError)),
        };
        *pos += 1;
        use Word::*;
        match word {
            Call => {
                self.expr(tokens, pos)?.number()?;
                Ok(None)
            }
            Clear => {
                self.clear_state();
                Ok(None)
            }
            Cont => self.r#cont(),
            Data => Ok(Some(Flow::Next)),
            Def => {
                self.def(tokens, pos)?;
                Ok(None)
            }
            Del => {
                self.del(tokens, pos)?;
                Ok(None)
            }
            Dim => {
                self.dim(tokens, pos)?;
                Ok(None)
            }
            End => {
                self.cont = Some(self.program_index);
                Ok(Some(Flow::End))
            }
            For => self.r#for(tokens, pos).map(|_| None),
            Gosub => {
                let number = self.expr(tokens, pos)?.number()?;
                self.gosub_stack.push(self.program_index);
                self.jump(number).map(Some)
            }
            Goto => {
                let number = self.expr(tokens, pos)?.number()?;
                self.jump(number).map(Some)
            }
            Home => {
                self.screen.clear();
                Ok(None)
            }
            Htab => {
                let column = self.expr(tokens, pos)?.number()?;
                if column < 1.0 {
                    return Err(error!(IllegalQuantity));
                }
                self.screen.move_column(column as usize);
                Ok(None)
            }
            If => self.r#if(tokens, pos),
            Input => {
                self.input(tokens, pos)?;
                Ok(None)
            }
            Let => {
                self.assignment(tokens, pos)?;
                Ok(None)
            }
            List => {
                self.list(tokens, pos)?;
                Ok(None)
            }
            Load => self.load(tokens, pos).map(Some),
            New => {
                self.new_program();
                Ok(Some(Flow::End))
            }
            Next => self.r#next(tokens, pos),
            On => self.on(tokens, pos),
            Poke => {
                self.poke(tokens, pos)?;
                Ok(None)
            }
            Print => {
                self.print(tokens, pos)?;
                Ok(None)
            }
            Read => {
                self.read(tokens, pos)?;
                Ok(None)
            }
            Restore => {
                self.data_pos = 0;
                Ok(None)
            }
            Return => match self.gosub_stack.pop() {
                Some(index) => {
                    self.program_index = index;
                    Ok(Some(Flow::Jump))
                }
                None => Err(error!(ReturnWithoutGosub)),
            },
            Run => self.run(tokens, pos).map(Some),
            Save => {
                self.save(tokens, pos)?;
                Ok(None)
            }
            Stop => {
                self.cont = Some(self.program_index);
                Ok(Some(Flow::Stop(self.line)))
            }
            Vtab => {
                let row = self.expr(tokens, pos)?.number()?;
                if row < 1.0 {
                    return Err(error!(IllegalQuantity));
                }
                self.screen.move_row(row as usize);
                Ok(None)
            }
            // GET lexes but has no handler in this machine.
            Get | Fn | Step | Then | To => Err(error!(SyntaxError)),
        }
    }

    fn expr(&mut self, tokens: &[Token], pos: &mut usize) -> Result<Val> {
        let (value, next) = eval::evaluate(tokens, *pos, self)?;
        *pos = next;
        Ok(value)
    }

    fn peek_token<'a>(&self, tokens: &'a [Token], pos: usize) -> &'a Token {
        tokens.get(pos).unwrap_or(&END_OF_LINE)
    }

    fn at_statement_end(&self, tokens: &[Token], pos: usize) -> bool {
        matches!(
            self.peek_token(tokens, pos),
            Token::Colon | Token::EndOfLine | Token::Rem(_)
        )
    }

    /// Resolves a jump target to a program index. The driver picks the
    /// line up from there.
    fn jump(&mut self, number: f64) -> Result<Flow> {
        if number < 0.0 || number > LineNumber::max_value() as f64 {
            return Err(error!(UndefdStatement));
        }
        match self.lines.binary_search(&(number as u16)) {
            Ok(index) => {
                self.program_index = index;
                Ok(Flow::Jump)
            }
            Err(_) => Err(error!(UndefdStatement)),
        }
    }

    // ----- assignment and friends -----

    fn target(&mut self, tokens: &[Token], pos: &mut usize) -> Result<Target> {
        let ident = match self.peek_token(tokens, *pos).clone() {
            Token::Ident(ident) => ident,
            _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        };
        *pos += 1;
        if self.peek_token(tokens, *pos) == &Token::LParen {
            *pos += 1;
            let mut indices = vec![self.expr(tokens, pos)?.number()?];
            while self.peek_token(tokens, *pos) == &Token::Comma {
                *pos += 1;
                indices.push(self.expr(tokens, pos)?.number()?);
            }
            self.expect(tokens, pos, &Token::RParen, ")")?;
            Ok(Target::Element(ident, indices))
        } else {
            Ok(Target::Var(ident.as_str().to_string()))
        }
    }

    fn assign(&mut self, target: &Target, value: Val) -> Result<()> {
        match target {
            Target::Var(name) => self.set_var(name, value),
            Target::Element(ident, indices) => {
                let slot = self.array_slot(ident, indices)?;
                match (&value, &*slot) {
                    (Val::Number(_), Val::Number(_)) | (Val::String(_), Val::String(_)) => {
                        *slot = value;
                        Ok(())
                    }
                    _ => Err(error!(TypeMismatch)),
                }
            }
        }
    }

    fn assignment(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        let target = self.target(tokens, pos)?;
        self.expect(tokens, pos, &Token::Operator(Operator::Equal), "=")?;
        let value = self.expr(tokens, pos)?;
        self.assign(&target, value)
    }

    fn set_var(&mut self, name: &str, value: Val) -> Result<()> {
        let ok = match &value {
            Val::String(_) => name.ends_with('$'),
            Val::Number(_) => !name.ends_with('$'),
        };
        if !ok {
            return Err(error!(TypeMismatch));
        }
        self.vars.insert(name.to_string(), value);
        Ok(())
    }

    fn expect(
        &self,
        tokens: &[Token],
        pos: &mut usize,
        token: &Token,
        what: &str,
    ) -> Result<()> {
        if self.peek_token(tokens, *pos) == token {
            *pos += 1;
            Ok(())
        } else {
            Err(error!(SyntaxError; &format!("EXPECTED {}", what)))
        }
    }

    // ----- statement bodies -----

    fn print(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        let mut newline = true;
        loop {
            match self.peek_token(tokens, *pos) {
                Token::Colon | Token::EndOfLine | Token::Rem(_) => break,
                Token::Semicolon => {
                    *pos += 1;
                    newline = false;
                }
                Token::Comma => {
                    *pos += 1;
                    let column = self.screen.column();
                    let pad = PRINT_ZONE - column % PRINT_ZONE;
                    let spaces = " ".repeat(pad);
                    self.screen.print(&spaces);
                    newline = false;
                }
                _ => {
                    let value = self.expr(tokens, pos)?;
                    let text = value.print_format();
                    self.screen.print(&text);
                    newline = true;
                }
            }
        }
        if newline {
            self.screen.newline();
        }
        Ok(())
    }

    fn input(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        let mut prompt = "? ".to_string();
        if let Token::Literal(Literal::String(text)) = self.peek_token(tokens, *pos).clone() {
            *pos += 1;
            match self.peek_token(tokens, *pos) {
                Token::Semicolon => {
                    *pos += 1;
                    prompt = text + "? ";
                }
                Token::Comma => {
                    *pos += 1;
                    prompt = text;
                }
                _ => return Err(error!(SyntaxError; "EXPECTED ; OR ,")),
            }
        }
        // Targets parse one at a time so a later subscript can use a
        // value read just before it, as in INPUT I,B(I).
        let mut items: Vec<String> = vec![];
        loop {
            let target = self.target(tokens, pos)?;
            if items.is_empty() {
                let line = self.reader.read_line(&prompt).unwrap_or_default();
                items = line.split(',').map(|item| item.trim().to_string()).collect();
                items.reverse();
                prompt = "?? ".to_string();
            }
            let item = items.pop().unwrap_or_default();
            let value = match &target {
                Target::Var(name) if name.ends_with('$') => Val::String(item),
                Target::Element(ident, _) if ident.is_string() => Val::String(item),
                _ => Val::Number(val::parse_number(&item)),
            };
            self.assign(&target, value)?;
            if self.peek_token(tokens, *pos) == &Token::Comma {
                *pos += 1;
            } else {
                return Ok(());
            }
        }
    }

    fn r#if(&mut self, tokens: &[Token], pos: &mut usize) -> Result<Option<Flow>> {
        let condition = self.expr(tokens, pos)?.number()?;
        self.expect(tokens, pos, &Token::Word(Word::Then), "THEN")?;
        if condition == 0.0 {
            // False skips the whole rest of the line; there is no ELSE.
            return Ok(Some(Flow::Next));
        }
        if let Token::Literal(Literal::Number(number)) = self.peek_token(tokens, *pos) {
            let number = *number;
            return self.jump(number).map(Some);
        }
        self.statements(tokens, *pos).map(Some)
    }

    fn r#for(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        let var = match self.peek_token(tokens, *pos).clone() {
            Token::Ident(Ident::Plain(name)) => name,
            _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        };
        *pos += 1;
        self.expect(tokens, pos, &Token::Operator(Operator::Equal), "=")?;
        let start = self.expr(tokens, pos)?.number()?;
        self.expect(tokens, pos, &Token::Word(Word::To), "TO")?;
        let limit = self.expr(tokens, pos)?.number()?;
        let step = if self.peek_token(tokens, *pos) == &Token::Word(Word::Step) {
            *pos += 1;
            self.expr(tokens, pos)?.number()?
        } else {
            1.0
        };
        self.set_var(&var, Val::Number(start))?;
        self.for_stack.push(ForFrame {
            var,
            limit,
            step,
            tokens: tokens.to_vec(),
            pos: *pos,
            program_index: self.program_index,
            line: self.line,
        });
        Ok(())
    }

    fn r#next(&mut self, tokens: &[Token], pos: &mut usize) -> Result<Option<Flow>> {
        let mut names: Vec<Option<String>> = vec![];
        if let Token::Ident(ident) = self.peek_token(tokens, *pos) {
            names.push(Some(ident.as_str().to_string()));
            *pos += 1;
            while self.peek_token(tokens, *pos) == &Token::Comma {
                *pos += 1;
                match self.peek_token(tokens, *pos).clone() {
                    Token::Ident(ident) => {
                        names.push(Some(ident.as_str().to_string()));
                        *pos += 1;
                    }
                    _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
                }
            }
        } else {
            names.push(None);
        }
        for name in names {
            if let Some(name) = &name {
                while let Some(frame) = self.for_stack.last() {
                    if &frame.var == name {
                        break;
                    }
                    self.for_stack.pop();
                }
            }
            let frame = match self.for_stack.last() {
                Some(frame) => frame,
                None => return Err(error!(NextWithoutFor)),
            };
            let value = match self.vars.get(&frame.var) {
                Some(value) => value.number()?,
                None => 0.0,
            };
            let value = value + frame.step;
            let finished = if frame.step < 0.0 {
                value < frame.limit
            } else {
                value > frame.limit
            };
            let var = frame.var.clone();
            self.set_var(&var, Val::Number(value))?;
            if finished {
                self.for_stack.pop();
            } else {
                let frame = self.for_stack.last().unwrap();
                self.program_index = frame.program_index;
                self.line = frame.line;
                return Ok(Some(Flow::Resume(frame.tokens.clone(), frame.pos)));
            }
        }
        Ok(None)
    }

    fn dim(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        loop {
            let ident = match self.peek_token(tokens, *pos).clone() {
                Token::Ident(ident) => ident,
                _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
            };
            *pos += 1;
            self.expect(tokens, pos, &Token::LParen, "(")?;
            let mut dims = vec![];
            loop {
                let bound = self.expr(tokens, pos)?.number()?;
                if bound < 0.0 {
                    return Err(error!(IllegalQuantity));
                }
                dims.push(bound as usize + 1);
                if self.peek_token(tokens, *pos) == &Token::Comma {
                    *pos += 1;
                } else {
                    break;
                }
            }
            self.expect(tokens, pos, &Token::RParen, ")")?;
            let name = ident.as_str().to_string();
            self.arrays.insert(name, Array::new(dims, ident.is_string()));
            if self.peek_token(tokens, *pos) == &Token::Comma {
                *pos += 1;
            } else {
                return Ok(());
            }
        }
    }

    fn read(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        loop {
            let target = self.target(tokens, pos)?;
            let item = match self.data.get(self.data_pos) {
                Some(item) => item.clone(),
                None => return Err(error!(OutOfData)),
            };
            self.data_pos += 1;
            let is_string = match &target {
                Target::Var(name) => name.ends_with('$'),
                Target::Element(ident, _) => ident.is_string(),
            };
            let value = if is_string {
                Val::String(item)
            } else {
                let item = item.trim();
                if item.is_empty() {
                    Val::Number(0.0)
                } else {
                    match item.parse::<f64>() {
                        Ok(number) => Val::Number(number),
                        Err(_) => return Err(error!(TypeMismatch)),
                    }
                }
            };
            self.assign(&target, value)?;
            if self.peek_token(tokens, *pos) == &Token::Comma {
                *pos += 1;
            } else {
                return Ok(());
            }
        }
    }

    fn def(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        self.expect(tokens, pos, &Token::Word(Word::Fn), "FN")?;
        let name = match self.peek_token(tokens, *pos).clone() {
            Token::Ident(Ident::Plain(name)) => name,
            _ => return Err(error!(SyntaxError; "EXPECTED FUNCTION NAME")),
        };
        *pos += 1;
        self.expect(tokens, pos, &Token::LParen, "(")?;
        let param = match self.peek_token(tokens, *pos).clone() {
            Token::Ident(Ident::Plain(name)) => name,
            _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        };
        *pos += 1;
        self.expect(tokens, pos, &Token::RParen, ")")?;
        self.expect(tokens, pos, &Token::Operator(Operator::Equal), "=")?;
        let mut body = vec![];
        while !self.at_statement_end(tokens, *pos) {
            body.push(tokens[*pos].clone());
            *pos += 1;
        }
        body.push(Token::EndOfLine);
        self.functions.insert(name, UserFunction { param, body });
        Ok(())
    }

    fn on(&mut self, tokens: &[Token], pos: &mut usize) -> Result<Option<Flow>> {
        let chosen = self.expr(tokens, pos)?.number()? as i64;
        let gosub = match self.peek_token(tokens, *pos) {
            Token::Word(Word::Goto) => false,
            Token::Word(Word::Gosub) => true,
            _ => return Err(error!(SyntaxError; "EXPECTED GOTO OR GOSUB")),
        };
        *pos += 1;
        let mut targets = vec![];
        loop {
            match self.peek_token(tokens, *pos) {
                Token::Literal(Literal::Number(number)) => {
                    targets.push(*number);
                    *pos += 1;
                }
                _ => return Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
            }
            if self.peek_token(tokens, *pos) == &Token::Comma {
                *pos += 1;
            } else {
                break;
            }
        }
        if chosen < 1 || chosen > targets.len() as i64 {
            // Out of range falls through to the next statement.
            return Ok(None);
        }
        if gosub {
            self.gosub_stack.push(self.program_index);
        }
        self.jump(targets[chosen as usize - 1]).map(Some)
    }

    fn poke(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        let addr = self.expr(tokens, pos)?.number()?;
        self.expect(tokens, pos, &Token::Comma, ",")?;
        let value = self.expr(tokens, pos)?.number()?;
        if addr < 0.0 || addr >= MEMORY_SIZE as f64 || !(0.0..=255.0).contains(&value) {
            return Err(error!(IllegalQuantity));
        }
        self.memory[addr as usize] = value as u8;
        Ok(())
    }

    fn run(&mut self, tokens: &[Token], pos: &mut usize) -> Result<Flow> {
        let start = if self.at_statement_end(tokens, *pos) {
            None
        } else {
            Some(self.expr(tokens, pos)?.number()?)
        };
        self.clear_state();
        self.rebuild_data()?;
        self.cont = None;
        self.program_index = match start {
            None => 0,
            Some(number) => {
                let index = self
                    .lines
                    .iter()
                    .position(|&line| line as f64 >= number);
                match index {
                    Some(index) => index,
                    None => return Err(error!(UndefdStatement)),
                }
            }
        };
        Ok(Flow::Jump)
    }

    fn r#cont(&mut self) -> Result<Option<Flow>> {
        match self.cont.take() {
            Some(index) => {
                self.program_index = index;
                Ok(Some(Flow::Jump))
            }
            None => Err(error!(CantContinue)),
        }
    }

    fn list(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        let (from, to) = if self.at_statement_end(tokens, *pos) {
            (0, u16::MAX)
        } else {
            let from = self.expr(tokens, pos)?.number()?.max(0.0) as u16;
            if self.peek_token(tokens, *pos) == &Token::Comma {
                *pos += 1;
                let to = self.expr(tokens, pos)?.number()?.max(0.0) as u16;
                (from, to)
            } else {
                (from, from)
            }
        };
        if from > to {
            return Ok(());
        }
        let listing: Vec<String> = self
            .source
            .range(from..=to)
            .map(|(number, text)| format!("{} {}", number, text))
            .collect();
        for line in listing {
            self.screen.print(&line);
            self.screen.newline();
        }
        Ok(())
    }

    fn del(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        let from = self.expr(tokens, pos)?.number()?.max(0.0) as u16;
        let to = if self.peek_token(tokens, *pos) == &Token::Comma {
            *pos += 1;
            self.expr(tokens, pos)?.number()?.max(0.0) as u16
        } else {
            from
        };
        if from > to {
            return Ok(());
        }
        let doomed: Vec<u16> = self.source.range(from..=to).map(|(n, _)| *n).collect();
        for number in doomed {
            self.source.remove(&number);
        }
        self.lines = self.source.keys().copied().collect();
        self.cont = None;
        Ok(())
    }

    fn save(&mut self, tokens: &[Token], pos: &mut usize) -> Result<()> {
        let name = self.expr(tokens, pos)?.string()?;
        let listing: Vec<String> = self
            .source
            .iter()
            .map(|(number, text)| format!("{} {}", number, text))
            .collect();
        self.disk
            .save(&name, &listing)
            .map_err(|error| Error::from_io(&error))
    }

    fn load(&mut self, tokens: &[Token], pos: &mut usize) -> Result<Flow> {
        let name = self.expr(tokens, pos)?.string()?;
        let listing = match self.disk.load(&name) {
            Ok(Some(listing)) => listing,
            Ok(None) => return Err(error!(FileNotFound)),
            Err(error) => return Err(Error::from_io(&error)),
        };
        self.new_program();
        for line in listing {
            let line = line.trim_end();
            if !line.is_empty() {
                self.parse_and_store(line)?;
            }
        }
        Ok(Flow::End)
    }

    // ----- state management -----

    /// What RUN and CLEAR reset. The program store, user functions, and
    /// memory survive.
    fn clear_state(&mut self) {
        self.vars.clear();
        self.arrays.clear();
        self.for_stack.clear();
        self.gosub_stack.clear();
        self.data_pos = 0;
    }

    fn new_program(&mut self) {
        self.source.clear();
        self.lines.clear();
        self.functions.clear();
        self.data.clear();
        self.clear_state();
        self.program_index = 0;
        self.cont = None;
    }

    /// Rebuilds the DATA pool from every stored line, in line order.
    fn rebuild_data(&mut self) -> Result<()> {
        self.data.clear();
        self.data_pos = 0;
        for (number, text) in &self.source {
            let tokens =
                lex(text).map_err(|error| error.in_line_number(Some(*number)))?;
            if tokens.iter().any(|t| t == &Token::Word(Word::Data)) {
                harvest_data(text, &mut self.data);
            }
        }
        Ok(())
    }
}

/// Pulls DATA items out of the raw text of one line. Items run from just
/// past each `DATA` keyword to a `:` outside quotes; commas outside
/// quotes separate them.
fn harvest_data(text: &str, pool: &mut Vec<String>) {
    let upper = text.to_ascii_uppercase();
    let mut in_quotes = false;
    let mut prev: Option<char> = None;
    let mut i = 0;
    while i < upper.len() {
        let ch = upper[i..].chars().next().unwrap();
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if !in_quotes && upper[i..].starts_with("DATA") {
            let before_ok = prev.map_or(true, |c| !c.is_ascii_alphanumeric());
            let after = upper[i + 4..].chars().next();
            let after_ok = !matches!(after, Some(c) if c.is_ascii_alphanumeric());
            if before_ok && after_ok {
                i += 4 + data_items(&text[i + 4..], pool);
                prev = Some(':');
                continue;
            }
        }
        prev = Some(ch);
        i += ch.len_utf8();
    }
}

/// Splits one DATA segment into items, returning how much text it
/// consumed (through the terminating `:` if present).
fn data_items(text: &str, pool: &mut Vec<String>) -> usize {
    let mut item = String::new();
    let mut in_quotes = false;
    let mut consumed = text.len();
    for (i, ch) in text.char_indices() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                item.push(ch);
            }
            ',' if !in_quotes => {
                pool.push(finish_item(&item));
                item.clear();
            }
            ':' if !in_quotes => {
                consumed = i + 1;
                break;
            }
            _ => item.push(ch),
        }
    }
    pool.push(finish_item(&item));
    consumed
}

fn finish_item(item: &str) -> String {
    let item = item.trim();
    if item.len() >= 2 && item.starts_with('"') && item.ends_with('"') {
        item[1..item.len() - 1].to_string()
    } else {
        item.to_string()
    }
}

impl Context for Interpreter {
    fn variable(&mut self, ident: &Ident) -> Val {
        match self.vars.get(ident.as_str()) {
            Some(value) => value.clone(),
            None => {
                if ident.is_string() {
                    Val::String(String::new())
                } else {
                    Val::Number(0.0)
                }
            }
        }
    }

    fn array_element(&mut self, ident: &Ident, indices: &[f64]) -> Result<Val> {
        Ok(self.array_slot(ident, indices)?.clone())
    }

    fn random(&mut self, arg: f64) -> f64 {
        if arg < 0.0 {
            self.rng = StdRng::seed_from_u64(arg.to_bits());
        }
        self.rng.gen::<f64>()
    }

    fn peek(&mut self, addr: f64) -> Result<f64> {
        if addr < 0.0 || addr >= MEMORY_SIZE as f64 {
            return Err(error!(IllegalQuantity));
        }
        Ok(self.memory[addr as usize] as f64)
    }

    fn cursor_column(&mut self) -> usize {
        self.screen.column()
    }

    /// FN invocation: bind the parameter, evaluate the captured body in a
    /// fresh evaluator, restore the parameter. The parameter is an
    /// ordinary variable, so the restore hides any transient write.
    fn call_function(&mut self, name: &str, arg: Val) -> Result<Val> {
        let function = match self.functions.get(name) {
            Some(function) => function.clone(),
            None => return Err(error!(UndefdFunction; &format!("FN{}", name))),
        };
        let saved = self.vars.get(&function.param).cloned();
        self.set_var(&function.param, arg)?;
        let result = eval::evaluate(&function.body, 0, self).map(|(value, _)| value);
        match saved {
            Some(value) => {
                self.vars.insert(function.param, value);
            }
            None => {
                self.vars.remove(&function.param);
            }
        }
        result
    }
}

impl Interpreter {
    /// Fetches (auto-creating if needed) the element slot for an array
    /// reference. First touch fixes the rank: one axis per index given.
    fn array_slot(&mut self, ident: &Ident, indices: &[f64]) -> Result<&mut Val> {
        let name = ident.as_str();
        if !self.arrays.contains_key(name) {
            let dims = vec![11; indices.len()];
            self.arrays
                .insert(name.to_string(), Array::new(dims, ident.is_string()));
        }
        let array = self.arrays.get_mut(name).unwrap();
        let offset = array.offset(indices)?;
        Ok(&mut array.values[offset])
    }
}
