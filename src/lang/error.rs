/// Applesoft reports errors as terse uppercase messages. `Error` carries
/// the code, an optional detail, and the line number when one is known.
#[derive(Debug, PartialEq, Clone)]
pub struct Error {
    code: ErrorCode,
    message: Option<String>,
    line: Option<u16>,
}

#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: None,
            line: None,
        }
    }

    pub fn message(mut self, message: &str) -> Error {
        self.message = Some(message.to_string());
        self
    }

    pub fn in_line_number(mut self, line: Option<u16>) -> Error {
        if self.line.is_none() {
            self.line = line;
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn from_io(error: &std::io::Error) -> Error {
        Error::new(ErrorCode::Host).message(&error.to_string().to_ascii_uppercase())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    SyntaxError,
    DivisionByZero,
    IllegalQuantity,
    UndefdStatement,
    UndefdFunction,
    ReturnWithoutGosub,
    NextWithoutFor,
    OutOfData,
    TypeMismatch,
    BadSubscript,
    CantContinue,
    FileNotFound,
    Host,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self.code {
            SyntaxError => "?SYNTAX ERROR",
            DivisionByZero => "?DIVISION BY ZERO ERROR",
            IllegalQuantity => "?ILLEGAL QUANTITY ERROR",
            UndefdStatement => "?UNDEF'D STATEMENT ERROR",
            UndefdFunction => "?UNDEF'D FUNCTION ERROR",
            ReturnWithoutGosub => "?RETURN WITHOUT GOSUB ERROR",
            NextWithoutFor => "?NEXT WITHOUT FOR ERROR",
            OutOfData => "?OUT OF DATA ERROR",
            TypeMismatch => "?TYPE MISMATCH ERROR",
            BadSubscript => "?BAD SUBSCRIPT ERROR",
            CantContinue => "?CAN'T CONTINUE ERROR",
            FileNotFound => "?FILE NOT FOUND",
            Host => "?ERROR",
        };
        write!(f, "{}", s)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(line) = self.line {
            write!(f, " IN {}", line)?;
        }
        Ok(())
    }
}
