/*!
## Language Module

Lexical analysis for Applesoft BASIC: the token set, the keyword table,
and the line lexer.

*/

pub type LineNumber = Option<u16>;
pub trait MaxValue {
    fn max_value() -> u16;
}
impl MaxValue for LineNumber {
    fn max_value() -> u16 {
        63999
    }
}

mod error;
mod ident;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::lex;
