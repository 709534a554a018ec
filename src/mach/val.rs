use crate::error;
use crate::lang::Error;
use crate::lang::token::Operator;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime values
///
/// Every Applesoft value is a double or a string. The sigil on a name
/// decides which one a variable holds; expressions never convert between
/// the two implicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(String),
}

impl Val {
    pub fn from_bool(b: bool) -> Val {
        Val::Number(if b { 1.0 } else { 0.0 })
    }

    pub fn number(&self) -> Result<f64> {
        match self {
            Val::Number(n) => Ok(*n),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn string(self) -> Result<String> {
        match self {
            Val::String(s) => Ok(s),
            Val::Number(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn neg(val: Val) -> Result<Val> {
        Ok(Val::Number(-val.number()?))
    }

    /// `+` concatenates when either side is a string; a numeric side joins
    /// in its PRINT form.
    pub fn add(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(l + r)),
            (String(l), String(r)) => Ok(String(l + &r)),
            (String(l), Number(r)) => Ok(String(l + &format_number(r))),
            (Number(l), String(r)) => Ok(String(format_number(l) + &r)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.number()? - rhs.number()?))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.number()? * rhs.number()?))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let divisor = rhs.number()?;
        if divisor == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Number(lhs.number()? / divisor))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        let base = lhs.number()?;
        let exp = rhs.number()?;
        if base < 0.0 && exp.fract() != 0.0 {
            return Err(error!(IllegalQuantity));
        }
        Ok(Val::Number(base.powf(exp)))
    }

    /// Comparisons yield exactly 0 or 1. Two strings compare by ordinal
    /// order; two numbers by IEEE rules; anything mixed is a mismatch.
    pub fn compare(op: Operator, lhs: Val, rhs: Val) -> Result<Val> {
        use std::cmp::Ordering;
        let ordering = match (&lhs, &rhs) {
            (Val::String(l), Val::String(r)) => l.cmp(r),
            (Val::Number(l), Val::Number(r)) => match l.partial_cmp(r) {
                Some(ordering) => ordering,
                None => return Ok(Val::from_bool(op == Operator::NotEqual)),
            },
            _ => return Err(error!(TypeMismatch)),
        };
        let result = match op {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::Less => ordering == Ordering::Less,
            Operator::LessEqual => ordering != Ordering::Greater,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::GreaterEqual => ordering != Ordering::Less,
            _ => return Err(error!(SyntaxError)),
        };
        Ok(Val::from_bool(result))
    }

    /// The text PRINT emits for this value.
    pub fn print_format(&self) -> String {
        match self {
            Val::String(s) => s.clone(),
            Val::Number(n) => format_number(*n),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::String(s) => write!(f, "{}", s),
            Val::Number(n) => write!(f, "{}", n),
        }
    }
}

/// The PRINT rule: a space for the missing sign of a non-negative number,
/// integer form below 1e10, up to nine significant digits otherwise, and a
/// trailing space.
pub fn format_number(x: f64) -> String {
    let sign = if x < 0.0 { "-" } else { " " };
    let mag = x.abs();
    let body = if mag < 1e10 && mag.fract() == 0.0 {
        format!("{}", mag as u64)
    } else {
        significant(mag)
    };
    format!("{}{} ", sign, body)
}

/// `STR$` form: the PRINT form without the leading sign column.
pub fn str_format(x: f64) -> String {
    let s = format_number(x);
    match s.strip_prefix(' ') {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}

fn significant(mag: f64) -> String {
    if mag == 0.0 {
        return "0".to_string();
    }
    let exp = mag.log10().floor() as i32;
    if !(-5..9).contains(&exp) {
        let mantissa = mag / 10f64.powi(exp);
        let mantissa = round_digits(mantissa, 8);
        return format!("{}E{}{:02}", mantissa, if exp < 0 { "-" } else { "+" }, exp.abs());
    }
    format!("{}", round_digits(mag, 8 - exp))
}

fn round_digits(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

/// Parses the longest leading number, the way VAL and INPUT convert text.
/// No usable prefix yields 0.
pub fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
        }
    }
    if seen_digit && end < bytes.len() && (bytes[end] == b'E' || bytes[end] == b'e') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        if exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            end = exp_end;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}
