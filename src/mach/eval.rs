use super::val::{self, Val};
use crate::error;
use crate::lang::token::{Func, Literal, Operator, Token, Word};
use crate::lang::{Error, Ident};

type Result<T> = std::result::Result<T, Error>;

/// Everything the evaluator needs from the machine it runs inside.
/// Keeping this a narrow trait avoids an ownership knot with the
/// interpreter and lets the evaluator run against a mock in tests.
pub trait Context {
    fn variable(&mut self, ident: &Ident) -> Val;
    fn array_element(&mut self, ident: &Ident, indices: &[f64]) -> Result<Val>;
    fn random(&mut self, arg: f64) -> f64;
    fn peek(&mut self, addr: f64) -> Result<f64>;
    fn cursor_column(&mut self) -> usize;
    fn call_function(&mut self, name: &str, arg: Val) -> Result<Val>;
}

/// Evaluates one expression starting at `pos`. Returns the value and the
/// position of the first token it did not consume.
pub fn evaluate(tokens: &[Token], pos: usize, context: &mut dyn Context) -> Result<(Val, usize)> {
    let mut evaluator = Evaluator {
        tokens,
        pos,
        context,
    };
    let val = evaluator.expression()?;
    Ok((val, evaluator.pos))
}

static END_OF_LINE: Token = Token::EndOfLine;

struct Evaluator<'a> {
    tokens: &'a [Token],
    pos: usize,
    context: &'a mut dyn Context,
}

impl<'a> Evaluator<'a> {
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&END_OF_LINE)
    }

    fn advance(&mut self) -> &Token {
        let token = self.tokens.get(self.pos).unwrap_or(&END_OF_LINE);
        self.pos += 1;
        token
    }

    fn expect(&mut self, token: &Token, what: &str) -> Result<()> {
        if self.peek() == token {
            self.pos += 1;
            Ok(())
        } else {
            Err(error!(SyntaxError; &format!("EXPECTED {}", what)))
        }
    }

    // Precedence levels, loosest first. Each level owns its operators and
    // defers to the next tighter one.

    fn expression(&mut self) -> Result<Val> {
        self.or_expr()
    }

    fn or_expr(&mut self) -> Result<Val> {
        let mut lhs = self.and_expr()?;
        while self.peek() == &Token::Operator(Operator::Or) {
            self.pos += 1;
            let l = lhs.number()?;
            let r = self.and_expr()?.number()?;
            lhs = Val::from_bool(l != 0.0 || r != 0.0);
        }
        Ok(lhs)
    }

    fn and_expr(&mut self) -> Result<Val> {
        let mut lhs = self.not_expr()?;
        while self.peek() == &Token::Operator(Operator::And) {
            self.pos += 1;
            let l = lhs.number()?;
            let r = self.not_expr()?.number()?;
            lhs = Val::from_bool(l != 0.0 && r != 0.0);
        }
        Ok(lhs)
    }

    fn not_expr(&mut self) -> Result<Val> {
        if self.peek() == &Token::Operator(Operator::Not) {
            self.pos += 1;
            let v = self.not_expr()?.number()?;
            return Ok(Val::from_bool(v == 0.0));
        }
        self.comparison()
    }

    fn comparison(&mut self) -> Result<Val> {
        let mut lhs = self.addition()?;
        loop {
            let op = match self.peek() {
                Token::Operator(op @ Operator::Equal)
                | Token::Operator(op @ Operator::NotEqual)
                | Token::Operator(op @ Operator::Less)
                | Token::Operator(op @ Operator::LessEqual)
                | Token::Operator(op @ Operator::Greater)
                | Token::Operator(op @ Operator::GreaterEqual) => *op,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.addition()?;
            lhs = Val::compare(op, lhs, rhs)?;
        }
    }

    fn addition(&mut self) -> Result<Val> {
        let mut lhs = self.multiplication()?;
        loop {
            match self.peek() {
                Token::Operator(Operator::Plus) => {
                    self.pos += 1;
                    lhs = Val::add(lhs, self.multiplication()?)?;
                }
                Token::Operator(Operator::Minus) => {
                    self.pos += 1;
                    lhs = Val::subtract(lhs, self.multiplication()?)?;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn multiplication(&mut self) -> Result<Val> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek() {
                Token::Operator(Operator::Multiply) => {
                    self.pos += 1;
                    lhs = Val::multiply(lhs, self.unary()?)?;
                }
                Token::Operator(Operator::Divide) => {
                    self.pos += 1;
                    lhs = Val::divide(lhs, self.unary()?)?;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn unary(&mut self) -> Result<Val> {
        match self.peek() {
            Token::Operator(Operator::Plus) => {
                self.pos += 1;
                self.unary()
            }
            Token::Operator(Operator::Minus) => {
                self.pos += 1;
                Val::neg(self.unary()?)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Val> {
        let base = self.atom()?;
        if self.peek() == &Token::Operator(Operator::Caret) {
            self.pos += 1;
            // Right operand reparses at the unary level: 2^3^2 is 2^(3^2)
            // and 2^-3 works without parentheses.
            let exp = self.unary()?;
            return Val::power(base, exp);
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Val> {
        match self.advance().clone() {
            Token::Literal(Literal::Number(n)) => Ok(Val::Number(n)),
            Token::Literal(Literal::String(s)) => Ok(Val::String(s)),
            Token::LParen => {
                let val = self.expression()?;
                self.expect(&Token::RParen, ")")?;
                Ok(val)
            }
            Token::Word(Word::Fn) => self.user_function(),
            Token::Func(func) => self.function(func),
            Token::Ident(ident) => {
                if self.peek() == &Token::LParen {
                    let indices = self.indices()?;
                    self.context.array_element(&ident, &indices)
                } else {
                    Ok(self.context.variable(&ident))
                }
            }
            _ => Err(error!(SyntaxError)),
        }
    }

    fn indices(&mut self) -> Result<Vec<f64>> {
        self.expect(&Token::LParen, "(")?;
        let mut indices = vec![self.expression()?.number()?];
        while self.peek() == &Token::Comma {
            self.pos += 1;
            indices.push(self.expression()?.number()?);
        }
        self.expect(&Token::RParen, ")")?;
        Ok(indices)
    }

    fn user_function(&mut self) -> Result<Val> {
        let name = match self.advance().clone() {
            Token::Ident(ident) => ident.as_str().to_string(),
            _ => return Err(error!(SyntaxError; "EXPECTED FUNCTION NAME")),
        };
        self.expect(&Token::LParen, "(")?;
        let arg = self.expression()?;
        self.expect(&Token::RParen, ")")?;
        self.context.call_function(&name, arg)
    }

    fn function(&mut self, func: Func) -> Result<Val> {
        use Func::*;
        self.expect(&Token::LParen, "(")?;
        let val = match func {
            Abs => val::Val::Number(self.expression()?.number()?.abs()),
            Atn => val::Val::Number(self.expression()?.number()?.atan()),
            Cos => val::Val::Number(self.expression()?.number()?.cos()),
            Exp => val::Val::Number(self.expression()?.number()?.exp()),
            Int => val::Val::Number(self.expression()?.number()?.floor()),
            Sin => val::Val::Number(self.expression()?.number()?.sin()),
            Tan => val::Val::Number(self.expression()?.number()?.tan()),
            Sgn => {
                let x = self.expression()?.number()?;
                val::Val::Number(if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    0.0
                })
            }
            Sqr => {
                let x = self.expression()?.number()?;
                if x < 0.0 {
                    return Err(error!(IllegalQuantity));
                }
                val::Val::Number(x.sqrt())
            }
            Log => {
                let x = self.expression()?.number()?;
                if x <= 0.0 {
                    return Err(error!(IllegalQuantity));
                }
                val::Val::Number(x.ln())
            }
            Rnd => {
                let x = self.expression()?.number()?;
                val::Val::Number(self.context.random(x))
            }
            Peek => {
                let x = self.expression()?.number()?;
                val::Val::Number(self.context.peek(x)?)
            }
            Pos => {
                self.expression()?.number()?;
                val::Val::Number(self.context.cursor_column() as f64)
            }
            Len => val::Val::Number(self.expression()?.string()?.chars().count() as f64),
            Func::Val => val::Val::Number(val::parse_number(&self.expression()?.string()?)),
            Str => val::Val::String(val::str_format(self.expression()?.number()?)),
            Chr => {
                let x = self.expression()?.number()?;
                if x < 0.0 {
                    return Err(error!(IllegalQuantity));
                }
                match std::char::from_u32(x as u32) {
                    Some(c) => val::Val::String(c.to_string()),
                    None => return Err(error!(IllegalQuantity)),
                }
            }
            Asc => {
                let s = self.expression()?.string()?;
                match s.chars().next() {
                    Some(c) => val::Val::Number(c as u32 as f64),
                    None => return Err(error!(IllegalQuantity)),
                }
            }
            Left => {
                let (s, n) = self.string_and_count()?;
                val::Val::String(s.chars().take(n).collect())
            }
            Right => {
                let (s, n) = self.string_and_count()?;
                let len = s.chars().count();
                val::Val::String(s.chars().skip(len.saturating_sub(n)).collect())
            }
            Mid => {
                let s = self.expression()?.string()?;
                self.expect(&Token::Comma, ",")?;
                let start = (self.expression()?.number()? as i64).max(1) as usize;
                let len = if self.peek() == &Token::Comma {
                    self.pos += 1;
                    (self.expression()?.number()?.max(0.0)) as usize
                } else {
                    usize::MAX
                };
                val::Val::String(s.chars().skip(start - 1).take(len).collect())
            }
            Tab => {
                let n = self.expression()?.number()?.max(0.0) as usize;
                let column = self.context.cursor_column();
                let target = n.saturating_sub(1);
                val::Val::String(" ".repeat(target.saturating_sub(column)))
            }
            Spc => {
                let n = self.expression()?.number()?.max(0.0) as usize;
                val::Val::String(" ".repeat(n))
            }
        };
        self.expect(&Token::RParen, ")")?;
        Ok(val)
    }

    fn string_and_count(&mut self) -> Result<(String, usize)> {
        let s = self.expression()?.string()?;
        self.expect(&Token::Comma, ",")?;
        let n = self.expression()?.number()?;
        if n < 0.0 {
            return Err(error!(IllegalQuantity));
        }
        Ok((s, n as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::lex;

    #[derive(Default)]
    struct MockContext {
        column: usize,
    }

    impl Context for MockContext {
        fn variable(&mut self, ident: &Ident) -> Val {
            match ident.as_str() {
                "X" => Val::Number(10.0),
                "A$" => Val::String("HELLO".to_string()),
                name => {
                    if name.ends_with('$') {
                        Val::String(String::new())
                    } else {
                        Val::Number(0.0)
                    }
                }
            }
        }

        fn array_element(&mut self, _ident: &Ident, indices: &[f64]) -> Result<Val> {
            Ok(Val::Number(indices.iter().sum()))
        }

        fn random(&mut self, _arg: f64) -> f64 {
            0.25
        }

        fn peek(&mut self, addr: f64) -> Result<f64> {
            Ok(addr)
        }

        fn cursor_column(&mut self) -> usize {
            self.column
        }

        fn call_function(&mut self, _name: &str, arg: Val) -> Result<Val> {
            Val::multiply(arg.clone(), arg)
        }
    }

    fn eval(s: &str) -> Val {
        let tokens = lex(s).unwrap();
        let mut context = MockContext::default();
        let (val, _) = evaluate(&tokens, 0, &mut context).unwrap();
        val
    }

    fn eval_err(s: &str) -> Error {
        let tokens = lex(s).unwrap();
        let mut context = MockContext::default();
        evaluate(&tokens, 0, &mut context).unwrap_err()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1+2*3"), Val::Number(7.0));
        assert_eq!(eval("(1+2)*3"), Val::Number(9.0));
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(eval("2^3^2"), Val::Number(512.0));
        assert_eq!(eval("2^-2"), Val::Number(0.25));
    }

    #[test]
    fn test_unary_minus_binds_looser_than_power() {
        assert_eq!(eval("-2^2"), Val::Number(-4.0));
    }

    #[test]
    fn test_logic() {
        assert_eq!(eval("1 AND 2"), Val::Number(1.0));
        assert_eq!(eval("0 OR 0"), Val::Number(0.0));
        assert_eq!(eval("NOT 0"), Val::Number(1.0));
        assert_eq!(eval("NOT 5"), Val::Number(0.0));
    }

    #[test]
    fn test_string_compare_is_ordinal() {
        assert_eq!(eval("\"APPLE\" < \"BANANA\""), Val::Number(1.0));
        assert_eq!(eval("\"A\" = \"A\""), Val::Number(1.0));
    }

    #[test]
    fn test_variable_and_array_reads_delegate() {
        assert_eq!(eval("X*2"), Val::Number(20.0));
        assert_eq!(eval("A(2,3)"), Val::Number(5.0));
        assert_eq!(eval("A$"), Val::String("HELLO".to_string()));
    }

    #[test]
    fn test_builtins() {
        assert_eq!(eval("ABS(-3)"), Val::Number(3.0));
        assert_eq!(eval("INT(2.7)"), Val::Number(2.0));
        assert_eq!(eval("INT(-2.7)"), Val::Number(-3.0));
        assert_eq!(eval("SGN(-9)"), Val::Number(-1.0));
        assert_eq!(eval("LEN(\"ABC\")"), Val::Number(3.0));
        assert_eq!(eval("VAL(\"12AB\")"), Val::Number(12.0));
        assert_eq!(eval("CHR$(65)"), Val::String("A".to_string()));
        assert_eq!(eval("ASC(\"A\")"), Val::Number(65.0));
        assert_eq!(eval("LEFT$(\"APPLE\",2)"), Val::String("AP".to_string()));
        assert_eq!(eval("RIGHT$(\"APPLE\",2)"), Val::String("LE".to_string()));
        assert_eq!(eval("MID$(\"APPLE\",2,3)"), Val::String("PPL".to_string()));
        assert_eq!(eval("MID$(\"APPLE\",4)"), Val::String("LE".to_string()));
        assert_eq!(eval("STR$(42)"), Val::String("42 ".to_string()));
        assert_eq!(eval("RND(1)"), Val::Number(0.25));
        assert_eq!(eval("PEEK(768)"), Val::Number(768.0));
    }

    #[test]
    fn test_user_function_delegates() {
        assert_eq!(eval("FN SQ(7)"), Val::Number(49.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval_err("1/0").to_string(), "?DIVISION BY ZERO ERROR");
    }

    #[test]
    fn test_asc_of_empty() {
        assert_eq!(eval_err("ASC(\"\")").to_string(), "?ILLEGAL QUANTITY ERROR");
    }

    #[test]
    fn test_missing_paren() {
        assert_eq!(eval_err("(1+2").to_string(), "?SYNTAX ERROR: EXPECTED )");
    }

    #[test]
    fn test_missing_comma() {
        assert_eq!(
            eval_err("LEFT$(\"A\" 2)").to_string(),
            "?SYNTAX ERROR: EXPECTED ,"
        );
    }
}
