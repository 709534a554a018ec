use applesoft::lang::token::{Func, Ident, Literal, Operator, Token, Word};
use applesoft::lang::lex;

#[test]
fn test_always_ends_with_end_of_line() {
    let tokens = lex("PRINT 1").unwrap();
    assert_eq!(tokens.last(), Some(&Token::EndOfLine));
    let tokens = lex("").unwrap();
    assert_eq!(tokens, vec![Token::EndOfLine]);
}

#[test]
fn test_two_char_operators() {
    let tokens = lex("1<=2<>3>=4").unwrap();
    let mut x = tokens.iter();
    assert_eq!(x.next(), Some(&Token::Literal(Literal::Number(1.0))));
    assert_eq!(x.next(), Some(&Token::Operator(Operator::LessEqual)));
    assert_eq!(x.next(), Some(&Token::Literal(Literal::Number(2.0))));
    assert_eq!(x.next(), Some(&Token::Operator(Operator::NotEqual)));
    assert_eq!(x.next(), Some(&Token::Literal(Literal::Number(3.0))));
    assert_eq!(x.next(), Some(&Token::Operator(Operator::GreaterEqual)));
    assert_eq!(x.next(), Some(&Token::Literal(Literal::Number(4.0))));
    assert_eq!(x.next(), Some(&Token::EndOfLine));
    assert_eq!(x.next(), None);
}

#[test]
fn test_question_mark_is_print() {
    let tokens = lex("?1").unwrap();
    assert_eq!(tokens[0], Token::Word(Word::Print));
    assert_eq!(tokens[1], Token::Literal(Literal::Number(1.0)));
}

#[test]
fn test_keywords_are_case_insensitive() {
    let tokens = lex("for i = 1 to 3 step 2").unwrap();
    let mut x = tokens.iter();
    assert_eq!(x.next(), Some(&Token::Word(Word::For)));
    assert_eq!(x.next(), Some(&Token::Ident(Ident::Plain("I".to_string()))));
    assert_eq!(x.next(), Some(&Token::Operator(Operator::Equal)));
    assert_eq!(x.next(), Some(&Token::Literal(Literal::Number(1.0))));
    assert_eq!(x.next(), Some(&Token::Word(Word::To)));
}

#[test]
fn test_number_forms() {
    assert_eq!(lex(".5").unwrap()[0], Token::Literal(Literal::Number(0.5)));
    assert_eq!(
        lex("1E3").unwrap()[0],
        Token::Literal(Literal::Number(1000.0))
    );
    assert_eq!(
        lex("2.5E-1").unwrap()[0],
        Token::Literal(Literal::Number(0.25))
    );
    assert_eq!(
        lex("12.75").unwrap()[0],
        Token::Literal(Literal::Number(12.75))
    );
}

#[test]
fn test_exponent_needs_digits() {
    // "1 E" is a number then a variable, not a malformed exponent.
    let tokens = lex("1E").unwrap();
    assert_eq!(tokens[0], Token::Literal(Literal::Number(1.0)));
    assert_eq!(tokens[1], Token::Ident(Ident::Plain("E".to_string())));
}

#[test]
fn test_string_literal() {
    let tokens = lex("\"HELLO, WORLD: YES\"").unwrap();
    assert_eq!(
        tokens[0],
        Token::Literal(Literal::String("HELLO, WORLD: YES".to_string()))
    );
}

#[test]
fn test_unterminated_string_runs_to_end_of_line() {
    let tokens = lex("\"NO CLOSE").unwrap();
    assert_eq!(
        tokens[0],
        Token::Literal(Literal::String("NO CLOSE".to_string()))
    );
}

#[test]
fn test_sigil_terminates_identifier() {
    let tokens = lex("A1$B").unwrap();
    assert_eq!(tokens[0], Token::Ident(Ident::String("A1$".to_string())));
    assert_eq!(tokens[1], Token::Ident(Ident::Plain("B".to_string())));
}

#[test]
fn test_sigil_function_names() {
    assert_eq!(lex("LEFT$").unwrap()[0], Token::Func(Func::Left));
    assert_eq!(lex("STR$").unwrap()[0], Token::Func(Func::Str));
    assert_eq!(lex("CHR$").unwrap()[0], Token::Func(Func::Chr));
}

#[test]
fn test_rem_swallows_line() {
    let tokens = lex("REM: GOTO 10").unwrap();
    assert_eq!(tokens[0], Token::Rem(": GOTO 10".to_string()));
    assert_eq!(tokens[1], Token::EndOfLine);
}

#[test]
fn test_unknown_word_is_identifier() {
    let tokens = lex("GOTO10").unwrap();
    assert_eq!(tokens[0], Token::Ident(Ident::Plain("GOTO10".to_string())));
}

#[test]
fn test_unexpected_character() {
    let error = lex("PRINT #1").unwrap_err();
    assert_eq!(error.to_string(), "?SYNTAX ERROR: UNEXPECTED CHARACTER");
}
