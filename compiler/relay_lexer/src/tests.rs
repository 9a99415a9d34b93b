use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn var(name: &str) -> Token {
    Token::Variable(name.to_string())
}

fn lex(source: &str) -> Vec<Token> {
    match tokenize(source) {
        Ok(tokens) => tokens,
        Err(e) => panic!("failed to tokenize {source:?}: {e}"),
    }
}

// === Literals ===

#[test]
fn booleans_are_literals_not_identifiers() {
    assert_eq!(lex("true"), [Token::BoolLiteral(true)]);
    assert_eq!(lex("false"), [Token::BoolLiteral(false)]);
}

#[test]
fn integers() {
    assert_eq!(lex("42"), [Token::IntLiteral(42)]);
    assert_eq!(lex("-7"), [Token::IntLiteral(-7)]);
    assert_eq!(lex("00"), [Token::IntLiteral(0)]);
}

#[test]
fn floats_take_precedence_over_integers() {
    assert_eq!(lex("3.25"), [Token::FloatLiteral(3.25)]);
    assert_eq!(lex("-0.5"), [Token::FloatLiteral(-0.5)]);
    assert_eq!(lex("2."), [Token::FloatLiteral(2.0)]);
    assert_eq!(lex(".5"), [Token::FloatLiteral(0.5)]);
}

#[test]
fn single_and_double_quoted_strings() {
    assert_eq!(
        lex("'hello world'"),
        [Token::StringLiteral("hello world".to_string())]
    );
    assert_eq!(
        lex("\"motor-1_on\""),
        [Token::StringLiteral("motor-1_on".to_string())]
    );
    assert_eq!(lex("''"), [Token::StringLiteral(String::new())]);
}

#[test]
fn double_quoted_strings_accept_apostrophes() {
    assert_eq!(
        lex("\"it's on\""),
        [Token::StringLiteral("it's on".to_string())]
    );
}

#[test]
fn string_with_unsupported_character_fails() {
    assert!(tokenize("'a.b'").is_err());
}

// === Calls ===

#[test]
fn zero_argument_call_is_a_single_token() {
    assert_eq!(lex("age()"), [Token::Function("age".to_string())]);
}

#[test]
fn call_with_arguments_yields_synthetic_bracket() {
    assert_eq!(
        lex("age("),
        [
            Token::FunctionWithArguments("age".to_string()),
            Token::BracketOpen
        ]
    );
    assert_eq!(
        lex("print('Starting', 3)"),
        [
            Token::FunctionWithArguments("print".to_string()),
            Token::BracketOpen,
            Token::StringLiteral("Starting".to_string()),
            Token::Comma,
            Token::IntLiteral(3),
            Token::BracketClose,
        ]
    );
}

#[test]
fn keywords_glued_to_brackets_stay_keywords() {
    assert_eq!(
        lex("if(x)"),
        [Token::If, Token::BracketOpen, var("x"), Token::BracketClose]
    );
    assert_eq!(lex("while("), [Token::While, Token::BracketOpen]);
    assert_eq!(lex("for("), [Token::For, Token::BracketOpen]);
}

#[test]
fn keyword_prefix_is_an_identifier() {
    assert_eq!(lex("iffy"), [var("iffy")]);
    assert_eq!(lex("variable"), [var("variable")]);
    assert_eq!(lex("format()"), [Token::Function("format".to_string())]);
}

// === Operators and statements ===

#[test]
fn operators() {
    assert_eq!(
        lex("= == < > && || ++ --"),
        [
            Token::Assign,
            Token::Equal,
            Token::Less,
            Token::Greater,
            Token::And,
            Token::Or,
            Token::Increment,
            Token::Decrement,
        ]
    );
}

#[test]
fn postfix_step_after_variable() {
    assert_eq!(lex("i++"), [var("i"), Token::Increment]);
    assert_eq!(lex("i--"), [var("i"), Token::Decrement]);
}

#[test]
fn if_else_statement() {
    let tokens = lex("var size = 8; if(true) { size = 4; } else { size = 2 }");
    assert_eq!(
        tokens,
        [
            Token::VariableDefinition("var".to_string()),
            var("size"),
            Token::Assign,
            Token::IntLiteral(8),
            Token::Semicolon,
            Token::If,
            Token::BracketOpen,
            Token::BoolLiteral(true),
            Token::BracketClose,
            Token::BlockOpen,
            var("size"),
            Token::Assign,
            Token::IntLiteral(4),
            Token::Semicolon,
            Token::BlockClose,
            Token::Else,
            Token::BlockOpen,
            var("size"),
            Token::Assign,
            Token::IntLiteral(2),
            Token::BlockClose,
        ]
    );
}

#[test]
fn whitespace_and_newlines_are_discarded() {
    assert_eq!(
        lex("\n\tbreak ;\r\n  return\n"),
        [Token::Break, Token::Semicolon, Token::Return]
    );
}

#[test]
fn empty_source_has_no_tokens() {
    assert!(lex("").is_empty());
    assert!(lex("   \n").is_empty());
}

// === Errors ===

#[test]
fn unknown_character_is_a_syntax_error() {
    let err = tokenize("var a = 1;\na = $;").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedInput);
    assert_eq!(err.fragment, "$");
    assert_eq!((err.line, err.column), (2, 5));
}

#[test]
fn overflowing_integer_is_rejected() {
    let err = tokenize("99999999999999999999").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidNumber);
    assert_eq!(err.offset, 0);
}

// === Properties ===

proptest! {
    #[test]
    fn any_integer_lexes_to_itself(n in any::<i64>()) {
        prop_assert_eq!(lex(&n.to_string()), vec![Token::IntLiteral(n)]);
    }

    #[test]
    fn non_keyword_identifiers_are_variables(name in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        prop_assume!(keyword(&name).is_none());
        prop_assert_eq!(lex(&name), vec![Token::Variable(name.clone())]);
    }

    #[test]
    fn whitespace_never_changes_the_token_stream(pad in "[ \t\n]{1,4}") {
        let spaced = format!("x{pad}={pad}1{pad};");
        prop_assert_eq!(lex(&spaced), lex("x=1;"));
    }
}
