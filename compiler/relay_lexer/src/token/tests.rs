use super::*;

#[test]
fn control_flow_keywords() {
    assert_eq!(keyword("if"), Some(Token::If));
    assert_eq!(keyword("else"), Some(Token::Else));
    assert_eq!(keyword("while"), Some(Token::While));
    assert_eq!(keyword("for"), Some(Token::For));
    assert_eq!(keyword("break"), Some(Token::Break));
    assert_eq!(keyword("return"), Some(Token::Return));
}

#[test]
fn definition_keywords_carry_their_kind() {
    assert_eq!(
        keyword("var"),
        Some(Token::VariableDefinition("var".to_string()))
    );
    assert_eq!(
        keyword("let"),
        Some(Token::VariableDefinition("let".to_string()))
    );
}

#[test]
fn boolean_keywords() {
    assert_eq!(keyword("true"), Some(Token::BoolLiteral(true)));
    assert_eq!(keyword("false"), Some(Token::BoolLiteral(false)));
}

#[test]
fn identifiers_are_not_keywords() {
    assert_eq!(keyword("iffy"), None);
    assert_eq!(keyword("runMotor"), None);
    assert_eq!(keyword(""), None);
}

#[test]
fn display_uses_source_spelling() {
    let rendered: Vec<String> = [
        Token::Function("stop".to_string()),
        Token::FunctionWithArguments("print".to_string()),
        Token::BracketOpen,
        Token::StringLiteral("on".to_string()),
        Token::BracketClose,
        Token::Semicolon,
        Token::FloatLiteral(2.0),
        Token::Increment,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(rendered, ["stop()", "print", "(", "\"on\"", ")", ";", "2.0", "++"]);
}

#[test]
fn literal_classification() {
    assert!(Token::IntLiteral(1).is_literal());
    assert!(Token::StringLiteral(String::new()).is_literal());
    assert!(!Token::Variable("x".to_string()).is_literal());
    assert!(!Token::Function("f".to_string()).is_literal());
}
