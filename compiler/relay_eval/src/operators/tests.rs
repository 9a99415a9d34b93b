use super::*;
use pretty_assertions::assert_eq;

#[test]
fn equality_is_structural() {
    assert_eq!(compare(Comparison::Equal, &Value::Int(14), &Value::Int(14)), Ok(true));
    assert_eq!(
        compare(Comparison::Equal, &Value::from("on"), &Value::from("off")),
        Ok(false)
    );
    assert_eq!(
        compare(Comparison::Equal, &Value::Bool(true), &Value::Bool(true)),
        Ok(true)
    );
}

#[test]
fn equality_across_variants_is_false() {
    assert_eq!(compare(Comparison::Equal, &Value::Int(1), &Value::Float(1.0)), Ok(false));
    assert_eq!(compare(Comparison::Equal, &Value::Int(1), &Value::from("1")), Ok(false));
}

#[test]
fn ordering_on_numbers() {
    assert_eq!(compare(Comparison::Less, &Value::Int(3), &Value::Int(5)), Ok(true));
    assert_eq!(compare(Comparison::Greater, &Value::Int(3), &Value::Int(5)), Ok(false));
    assert_eq!(compare(Comparison::Less, &Value::Int(5), &Value::Int(5)), Ok(false));
    assert_eq!(
        compare(Comparison::Greater, &Value::Float(2.5), &Value::Float(-1.0)),
        Ok(true)
    );
}

#[test]
fn mixed_ordering_widens_the_integer() {
    assert_eq!(compare(Comparison::Less, &Value::Int(2), &Value::Float(2.5)), Ok(true));
    assert_eq!(compare(Comparison::Greater, &Value::Float(2.5), &Value::Int(2)), Ok(true));
}

#[test]
fn nan_is_never_ordered() {
    let nan = Value::Float(f64::NAN);
    assert_eq!(compare(Comparison::Less, &nan, &Value::Int(1)), Ok(false));
    assert_eq!(compare(Comparison::Greater, &nan, &Value::Int(1)), Ok(false));
}

#[test]
fn ordering_non_numbers_is_a_type_error() {
    assert_eq!(
        compare(Comparison::Less, &Value::from("a"), &Value::Int(1)),
        Err(EvalError::NotComparable {
            op: "<",
            left: "string",
            right: "integer",
        })
    );
    assert!(compare(Comparison::Greater, &Value::Bool(true), &Value::Bool(false)).is_err());
}

#[test]
fn tokens_map_to_comparisons() {
    assert_eq!(Comparison::from_token(&Token::Equal), Some(Comparison::Equal));
    assert_eq!(Comparison::from_token(&Token::Greater), Some(Comparison::Greater));
    assert_eq!(Comparison::from_token(&Token::Assign), None);
    assert_eq!(Comparison::Less.symbol(), "<");
}
