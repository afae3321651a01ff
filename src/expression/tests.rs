//! Tests for the expression module

use super::*;
use crate::implicant::Implicant;
use crate::table::{TruthTable, Value};
use std::collections::HashMap;

fn labels(names: &[&str]) -> Vec<Arc<str>> {
    names.iter().map(|n| Arc::from(*n)).collect()
}

#[test]
fn test_operator_spellings_are_equivalent() {
    let forms = [
        "~A & B + C",
        "!A && B || C",
        "~A * B | C",
        "(~A & B) + (C)",
        "!A*B+C",
    ];
    let reference = BoolExpr::parse(forms[0]).unwrap();
    for form in &forms[1..] {
        let expr = BoolExpr::parse(form).unwrap();
        assert!(expr.equivalent_to(&reference), "{} differs", form);
    }
}

#[test]
fn test_precedence() {
    // AND binds tighter than OR, NOT tighter than AND
    let expr = BoolExpr::parse("A + B & C").unwrap();
    assert_eq!(expr.truth_vector(&labels(&["A", "B", "C"])), {
        (0..8u32)
            .map(|i| (i & 4 != 0) || ((i & 2 != 0) && (i & 1 != 0)))
            .collect::<Vec<_>>()
    });
    assert_eq!(BoolExpr::parse("~A & B").unwrap().to_string(), "~A * B");
    assert_eq!(BoolExpr::parse("~(A & B)").unwrap().to_string(), "~(A * B)");
}

#[test]
fn test_constants() {
    assert_eq!(BoolExpr::parse("0").unwrap().as_constant(), Some(false));
    assert_eq!(BoolExpr::parse("1").unwrap().as_constant(), Some(true));
    assert_eq!(BoolExpr::parse("true").unwrap().as_constant(), Some(true));
    assert!(BoolExpr::parse("A & 1").unwrap().as_constant().is_none());
    assert!(BoolExpr::parse("A + 1")
        .unwrap()
        .truth_vector(&["A"])
        .iter()
        .all(|&v| v));
}

#[test]
fn test_identifiers() {
    let expr = BoolExpr::parse("sel_0 & ~en2").unwrap();
    let vars: Vec<String> = expr
        .collect_variables()
        .iter()
        .map(|v| v.to_string())
        .collect();
    assert_eq!(vars, vec!["en2", "sel_0"]);
}

#[test]
fn test_evaluate_with_assignment() {
    let expr = BoolExpr::parse("A & ~B").unwrap();
    let mut assignment = HashMap::new();
    assignment.insert(Arc::from("A"), true);
    assert!(expr.evaluate(&assignment));
    assignment.insert(Arc::from("B"), true);
    assert!(!expr.evaluate(&assignment));
}

#[test]
fn test_evaluate_index_msb_first() {
    let expr = BoolExpr::parse("A & ~B").unwrap();
    let names = labels(&["A", "B"]);
    // index = 2A + B
    assert_eq!(expr.truth_vector(&names), vec![false, false, true, false]);
    assert!(expr.evaluate_index(&names, 2));
}

#[test]
fn test_syntax_errors() {
    let err = BoolExpr::parse("A & & B").unwrap_err();
    match err {
        ParseBoolExprError::Parse(ExpressionParseError::UnexpectedToken { position, .. }) => {
            assert_eq!(position, 4)
        }
        other => panic!("unexpected error {:?}", other),
    }

    assert!(matches!(
        BoolExpr::parse("A +").unwrap_err(),
        ParseBoolExprError::Parse(ExpressionParseError::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        BoolExpr::parse("A $ B").unwrap_err(),
        ParseBoolExprError::Parse(ExpressionParseError::InvalidToken { position: 2, .. })
    ));
    assert!(BoolExpr::parse("").is_err());
    assert!(BoolExpr::parse("(A").is_err());
}

#[test]
fn test_parse_over_rejects_unknown_names() {
    let err = BoolExpr::parse_over("A & C", &["A", "B"]).unwrap_err();
    assert_eq!(
        err,
        ParseBoolExprError::UnknownVariable {
            name: Arc::from("C")
        }
    );
}

#[test]
fn test_from_sop_and_pos() {
    let names = ["A", "B"];
    let cover: Vec<Implicant> = vec!["00".parse().unwrap(), "11".parse().unwrap()];
    let sop = BoolExpr::from_sop(&cover, &names);
    assert_eq!(sop.truth_vector(&names), vec![true, false, false, true]);

    // The same cover read as a zero-set gives the complement
    let pos = BoolExpr::from_pos(&cover, &names);
    assert_eq!(pos.truth_vector(&names), vec![false, true, true, false]);

    assert_eq!(BoolExpr::from_sop(&[], &names).as_constant(), Some(false));
    assert_eq!(BoolExpr::from_pos(&[], &names).as_constant(), Some(true));
    assert_eq!(
        BoolExpr::from_product(&Implicant::universe(2), &names).as_constant(),
        Some(true)
    );
}

#[test]
fn test_mismatches_skip_dont_cares() {
    let table = TruthTable::from_values(2, &[Value::False, Value::DontCare, Value::False, Value::True])
        .unwrap();
    assert!(BoolExpr::parse("B").unwrap().mismatches(&table).is_empty());
    assert_eq!(BoolExpr::parse("A").unwrap().mismatches(&table), vec![2]);
}
