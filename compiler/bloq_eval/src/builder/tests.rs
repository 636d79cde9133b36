use super::*;
use crate::tests::helpers::{arithmetic, eval, lit};
use bloq_value::{EvalErrorKind, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_single_operand_passthrough() {
    let expr = build(vec![lit("alone")], vec![]).unwrap();
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::string("alone"));
    assert!(format!("{expr:?}").starts_with("Literal"));
}

#[test]
fn test_shape_mismatch() {
    let error = build(vec![], vec![]).unwrap_err();
    assert_eq!(
        error.kind,
        EvalErrorKind::ShapeMismatch {
            operands: 0,
            operators: 0
        }
    );

    let error = build(vec![lit(1i64), lit(2i64)], vec![]).unwrap_err();
    assert_eq!(error.message, "expected 1 operators for 2 operands, found 0");

    let error = build(
        vec![lit(1i64), lit(2i64)],
        vec![ArithmeticOp::Add, ArithmeticOp::Add],
    )
    .unwrap_err();
    assert_eq!(
        error.kind,
        EvalErrorKind::ShapeMismatch {
            operands: 2,
            operators: 2
        }
    );

    let error = build(vec![], vec![ArithmeticOp::Add]).unwrap_err();
    assert!(matches!(error.kind, EvalErrorKind::ShapeMismatch { .. }));
}

#[test]
fn test_multiplication_binds_tighter() {
    // 2 + 3 * 2.0 + 1 * 3 == 2 + (3 * 2.0) + (1 * 3)
    let expr = arithmetic(
        vec![lit(2i64), lit(3i64), lit(2.0), lit(1u64), lit(3u64)],
        vec![
            ArithmeticOp::Add,
            ArithmeticOp::Mul,
            ArithmeticOp::Add,
            ArithmeticOp::Mul,
        ],
    );
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::Float(11.0));
}

#[test]
fn test_division_binds_tighter() {
    // 6 - 6 / 2.0 + 1 == 6 - (6 / 2.0) + 1
    let expr = arithmetic(
        vec![lit(6i64), lit(6i64), lit(2.0), lit(1u64)],
        vec![ArithmeticOp::Sub, ArithmeticOp::Div, ArithmeticOp::Add],
    );
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::Float(4.0));
}

#[test]
fn test_subtraction_is_left_associative() {
    // 10 - 4 - 3 == (10 - 4) - 3
    let expr = arithmetic(
        vec![lit(10i64), lit(4i64), lit(3i64)],
        vec![ArithmeticOp::Sub, ArithmeticOp::Sub],
    );
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::Int(3));

    // 64 / 4 / 2 == (64 / 4) / 2
    let expr = arithmetic(
        vec![lit(64i64), lit(4i64), lit(2i64)],
        vec![ArithmeticOp::Div, ArithmeticOp::Div],
    );
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::Int(8));
}

#[test]
fn test_and_binds_tighter_than_or() {
    let expr = arithmetic(
        vec![lit(true), lit(false), lit(true), lit(false)],
        vec![ArithmeticOp::And, ArithmeticOp::Or, ArithmeticOp::And],
    );
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::Bool(false));

    let expr = arithmetic(
        vec![lit(false), lit(true), lit(true), lit(false)],
        vec![ArithmeticOp::Or, ArithmeticOp::And, ArithmeticOp::Or],
    );
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::Bool(true));

    let expr = arithmetic(
        vec![lit(true), lit(false), lit(true)],
        vec![ArithmeticOp::Or, ArithmeticOp::And],
    );
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::Bool(true));
}

#[test]
fn test_comparison_binds_looser_than_arithmetic() {
    // 1 + 2 == 3 && 4 > 2 * 3  ==  ((1 + 2) == 3) && (4 > (2 * 3))
    let expr = arithmetic(
        vec![lit(1i64), lit(2i64), lit(3i64), lit(4i64), lit(2i64), lit(3i64)],
        vec![
            ArithmeticOp::Add,
            ArithmeticOp::Eq,
            ArithmeticOp::And,
            ArithmeticOp::Gt,
            ArithmeticOp::Mul,
        ],
    );
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::Bool(false));
}

#[test]
fn test_pipe_binds_loosest() {
    // null | 1 + 2 == null | (1 + 2)
    let expr = arithmetic(
        vec![lit(Value::Null), lit(1i64), lit(2i64)],
        vec![ArithmeticOp::Pipe, ArithmeticOp::Add],
    );
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::Int(3));

    // With `|` tighter than `+` this would be `null + 2` and fail.
    let expr = arithmetic(
        vec![lit(1i64), lit(Value::Absent), lit(true)],
        vec![ArithmeticOp::Add, ArithmeticOp::Pipe],
    );
    // (1 + nothing) fails and is swallowed; `true` is the fallback.
    assert_eq!(eval(expr.as_ref()).unwrap(), Value::Bool(true));
}

#[test]
fn test_fold_tier_passes_other_operators_through() {
    let (operands, operators) = fold_tier(
        vec![lit(1i64), lit(2i64), lit(3i64), lit(4i64)],
        vec![ArithmeticOp::Add, ArithmeticOp::Mul, ArithmeticOp::Sub],
        &[ArithmeticOp::Mul],
    );
    assert_eq!(operators, vec![ArithmeticOp::Add, ArithmeticOp::Sub]);
    assert_eq!(operands.len(), 3);
    assert_eq!(eval(operands[1].as_ref()).unwrap(), Value::Int(6));
}
