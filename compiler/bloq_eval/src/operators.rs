//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch over already-evaluated operands. The
//! operator and value sets are closed, so pattern matching is preferred over
//! trait objects for exhaustiveness checking.
//!
//! Laziness (`&&`, `||`, `|`) is the node's business: by the time a value
//! pair reaches [`evaluate_binary`] both sides have been computed.

use std::cmp::Ordering;

use bloq_ir::ArithmeticOp;
use bloq_value::{
    divide_by_zero, integer_overflow, type_mismatch, EvalError, EvalResult, Number, Value,
};

/// Operand pair after numeric widening.
#[derive(Copy, Clone, Debug)]
enum Widened {
    Int(i64, i64),
    UInt(u64, u64),
    Float(f64, f64),
}

/// Evaluate a binary operation using direct pattern matching.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Operands are freshly evaluated values; `|` hands one of them back"
)]
pub fn evaluate_binary(left: Value, right: Value, op: ArithmeticOp) -> EvalResult {
    match op {
        ArithmeticOp::Add => eval_add(&left, &right),
        ArithmeticOp::Sub | ArithmeticOp::Mul | ArithmeticOp::Div => {
            eval_arithmetic(&left, &right, op)
        }
        ArithmeticOp::Mod => eval_mod(&left, &right),
        ArithmeticOp::Eq => Ok(Value::Bool(left.equals(&right))),
        ArithmeticOp::Neq => Ok(Value::Bool(!left.equals(&right))),
        ArithmeticOp::Gt | ArithmeticOp::Gte | ArithmeticOp::Lt | ArithmeticOp::Lte => {
            compare(&left, &right, op).map(|ordering| Value::Bool(ordering_holds(op, ordering)))
        }
        ArithmeticOp::And | ArithmeticOp::Or => eval_logical(&left, &right, op),
        ArithmeticOp::Pipe => Ok(if left.is_nil_like() { right } else { left }),
    }
}

/// Name of the operation used in overflow messages.
fn operation_name(op: ArithmeticOp) -> &'static str {
    match op {
        ArithmeticOp::Add => "addition",
        ArithmeticOp::Sub => "subtraction",
        ArithmeticOp::Mul => "multiplication",
        ArithmeticOp::Div => "division",
        _ => "remainder",
    }
}

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith<T>(result: Option<T>, wrap: fn(T) -> Value, op: ArithmeticOp) -> EvalResult {
    result
        .map(wrap)
        .ok_or_else(|| integer_overflow(operation_name(op)))
}

// Numeric widening

/// Apply the widening rules: any float makes both float; an `Int` mixed with
/// a `UInt` keeps the signed representation; two `UInt`s stay unsigned.
fn widen(a: Number, b: Number, op: ArithmeticOp) -> Result<Widened, EvalError> {
    let overflow = || integer_overflow(operation_name(op));
    Ok(match (a, b) {
        (Number::Float(_), _) | (_, Number::Float(_)) => Widened::Float(a.as_f64(), b.as_f64()),
        (Number::Int(x), Number::Int(y)) => Widened::Int(x, y),
        (Number::UInt(x), Number::UInt(y)) => Widened::UInt(x, y),
        (Number::Int(x), Number::UInt(y)) => {
            Widened::Int(x, i64::try_from(y).map_err(|_| overflow())?)
        }
        (Number::UInt(x), Number::Int(y)) => {
            Widened::Int(i64::try_from(x).map_err(|_| overflow())?, y)
        }
    })
}

/// Numeric view of both operands, or a mismatch naming the first operand
/// that is not a number.
fn numeric_pair(
    left: &Value,
    right: &Value,
    op: ArithmeticOp,
) -> Result<(Number, Number), EvalError> {
    match (left.numeric_value(), right.numeric_value()) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, _) => Err(type_mismatch(Some(op), "number", left)),
        (Some(_), None) => Err(type_mismatch(Some(op), "number", right)),
    }
}

// Arithmetic

fn eval_add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::String(a), Value::String(b)) => {
            let mut joined = String::with_capacity(a.len().saturating_add(b.len()));
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::String(joined))
        }
        (Value::String(_), _) => Err(type_mismatch(Some(ArithmeticOp::Add), "string", right)),
        _ if left.is_numeric() => eval_arithmetic(left, right, ArithmeticOp::Add),
        _ => Err(type_mismatch(
            Some(ArithmeticOp::Add),
            "number or string",
            left,
        )),
    }
}

/// `+`, `-`, `*` and `/` over two numbers.
fn eval_arithmetic(left: &Value, right: &Value, op: ArithmeticOp) -> EvalResult {
    let (a, b) = numeric_pair(left, right, op)?;
    if op == ArithmeticOp::Div && b.is_zero() {
        return Err(divide_by_zero());
    }
    match widen(a, b, op)? {
        Widened::Float(x, y) => Ok(Value::Float(eval_float(x, y, op))),
        Widened::Int(x, y) => {
            let result = match op {
                ArithmeticOp::Add => x.checked_add(y),
                ArithmeticOp::Sub => x.checked_sub(y),
                ArithmeticOp::Mul => x.checked_mul(y),
                _ => x.checked_div(y),
            };
            checked_arith(result, Value::Int, op)
        }
        Widened::UInt(x, y) => {
            let result = match op {
                ArithmeticOp::Add => x.checked_add(y),
                ArithmeticOp::Sub => x.checked_sub(y),
                ArithmeticOp::Mul => x.checked_mul(y),
                _ => x.checked_div(y),
            };
            checked_arith(result, Value::UInt, op)
        }
    }
}

fn eval_float(x: f64, y: f64, op: ArithmeticOp) -> f64 {
    match op {
        ArithmeticOp::Add => x + y,
        ArithmeticOp::Sub => x - y,
        ArithmeticOp::Mul => x * y,
        _ => x / y,
    }
}

/// `%` is only defined for integer pairs.
///
/// A zero divisor is reported before the float check, so `5 % 0.0` is a
/// division by zero like `5 / 0.0`.
fn eval_mod(left: &Value, right: &Value) -> EvalResult {
    let op = ArithmeticOp::Mod;
    let numeric = |value: &Value| {
        value
            .numeric_value()
            .ok_or_else(|| type_mismatch(Some(op), "integer", value))
    };
    let a = numeric(left)?;
    let b = numeric(right)?;
    if b.is_zero() {
        return Err(divide_by_zero());
    }
    if a.is_float() {
        return Err(type_mismatch(Some(op), "integer", left));
    }
    if b.is_float() {
        return Err(type_mismatch(Some(op), "integer", right));
    }
    match widen(a, b, op)? {
        Widened::Int(x, y) => checked_arith(x.checked_rem(y), Value::Int, op),
        Widened::UInt(x, y) => checked_arith(x.checked_rem(y), Value::UInt, op),
        Widened::Float(..) => Err(type_mismatch(Some(op), "integer", left)),
    }
}

// Comparison

/// Order two values for `>`, `>=`, `<`, `<=`.
///
/// The left operand decides what the right one must be. `None` means the
/// values are unordered (NaN), which makes every ordering test false.
fn compare(left: &Value, right: &Value, op: ArithmeticOp) -> Result<Option<Ordering>, EvalError> {
    match (left, right) {
        (Value::String(a), Value::String(b)) => Ok(Some(a.cmp(b))),
        (Value::String(_), _) => Err(type_mismatch(Some(op), "string", right)),
        _ => match (left.numeric_value(), right.numeric_value()) {
            (Some(a), Some(b)) => Ok(a.compare(b)),
            (Some(_), None) => Err(type_mismatch(Some(op), "number", right)),
            (None, _) => Err(type_mismatch(Some(op), "number or string", left)),
        },
    }
}

fn ordering_holds(op: ArithmeticOp, ordering: Option<Ordering>) -> bool {
    let Some(ordering) = ordering else {
        return false;
    };
    match op {
        ArithmeticOp::Gt => ordering == Ordering::Greater,
        ArithmeticOp::Gte => ordering != Ordering::Less,
        ArithmeticOp::Lt => ordering == Ordering::Less,
        _ => ordering != Ordering::Greater,
    }
}

// Logical

/// Strict `&&`/`||` over two evaluated booleans.
fn eval_logical(left: &Value, right: &Value, op: ArithmeticOp) -> EvalResult {
    let expect_bool = |value: &Value| {
        value
            .as_bool()
            .ok_or_else(|| type_mismatch(Some(op), "bool", value))
    };
    let a = expect_bool(left)?;
    let b = expect_bool(right)?;
    Ok(Value::Bool(if op == ArithmeticOp::And {
        a && b
    } else {
        a || b
    }))
}
