//! Error types for expression building and evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries the typed data for each failure so callers can
//! match on it. Factory functions (e.g. `divide_by_zero()`) are the only way
//! to build an `EvalError`; they fill both `kind` and `message`.

use bloq_ir::ArithmeticOp;

use crate::value::{Value, ValueKind};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// Operand and operator sequences do not interleave.
    #[error("{}", shape_message(*.operands, *.operators))]
    ShapeMismatch { operands: usize, operators: usize },

    /// Operator applied to operand kinds it does not support.
    #[error("expected {expected} value, found {found}: {value}")]
    TypeMismatch {
        op: Option<ArithmeticOp>,
        expected: String,
        found: ValueKind,
        value: String,
    },

    #[error("attempted to divide by zero")]
    DivideByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    #[error("record index {index} is outside of a batch of {len}")]
    RecordOutOfRange { index: usize, len: usize },

    #[error("record is not valid JSON: {reason}")]
    InvalidRecord { reason: String },
}

fn shape_message(operands: usize, operators: usize) -> String {
    match operands.checked_sub(1) {
        None => "expression requires at least one operand".to_string(),
        Some(expected) => {
            format!("expected {expected} operators for {operands} operands, found {operators}")
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; always `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// The operator involved, when the failure is operator-specific.
    pub fn op(&self) -> Option<ArithmeticOp> {
        match &self.kind {
            EvalErrorKind::TypeMismatch { op, .. } => *op,
            _ => None,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Factory functions

#[cold]
pub fn shape_mismatch(operands: usize, operators: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ShapeMismatch {
        operands,
        operators,
    })
}

/// `op` is `None` when the check is not tied to a binary operator (negation).
#[cold]
pub fn type_mismatch(op: Option<ArithmeticOp>, expected: &str, found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op,
        expected: expected.to_string(),
        found: found.kind(),
        value: found.to_string(),
    })
}

#[cold]
pub fn divide_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivideByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

#[cold]
pub fn record_out_of_range(index: usize, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecordOutOfRange { index, len })
}

#[cold]
pub fn invalid_record(reason: impl std::fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidRecord {
        reason: reason.to_string(),
    })
}
