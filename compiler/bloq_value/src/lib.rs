#![deny(clippy::arithmetic_side_effects)]
#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add noise at every call site"
)]
//! Bloq Value - runtime data model for the bloq expression engine.
//!
//! This crate provides:
//! - The dynamic, schema-less `Value` and its `ValueKind` tag
//! - `Number`, the width-preserving numeric view used for comparisons
//! - Evaluation errors (`EvalError`, `EvalErrorKind`, `EvalResult`) and the
//!   factory functions that build them
//! - `EvalContext`, the per-record context threaded through every operand,
//!   and the `Message` records it borrows
//!
//! # Equality vs. Identity
//!
//! `PartialEq` on `Value` is structural identity (same variant, same
//! payload). Language-level equality, where `5 == 5.0`, is `Value::equals`.

mod context;
mod errors;
mod value;

pub use context::{EvalContext, Message};
pub use errors::{
    divide_by_zero, integer_overflow, invalid_record, record_out_of_range, shape_mismatch,
    type_mismatch, EvalError, EvalErrorKind, EvalResult,
};
pub use value::{Mapping, Number, Value, ValueKind};
