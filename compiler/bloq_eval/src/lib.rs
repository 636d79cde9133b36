#![deny(clippy::arithmetic_side_effects)]
#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add noise at every call site"
)]
//! Bloq Eval - evaluator for binary-operator chains.
//!
//! The parser hands over a flat sequence of operands and the operators
//! joining them. [`build`] folds it into a tree of [`ArithmeticNode`]s once,
//! at script compile time; the tree is then evaluated per record with a
//! fresh [`EvalContext`].
//!
//! # Architecture
//!
//! - `Operand`: the evaluation contract every node implements
//! - `build`: precedence folding over `bloq_ir::PRECEDENCE_TIERS`
//! - `ArithmeticNode`: left-to-right evaluation, short-circuit `&&`/`||`,
//!   error-swallowing coalesce `|`
//! - `evaluate_binary`: enum dispatch over evaluated value pairs
//! - `evaluate_batch`: one tree, many records, in parallel
//!
//! # Re-exports
//!
//! Value and error types from `bloq_value` and the operator enum from
//! `bloq_ir` are re-exported so parsers only need this crate.

mod batch;
mod builder;
mod node;
mod operand;
mod operators;
mod stack;

pub use bloq_ir::{ArithmeticOp, PRECEDENCE_TIERS};
pub use bloq_value::{
    EvalContext, EvalError, EvalErrorKind, EvalResult, Mapping, Message, Number, Value,
    ValueKind,
};

pub use batch::evaluate_batch;
pub use builder::build;
pub use node::ArithmeticNode;
pub use operand::{JsonField, Literal, Metadata, Not, Operand};
pub use operators::evaluate_binary;
pub use stack::ensure_sufficient_stack;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=bloq_eval=debug` or
/// `RUST_LOG=bloq_eval=trace` (the latter logs every node evaluation).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

#[cfg(test)]
mod tests;
