//! Bloq IR - operator definitions shared by the parser and the evaluator.
//!
//! The surface syntax hands the evaluator a flat list of operands joined by
//! binary operators. This crate owns the closed operator set and the
//! precedence tiers used to fold such a list into a tree.
//!
//! The tier table is plain data ([`PRECEDENCE_TIERS`]); the builder in
//! `bloq_eval` reduces over it generically, so adding an operator means
//! adding a variant and placing it in a tier.

mod operators;

pub use operators::{ArithmeticOp, PRECEDENCE_TIERS};
