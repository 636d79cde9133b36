//! Flat operand/operator sequence to expression tree.
//!
//! The parser sees `a + b * c - d` as operands `[a, b, c, d]` and operators
//! `[+, *, -]`. The builder folds that list one precedence tier at a time,
//! highest tier first. Within a tier it folds left to right, which is what
//! makes every operator left-associative.
//!
//! The tiers come from [`PRECEDENCE_TIERS`]; nothing here knows about
//! specific operators.

use bloq_ir::{ArithmeticOp, PRECEDENCE_TIERS};
use bloq_value::{shape_mismatch, EvalError};

use crate::node::ArithmeticNode;
use crate::operand::Operand;

/// Build one operand from `operands[0] operators[0] operands[1] ...`.
///
/// A single operand is returned as-is. Nothing is evaluated; the only
/// failure is a sequence whose lengths do not interleave.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(operands = operands.len(), operators = operators.len())
)]
pub fn build(
    operands: Vec<Box<dyn Operand>>,
    operators: Vec<ArithmeticOp>,
) -> Result<Box<dyn Operand>, EvalError> {
    let (operand_count, operator_count) = (operands.len(), operators.len());
    if operand_count.checked_sub(1) != Some(operator_count) {
        return Err(shape_mismatch(operand_count, operator_count));
    }

    let (mut operands, mut operators) = (operands, operators);
    for tier in PRECEDENCE_TIERS.iter().rev() {
        if operators.is_empty() {
            break;
        }
        (operands, operators) = fold_tier(operands, operators, tier);
    }

    let mut remaining = operands.into_iter();
    match (remaining.next(), remaining.next()) {
        (Some(root), None) if operators.is_empty() => Ok(root),
        _ => Err(shape_mismatch(operand_count, operator_count)),
    }
}

/// Fold every operator of `tier`, leftmost first, into a node with its two
/// neighbours. Operators of other tiers are passed through untouched.
fn fold_tier(
    operands: Vec<Box<dyn Operand>>,
    operators: Vec<ArithmeticOp>,
    tier: &[ArithmeticOp],
) -> (Vec<Box<dyn Operand>>, Vec<ArithmeticOp>) {
    let mut kept_operands = Vec::with_capacity(operands.len());
    let mut kept_operators = Vec::with_capacity(operators.len());

    let mut operands = operands.into_iter();
    let Some(mut acc) = operands.next() else {
        return (kept_operands, kept_operators);
    };

    for (op, right) in operators.into_iter().zip(operands) {
        if tier.contains(&op) {
            acc = Box::new(ArithmeticNode::new(acc, op, right));
        } else {
            kept_operands.push(acc);
            kept_operators.push(op);
            acc = right;
        }
    }
    kept_operands.push(acc);

    (kept_operands, kept_operators)
}

#[cfg(test)]
mod tests;
