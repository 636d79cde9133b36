//! Binary expression node.
//!
//! Owns both operands exclusively and never changes after construction, so a
//! built tree can be shared between threads and evaluated concurrently.

use std::mem;

use bloq_ir::ArithmeticOp;
use bloq_value::{type_mismatch, EvalContext, EvalResult, Value};

use crate::operand::{Literal, Operand};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;

/// `left op right`, evaluated left to right.
#[derive(Debug)]
pub struct ArithmeticNode {
    left: Box<dyn Operand>,
    op: ArithmeticOp,
    right: Box<dyn Operand>,
}

impl ArithmeticNode {
    pub fn new(left: Box<dyn Operand>, op: ArithmeticOp, right: Box<dyn Operand>) -> Self {
        Self { left, op, right }
    }

    pub fn op(&self) -> ArithmeticOp {
        self.op
    }

    pub fn left(&self) -> &dyn Operand {
        self.left.as_ref()
    }

    pub fn right(&self) -> &dyn Operand {
        self.right.as_ref()
    }

    fn eval_inner(&self, ctx: &EvalContext<'_>) -> EvalResult {
        match self.op {
            ArithmeticOp::And => self.eval_short_circuit(ctx, false),
            ArithmeticOp::Or => self.eval_short_circuit(ctx, true),
            ArithmeticOp::Pipe => self.eval_coalesce(ctx),
            op => {
                let left = self.left.evaluate(ctx)?;
                let right = self.right.evaluate(ctx)?;
                evaluate_binary(left, right, op)
            }
        }
    }

    /// `&&` and `||`.
    ///
    /// When the left value equals `decided` the right operand is not
    /// evaluated at all: its errors must never surface.
    fn eval_short_circuit(&self, ctx: &EvalContext<'_>, decided: bool) -> EvalResult {
        let left = self.left.evaluate(ctx)?;
        match left.as_bool() {
            Some(b) if b == decided => Ok(Value::Bool(decided)),
            Some(_) => {
                let right = self.right.evaluate(ctx)?;
                right
                    .as_bool()
                    .map(Value::Bool)
                    .ok_or_else(|| type_mismatch(Some(self.op), "bool", &right))
            }
            None => Err(type_mismatch(Some(self.op), "bool", &left)),
        }
    }

    /// `|`: the left value unless it failed or is nil-like.
    ///
    /// A left failure is discarded; only the right branch's failure reaches
    /// the caller.
    fn eval_coalesce(&self, ctx: &EvalContext<'_>) -> EvalResult {
        match self.left.evaluate(ctx) {
            Ok(value) if !value.is_nil_like() => Ok(value),
            Ok(_) => self.right.evaluate(ctx),
            Err(err) => {
                tracing::trace!(error = %err, "discarding failed coalesce branch");
                self.right.evaluate(ctx)
            }
        }
    }
}

impl Operand for ArithmeticNode {
    #[tracing::instrument(level = "trace", skip_all, fields(op = %self.op))]
    fn evaluate(&self, ctx: &EvalContext<'_>) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(ctx))
    }
}

/// Freeing a tree recurses once per level just like evaluating it, so the
/// children are released under the same stack guard.
impl Drop for ArithmeticNode {
    fn drop(&mut self) {
        let left = mem::replace(&mut self.left, Literal::boxed(Value::Null));
        let right = mem::replace(&mut self.right, Literal::boxed(Value::Null));
        ensure_sufficient_stack(|| drop((left, right)));
    }
}
