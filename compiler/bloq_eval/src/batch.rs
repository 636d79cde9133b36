//! Evaluate one compiled expression against a whole batch.

use bloq_value::{EvalContext, EvalResult, Message};
use rayon::prelude::*;

use crate::operand::Operand;

/// Evaluate `expr` once per record, in parallel, returning results in
/// record order.
#[tracing::instrument(level = "debug", skip_all, fields(records = batch.len()))]
pub fn evaluate_batch(expr: &dyn Operand, batch: &[Message]) -> Vec<EvalResult> {
    (0..batch.len())
        .into_par_iter()
        .map(|index| expr.evaluate(&EvalContext::new(index, batch)))
        .collect()
}
