//! The operand contract and the built-in operands.
//!
//! Anything the parser can place between two operators implements
//! [`Operand`]: literals, record lookups, negations and nested expressions.
//! Evaluation is a method call on the node, never a precomputed value, which
//! is what lets `&&`, `||` and `|` skip their right-hand side.

use std::fmt;

use bloq_value::{type_mismatch, EvalContext, EvalResult, Value};

/// An evaluable expression node.
///
/// Implementations must be immutable after construction and safe to
/// evaluate from many threads at once against different contexts.
pub trait Operand: Send + Sync + fmt::Debug {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> EvalResult;
}

/// A constant value.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal(pub Value);

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        Literal(value.into())
    }

    /// Boxed literal, the shape the expression builder consumes.
    pub fn boxed(value: impl Into<Value>) -> Box<dyn Operand> {
        Box::new(Self::new(value))
    }
}

impl Operand for Literal {
    fn evaluate(&self, _ctx: &EvalContext<'_>) -> EvalResult {
        Ok(self.0.clone())
    }
}

/// Boolean negation of another operand.
#[derive(Debug)]
pub struct Not(Box<dyn Operand>);

impl Not {
    pub fn new(operand: Box<dyn Operand>) -> Self {
        Not(operand)
    }
}

impl Operand for Not {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> EvalResult {
        let value = self.0.evaluate(ctx)?;
        match value {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            other => Err(type_mismatch(None, "bool", &other)),
        }
    }
}

/// Dot-path lookup into the current record, parsed as JSON.
///
/// `JsonField::new("")` yields the whole document. A missing key, or a step
/// through something that is not an object, yields `Value::Absent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonField {
    path: Vec<String>,
}

impl JsonField {
    pub fn new(path: &str) -> Self {
        let path = if path.is_empty() {
            Vec::new()
        } else {
            path.split('.').map(str::to_string).collect()
        };
        Self { path }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }
}

impl Operand for JsonField {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> EvalResult {
        let document = ctx.current()?.json()?;
        let mut target = &document;
        for segment in &self.path {
            match target.get(segment) {
                Some(next) => target = next,
                None => return Ok(Value::Absent),
            }
        }
        Ok(target.clone())
    }
}

/// A metadata value of the current record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    key: String,
}

impl Metadata {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Operand for Metadata {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> EvalResult {
        Ok(ctx
            .current()?
            .metadata(&self.key)
            .map_or(Value::Absent, Value::string))
    }
}
