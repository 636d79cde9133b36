//! Per-record evaluation context.
//!
//! The engine never inspects a batch itself. It hands the context to each
//! operand unchanged; operands that read record data (field lookups,
//! metadata) go through [`EvalContext::current`].

use rustc_hash::FxHashMap;

use crate::errors::{invalid_record, record_out_of_range, EvalError, EvalResult};

/// A single record of a batch: raw content plus string metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    pub content: Vec<u8>,
    pub metadata: FxHashMap<String, String>,
}

impl Message {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            metadata: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Parse the content as a JSON document.
    pub fn json(&self) -> EvalResult {
        serde_json::from_slice(&self.content).map_err(|e| {
            tracing::debug!(error = %e, "record content failed to parse as JSON");
            invalid_record(e)
        })
    }
}

/// Read-only context threaded through every `evaluate` call.
///
/// Cheap to copy; it borrows the batch for the duration of one evaluation.
#[derive(Copy, Clone, Debug)]
pub struct EvalContext<'a> {
    /// Position of the record being processed within `batch`.
    pub index: usize,
    pub batch: &'a [Message],
}

impl<'a> EvalContext<'a> {
    pub fn new(index: usize, batch: &'a [Message]) -> Self {
        Self { index, batch }
    }

    /// Context with no records, for expressions built only from literals.
    pub fn empty() -> EvalContext<'static> {
        EvalContext {
            index: 0,
            batch: &[],
        }
    }

    /// The record at `index`.
    pub fn current(&self) -> Result<&'a Message, EvalError> {
        self.batch
            .get(self.index)
            .ok_or_else(|| record_out_of_range(self.index, self.batch.len()))
    }
}
