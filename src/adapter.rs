//! A [`TermIterator`] that forwards every call to a producer-supplied behavior.
//!
//! The adapter owns the producer's state but never looks inside it. Each
//! contract method invokes exactly one behavior with that state and returns
//! whatever the behavior returns. Errors from `next` come back unchanged;
//! panics from the other behaviors unwind through untouched.

use crate::{
    TermIterator,
    behavior::{Advance, Query},
};

use std::{collections::HashSet, fmt, io};

/// Iterator built from an [`OperationTable`](crate::OperationTable).
///
/// Not reentrant: one consumer drives one instance. For concurrent passes over
/// the same logical sequence, build one adapter per consumer, each with its
/// own state.
pub struct TableIterator<S> {
    pub(crate) weight: Box<dyn Query<S, i64>>,
    pub(crate) has_payload: Box<dyn Query<S, bool>>,
    pub(crate) payload: Box<dyn Query<S, Option<Vec<u8>>>>,
    pub(crate) has_contexts: Box<dyn Query<S, bool>>,
    pub(crate) contexts: Box<dyn Query<S, Option<HashSet<Vec<u8>>>>>,
    pub(crate) next: Box<dyn Advance<S>>,
    pub(crate) state: S,
}

impl<S> TableIterator<S> {
    /// Returns the producer's state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Consumes the adapter, handing the state back to the producer.
    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S> TermIterator for TableIterator<S> {
    fn weight(&self) -> i64 {
        (self.weight)(&self.state)
    }

    fn has_payload(&self) -> bool {
        (self.has_payload)(&self.state)
    }

    fn payload(&self) -> Option<Vec<u8>> {
        (self.payload)(&self.state)
    }

    fn has_contexts(&self) -> bool {
        (self.has_contexts)(&self.state)
    }

    fn contexts(&self) -> Option<HashSet<Vec<u8>>> {
        (self.contexts)(&self.state)
    }

    fn next(&mut self) -> io::Result<Option<Vec<u8>>> {
        let result = (self.next)(&mut self.state);
        match &result {
            Ok(Some(term)) => tracing::trace!(len = term.len(), "advanced to next term"),
            Ok(None) => tracing::debug!("end of term sequence"),
            Err(e) => tracing::debug!(error = %e, "advancing term sequence failed"),
        }
        result
    }
}

impl<S: fmt::Debug> fmt::Debug for TableIterator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableIterator")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
