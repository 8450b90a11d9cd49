//! The operation table a producer fills in before iteration starts.

use crate::{
    adapter::TableIterator,
    behavior::{Advance, Query},
    operation::Operation,
};

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("missing capability: {0}")]
    Missing(Operation),
}

/// Builder holding one behavior per [`Operation`].
///
/// Every slot must be filled before [`build`](OperationTable::build) succeeds, so
/// a [`TableIterator`] never has to look up a behavior that is not there.
pub struct OperationTable<S> {
    weight: Option<Box<dyn Query<S, i64>>>,
    has_payload: Option<Box<dyn Query<S, bool>>>,
    payload: Option<Box<dyn Query<S, Option<Vec<u8>>>>>,
    has_contexts: Option<Box<dyn Query<S, bool>>>,
    contexts: Option<Box<dyn Query<S, Option<HashSet<Vec<u8>>>>>>,
    next: Option<Box<dyn Advance<S>>>,
}

impl<S> OperationTable<S> {
    pub fn new() -> Self {
        Self {
            weight: None,
            has_payload: None,
            payload: None,
            has_contexts: None,
            contexts: None,
            next: None,
        }
    }

    pub fn weight(mut self, f: impl Query<S, i64> + 'static) -> Self {
        self.weight = Some(Box::new(f));
        self
    }

    pub fn has_payload(mut self, f: impl Query<S, bool> + 'static) -> Self {
        self.has_payload = Some(Box::new(f));
        self
    }

    pub fn payload(mut self, f: impl Query<S, Option<Vec<u8>>> + 'static) -> Self {
        self.payload = Some(Box::new(f));
        self
    }

    pub fn has_contexts(mut self, f: impl Query<S, bool> + 'static) -> Self {
        self.has_contexts = Some(Box::new(f));
        self
    }

    pub fn contexts(mut self, f: impl Query<S, Option<HashSet<Vec<u8>>>> + 'static) -> Self {
        self.contexts = Some(Box::new(f));
        self
    }

    pub fn next(mut self, f: impl Advance<S> + 'static) -> Self {
        self.next = Some(Box::new(f));
        self
    }

    /// Returns `true` if a behavior is registered for `op`.
    pub fn contains(&self, op: Operation) -> bool {
        match op {
            Operation::Weight => self.weight.is_some(),
            Operation::HasPayload => self.has_payload.is_some(),
            Operation::Payload => self.payload.is_some(),
            Operation::HasContexts => self.has_contexts.is_some(),
            Operation::Contexts => self.contexts.is_some(),
            Operation::Next => self.next.is_some(),
        }
    }

    /// Returns the operations still without a behavior, in contract order.
    pub fn missing(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| !self.contains(*op))
            .collect()
    }

    /// Binds the table to the producer's state.
    ///
    /// No behavior is invoked here. Fails with [`CapabilityError::Missing`]
    /// naming the first uncovered operation.
    pub fn build(self, state: S) -> Result<TableIterator<S>, CapabilityError> {
        let missing = |op: Operation| {
            tracing::warn!(operation = %op, "operation table is incomplete");
            CapabilityError::Missing(op)
        };

        Ok(TableIterator {
            weight: self.weight.ok_or_else(|| missing(Operation::Weight))?,
            has_payload: self.has_payload.ok_or_else(|| missing(Operation::HasPayload))?,
            payload: self.payload.ok_or_else(|| missing(Operation::Payload))?,
            has_contexts: self.has_contexts.ok_or_else(|| missing(Operation::HasContexts))?,
            contexts: self.contexts.ok_or_else(|| missing(Operation::Contexts))?,
            next: self.next.ok_or_else(|| missing(Operation::Next))?,
            state,
        })
    }
}

impl<S> Default for OperationTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> OperationTable<()> {
        OperationTable::new()
            .weight(|_: &()| 1)
            .has_payload(|_: &()| false)
            .payload(|_: &()| None)
            .has_contexts(|_: &()| false)
            .contexts(|_: &()| None)
            .next(|_: &mut ()| Ok(None))
    }

    #[test]
    fn empty_table_misses_everything() {
        let table = OperationTable::<()>::new();
        assert_eq!(table.missing(), Operation::ALL.to_vec());
        assert_eq!(
            table.build(()).unwrap_err(),
            CapabilityError::Missing(Operation::Weight)
        );
    }

    #[test]
    fn full_table_builds() {
        let table = full();
        assert!(table.missing().is_empty());
        assert!(table.build(()).is_ok());
    }

    #[test]
    fn reports_first_missing_in_contract_order() {
        let table = OperationTable::<()>::new()
            .weight(|_: &()| 1)
            .has_payload(|_: &()| false)
            .next(|_: &mut ()| Ok(None));
        assert_eq!(
            table.missing(),
            vec![Operation::Payload, Operation::HasContexts, Operation::Contexts]
        );
        let err = table.build(()).unwrap_err();
        assert_eq!(err, CapabilityError::Missing(Operation::Payload));
        assert_eq!(err.to_string(), "missing capability: payload");
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut iter = full().weight(|_: &()| 9).build(()).unwrap();
        assert_eq!(crate::TermIterator::weight(&iter), 9);
        assert_eq!(crate::TermIterator::next(&mut iter).unwrap(), None);
    }
}
