//! Core abstractions for feeding weighted terms to a suggester.

pub mod adapter;
pub mod behavior;
pub mod consumer;
pub mod operation;
pub mod table;

pub use adapter::TableIterator;
pub use behavior::{Advance, Query};
pub use consumer::Entry;
pub use operation::{Operation, ParseOperationError};
pub use table::{CapabilityError, OperationTable};

use std::collections::HashSet;
use std::io;

/// A weighted sequence of terms consumed by a suggester while it builds its index.
///
/// The consumer calls [`next`] to obtain a term, then queries the weight and the
/// optional payload and contexts of *that* term before advancing again. Nothing
/// in this trait enforces the order; implementations that share positional
/// state between methods are responsible for keeping them consistent.
///
/// [`next`]: TermIterator::next
pub trait TermIterator {
    /// Returns the weight of the current term.
    fn weight(&self) -> i64;

    /// Returns `true` if [`payload`](TermIterator::payload) carries a value for the current term.
    fn has_payload(&self) -> bool;

    /// Returns the payload attached to the current term.
    ///
    /// Only meaningful when [`has_payload`](TermIterator::has_payload) is `true`.
    fn payload(&self) -> Option<Vec<u8>>;

    /// Returns `true` if [`contexts`](TermIterator::contexts) carries a value for the current term.
    fn has_contexts(&self) -> bool;

    /// Returns the contexts attached to the current term.
    ///
    /// Only meaningful when [`has_contexts`](TermIterator::has_contexts) is `true`.
    fn contexts(&self) -> Option<HashSet<Vec<u8>>>;

    /// Advances to the next term and returns it.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted. I/O failures of the
    /// underlying source are reported through the error; this is the only
    /// method with a recoverable failure channel.
    fn next(&mut self) -> io::Result<Option<Vec<u8>>>;
}

impl<T: TermIterator + ?Sized> TermIterator for &mut T {
    fn weight(&self) -> i64 {
        (**self).weight()
    }

    fn has_payload(&self) -> bool {
        (**self).has_payload()
    }

    fn payload(&self) -> Option<Vec<u8>> {
        (**self).payload()
    }

    fn has_contexts(&self) -> bool {
        (**self).has_contexts()
    }

    fn contexts(&self) -> Option<HashSet<Vec<u8>>> {
        (**self).contexts()
    }

    fn next(&mut self) -> io::Result<Option<Vec<u8>>> {
        (**self).next()
    }
}

impl<T: TermIterator + ?Sized> TermIterator for Box<T> {
    fn weight(&self) -> i64 {
        (**self).weight()
    }

    fn has_payload(&self) -> bool {
        (**self).has_payload()
    }

    fn payload(&self) -> Option<Vec<u8>> {
        (**self).payload()
    }

    fn has_contexts(&self) -> bool {
        (**self).has_contexts()
    }

    fn contexts(&self) -> Option<HashSet<Vec<u8>>> {
        (**self).contexts()
    }

    fn next(&mut self) -> io::Result<Option<Vec<u8>>> {
        (**self).next()
    }
}
