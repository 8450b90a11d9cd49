//! Closure shapes a producer supplies for each operation.

use std::io;

/// A read-only operation over the producer's state.
///
/// Used for `weight`, `has-payload`, `payload`, `has-contexts` and `contexts`.
/// A failure inside a query is a panic; there is no recoverable channel.
pub trait Query<S, T>: Fn(&S) -> T + Send {}

// Blanket impl: any closure or fn matching the signature is a query.
impl<S, T, F: Fn(&S) -> T + Send> Query<S, T> for F {}

/// The `next` operation: moves the producer's state forward and returns the new term.
///
/// `Ok(None)` marks the end of the sequence.
pub trait Advance<S>: FnMut(&mut S) -> io::Result<Option<Vec<u8>>> + Send {}

impl<S, F: FnMut(&mut S) -> io::Result<Option<Vec<u8>>> + Send> Advance<S> for F {}
