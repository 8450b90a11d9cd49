use crate::TermIterator;

use std::{collections::HashSet, io};

/// Everything a suggester reads about one term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub term: Vec<u8>,
    pub weight: i64,
    /// Set only when the iterator reported a payload for this term.
    pub payload: Option<Vec<u8>>,
    /// Set only when the iterator reported contexts for this term.
    pub contexts: Option<HashSet<Vec<u8>>>,
}

/// Runs the consumer loop over the given iterator.
///
/// Each call to [`next`] is followed by the queries for the term it returned:
/// [`weight`], then [`has_payload`] and [`payload`], then [`has_contexts`] and
/// [`contexts`]. The optional values are only requested when their flag is
/// set. The resulting [`Entry`] is passed to `f`.
///
/// The loop stops at the end of the sequence or when `f` returns `false`, and
/// never advances past the end. Returns the number of entries handed to `f`.
/// An error from [`next`] ends the loop and is returned as is.
///
/// [`next`]: TermIterator::next
/// [`weight`]: TermIterator::weight
/// [`has_payload`]: TermIterator::has_payload
/// [`payload`]: TermIterator::payload
/// [`has_contexts`]: TermIterator::has_contexts
/// [`contexts`]: TermIterator::contexts
pub fn run<I, F>(mut iter: I, mut f: F) -> io::Result<usize>
where
    I: TermIterator,
    F: FnMut(Entry) -> bool,
{
    let mut count = 0;

    while let Some(term) = iter.next()? {
        let weight = iter.weight();
        let payload = if iter.has_payload() { iter.payload() } else { None };
        let contexts = if iter.has_contexts() { iter.contexts() } else { None };

        count += 1;
        let entry = Entry {
            term,
            weight,
            payload,
            contexts,
        };
        if !f(entry) {
            break;
        }
    }

    tracing::debug!(entries = count, "term consumer finished");
    Ok(count)
}

/// Drains the iterator into a vector of entries.
pub fn collect<I: TermIterator>(iter: I) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    run(iter, |entry| {
        entries.push(entry);
        true
    })?;
    Ok(entries)
}
