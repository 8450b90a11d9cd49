//! Well-known names of the operations a producer supplies.

use std::fmt;
use std::str::FromStr;

/// One of the six operations of a [`TermIterator`](crate::TermIterator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Weight,
    HasPayload,
    Payload,
    HasContexts,
    Contexts,
    Next,
}

impl Operation {
    /// Every operation, in the order the contract declares them.
    pub const ALL: [Operation; 6] = [
        Operation::Weight,
        Operation::HasPayload,
        Operation::Payload,
        Operation::HasContexts,
        Operation::Contexts,
        Operation::Next,
    ];

    /// Returns the well-known name of this operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Weight => "weight",
            Operation::HasPayload => "has-payload",
            Operation::Payload => "payload",
            Operation::HasContexts => "has-contexts",
            Operation::Contexts => "contexts",
            Operation::Next => "next",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight" => Ok(Operation::Weight),
            // predicate spelling used by keyword-keyed producers
            "has-payload" | "payload?" => Ok(Operation::HasPayload),
            "payload" => Ok(Operation::Payload),
            "has-contexts" | "contexts?" => Ok(Operation::HasContexts),
            "contexts" => Ok(Operation::Contexts),
            "next" => Ok(Operation::Next),
            other => Err(ParseOperationError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
            assert_eq!(op.to_string(), op.name());
        }
    }

    #[test]
    fn predicate_aliases() {
        assert_eq!("payload?".parse::<Operation>(), Ok(Operation::HasPayload));
        assert_eq!("contexts?".parse::<Operation>(), Ok(Operation::HasContexts));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "rewind".parse::<Operation>().unwrap_err();
        assert_eq!(err, ParseOperationError("rewind".to_string()));
        assert_eq!(err.to_string(), "unknown operation: rewind");
    }
}
