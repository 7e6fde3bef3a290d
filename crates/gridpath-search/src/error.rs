use std::fmt;

use gridpath_core::Coord;

use crate::strategy::Algorithm;

/// Contract failures raised by a search. An unreachable end is not an
/// error; it is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The algorithm is registered but has no search behaviour.
    Unimplemented(Algorithm),
    /// A strategy reported success but its predecessor links do not lead
    /// from the end back to the start.
    InvalidReconstruction {
        algorithm: Algorithm,
        cause: ReconstructError,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unimplemented(algo) => write!(f, "{algo} search is not implemented"),
            Self::InvalidReconstruction { algorithm, cause } => {
                write!(f, "{algorithm} search produced a broken path: {cause}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unimplemented(_) => None,
            Self::InvalidReconstruction { cause, .. } => Some(cause),
        }
    }
}

/// Why a predecessor chain could not be walked back to the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconstructError {
    /// `at` has no recorded predecessor.
    MissingLink { at: Coord },
    /// The chain loops without reaching the start.
    Cycle { at: Coord },
}

impl fmt::Display for ReconstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLink { at } => write!(f, "no predecessor recorded for {at}"),
            Self::Cycle { at } => write!(f, "predecessor chain loops at {at}"),
        }
    }
}

impl std::error::Error for ReconstructError {}

/// An algorithm key that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d} (expected one of: ", self.0)?;
        for (i, algo) in Algorithm::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", algo.key())?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for UnknownAlgorithm {}
