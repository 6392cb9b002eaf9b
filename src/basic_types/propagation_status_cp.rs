use thiserror::Error;

use crate::engine::propagation::PropagatorId;
use crate::engine::variables::DomainId;

/// The result of a consistency step. A propagator either succeeds, or one of its requested domain
/// tightenings would have emptied a domain.
///
/// Propagators never recover from an [`EmptyDomain`] locally; they return it with `?` so that the
/// engine can trigger backtracking.
pub type PropagationStatusCP = Result<(), EmptyDomain>;

/// A requested domain operation would have left the domain of `domain` without any value.
///
/// The domain itself is left untouched when this error is produced.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("the domain of {domain} would become empty")]
pub struct EmptyDomain {
    pub domain: DomainId,
}

impl EmptyDomain {
    pub(crate) fn new(domain: DomainId) -> Self {
        EmptyDomain { domain }
    }
}

/// Failure of a call to the fixpoint loop: `propagator` emptied the domain of `domain`.
///
/// The store is left at the level where the failure happened; the caller is expected to
/// backtrack.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("{propagator} emptied the domain of {domain}")]
pub struct Conflict {
    pub propagator: PropagatorId,
    pub domain: DomainId,
}
