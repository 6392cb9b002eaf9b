use thiserror::Error;

use crate::engine::variables::DomainId;

/// Errors raised while building the model, i.e. while creating variables or imposing
/// propagators. None of these can be recovered from at solve time.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    #[error("cannot create a variable with an empty domain")]
    InvalidDomain,
    #[error("{0} does not belong to this store")]
    UnknownVariable(DomainId),
}
