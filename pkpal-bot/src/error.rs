//! Failure kinds that cross component boundaries.
//!
//! Transport and driver errors never leave the component that produced them;
//! they are logged there and folded into one of these.

use thiserror::Error;

/// Outcome of a failed registry lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The account has no system, or the registry could not be reached
    #[error("no system registered for this account")]
    NotFound,
    #[error("registry unavailable")]
    Unavailable,
}

/// Why a member name could not be resolved for a sender
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("sender has no registered system")]
    SenderUnregistered,
    #[error("members list unavailable")]
    RegistryUnavailable,
    #[error("{0} not found in member's list")]
    MemberNotFound(String),
}

/// Any failure reading or writing the note table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("note storage failure")]
pub struct StorageError;
