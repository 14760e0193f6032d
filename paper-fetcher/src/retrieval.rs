//! Outcome of a network-facing call
//!
//! Search and fetch never surface transport failures as `Err`: the failure is
//! logged where it happens and the caller gets [`Retrieval::Degraded`], which
//! reads as an empty result. Only validation errors travel through `Err`.

use crate::error::PubMedError;

/// Data returned by a network call, or the reason it had to be dropped
#[derive(Debug)]
pub enum Retrieval<T> {
    /// The remote service answered and the payload was decoded
    Complete(T),
    /// The call failed; the diagnostic has already been emitted
    Degraded(PubMedError),
}

impl<T> Retrieval<T> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Retrieval::Complete(_))
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Retrieval::Degraded(_))
    }

    /// The error behind a degraded result
    pub fn error(&self) -> Option<&PubMedError> {
        match self {
            Retrieval::Complete(_) => None,
            Retrieval::Degraded(err) => Some(err),
        }
    }
}

impl<T: Default> Retrieval<T> {
    /// The payload, or an empty value when the call degraded
    pub fn into_inner(self) -> T {
        match self {
            Retrieval::Complete(data) => data,
            Retrieval::Degraded(_) => T::default(),
        }
    }
}
