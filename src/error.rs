//! Error types for container construction
//!
//! Runtime absence (empty containers) and capacity refusals are reported
//! through `Option` and `bool`. Only invalid construction parameters surface
//! as an [`Error`].

use thiserror::Error;

/// Errors raised while constructing a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A bounded container was requested with a negative capacity.
    #[error("capacity must be greater than or equal to 0, got {0}")]
    NegativeCapacity(isize),

    /// More initial values were supplied than the capacity allows.
    #[error("{len} initial values do not fit in capacity {capacity}")]
    CapacityExceeded { capacity: usize, len: usize },
}

/// Result alias used by the fallible constructors.
pub type Result<T, E = Error> = std::result::Result<T, E>;
