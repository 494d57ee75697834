//! Shared error classification for game-core.
//!
//! Each component defines its own error enum next to the operations it
//! validates; all of them implement [`GameError`] so hosts can report a stable
//! code and decide how loudly to fail.

/// How an error should be treated by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Retry may succeed once the world changes (inventory full, no stock).
    Recoverable,

    /// Invalid request; retrying unchanged will fail again.
    Validation,

    /// Collaborators disagree about state.
    Internal,

    /// Content or configuration cannot be used.
    Fatal,
}

pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, e.g. `INVENTORY_FULL`.
    fn error_code(&self) -> &'static str;
}
