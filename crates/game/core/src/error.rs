//! Error classification shared by the map store and the level loader.
//!
//! Each fallible operation owns its error enum ([`crate::MapError`],
//! [`crate::ResizeError`], the loader's `LoadError`). They all implement
//! [`GameError`] so the client can decide whether to keep playing and can log
//! a stable code.
//!
//! Player moves and monster pursuit never fail: a blocked move is an ordinary
//! outcome, not an error.

/// How a caller should react to a failed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The operation was refused and the caller still holds a playable level,
    /// e.g. the map is already too large to double.
    Recoverable,

    /// The input itself is bad: negative dimensions, a short tile section, a
    /// player start off the map. Loading it again will fail the same way.
    Validation,

    /// A broken invariant inside the crate. Report it as a bug.
    Internal,

    /// No level can be produced at all, e.g. the level file is unreadable.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// True when play can continue on the state the caller already has.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// True for failures that are not the level author's fault.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Classification implemented by every error enum in the workspace.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, such as `MAP_CAPACITY_OVERFLOW`.
    ///
    /// Falls back to the type name for errors without per-variant codes.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_helpers() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
