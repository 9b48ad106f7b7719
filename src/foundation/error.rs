use crate::value::ValueKind;

/// Convenience result type used across the crate's public API.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Top-level error taxonomy for channel operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    /// A time range is inverted, or lies entirely outside the channel's bounds.
    #[error("invalid range [{start}, {end}]")]
    InvalidRange {
        /// Requested range start.
        start: f32,
        /// Requested range end.
        end: f32,
    },

    /// `merge_values` was called with a source channel whose value kind cannot be
    /// converted into this channel's value kind.
    #[error("cannot convert {from:?} into {to:?}")]
    TypeMismatch {
        /// Value kind of the data being merged in.
        from: ValueKind,
        /// Value kind of the channel being merged into.
        to: ValueKind,
    },

    /// An operation that requires at least one sample was called on an empty channel.
    #[error("channel has no samples")]
    EmptyChannel,

    /// Expression compilation failed; carries a diagnostic for the caller.
    #[error("expression compile error: {0}")]
    ExpressionCompile(String),

    /// `validate` found the time array out of order or with samples too close together.
    #[error("invariant violation: {0}")]
    Invariant(String),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
