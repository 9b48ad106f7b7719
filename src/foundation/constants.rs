//! Crate-wide epsilon and default-error constants.
//!
//! These play the role of the engine's "configuration": there is no host config file,
//! callers that need different tolerances pass them explicitly to the operations that
//! accept an `error`/`epsilon` parameter.

/// Minimum gap between two consecutive keyframe times; also the snapping tolerance
/// used when resolving duplicate samples after an edit.
pub const TIME_EPS: f32 = 0.001;

/// Snapping tolerance used by `Channel::add_value` to decide whether a new sample
/// overwrites an existing one instead of being inserted alongside it.
pub const VALUE_EPS: f32 = 0.001;

/// Per-component absolute tolerance used by `Channel::optimize` to decide whether a
/// keyframe is redundant with its linearly-interpolated neighbors.
pub const OPT_EPS: f32 = 0.001;

/// Default RMS error bound passed to the reducer by `Channel::decimate` when the
/// caller does not supply one.
pub const DECIMATE_DEFAULT_ERROR: f32 = 0.03;

#[cfg(test)]
#[path = "../../tests/unit/foundation/constants.rs"]
mod tests;
