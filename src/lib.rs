//! `animchannel` is a time-keyed keyframe channel engine: it stores, samples and edits
//! per-property animation data without owning a timeline, a scene graph or an asset
//! pipeline.
//!
//! # Pipeline overview
//!
//! 1. A [`Channel`] holds a typed sequence of `(time, value)` keyframes targeting a
//!    [`ChannelPath`].
//! 2. [`Channel::sample`] maps world time through the channel's [`TimeFrame`], finds
//!    the bracketing keyframes and interpolates per [`ValueKind`]'s dispatch rules.
//! 3. The [`channel::edit`] operations (`add_value`, `insert_values`, `clear_range`,
//!    `optimize`, `decimate`, ...) mutate the keyframe arrays in place.
//! 4. An optional per-sample expression (feature `expr`) can rewrite the sampled value
//!    before it is returned.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No host integration**: no file formats beyond the plain JSON `serialize` module,
//!   no asset loading, no scene graph — a `Channel` only knows its own keyframes.
//! - **Closed value dispatch**: [`ValueKind`] enumerates the supported types and every
//!   operation over them is an exhaustive `match`, not a trait object.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod interpolate;
mod path;
mod reducer;
mod serialize;
mod store;
mod time_index;
mod transform;
mod value;

#[cfg(feature = "expr")]
mod expression;

/// The `Channel` type and its editing operations.
pub mod channel;

pub use channel::Channel;
pub use channel::edit::InsertFlags;
pub use foundation::error::{ChannelError, ChannelResult};
pub use interpolate::InterpolationMode;
pub use path::ChannelPath;
pub use reducer::{RdpReducer, Reducer};
pub use serialize::{load_channel, save_channel};
pub use store::{KeyStore, ValueStore, VecStore};
pub use time_index::TimeFrame;
pub use transform::ScaledTransform;
pub use value::{EulerAngles, Value, ValueKind};

#[cfg(feature = "expr")]
pub use expression::{ExprEval, ExpressionBinding, MevalExpr};
