//! `Channel`: the top-level entity (spec §3) — a time-keyed sequence of one
//! [`ValueKind`] with a [`ChannelPath`] target, an [`InterpolationMode`] and a
//! [`TimeFrame`].
//!
//! Temporal editing operations (`add_value`, `insert_values`, `clear_range`, ...) live
//! in [`edit`] as a second `impl Channel` block, mirroring how the spec separates the
//! Editor from the rest of the Channel's responsibilities.

pub mod edit;

use std::cell::{Cell, RefCell};

#[cfg(feature = "expr")]
use crate::expression::{ExpressionBinding, MevalExpr};
use crate::foundation::error::{ChannelError, ChannelResult};
use crate::interpolate::{self, InterpolationMode};
use crate::path::ChannelPath;
use crate::store::{KeyStore, VecStore};
use crate::time_index::{TimeFrame, find_with_pivot};
use crate::value::{Value, ValueKind};

/// A time-keyed keyframe sequence over a single [`ValueKind`].
pub struct Channel {
    target: ChannelPath,
    interpolation: InterpolationMode,
    time_frame: TimeFrame,
    store: KeyStore<VecStore>,
    #[cfg(feature = "expr")]
    expression: RefCell<Option<ExpressionBinding<MevalExpr>>>,
    /// Last bracket start index, used as the `find_with_pivot` hint for the next
    /// `sample` call (spec §4.2's "pivot-hint fast path").
    pivot: Cell<usize>,
}

impl Channel {
    /// A new, empty channel targeting `target`, holding values of `kind`.
    pub fn new(target: ChannelPath, kind: ValueKind) -> Self {
        Self {
            target,
            interpolation: InterpolationMode::default(),
            time_frame: TimeFrame::default(),
            store: KeyStore::new(VecStore::new(kind)),
            #[cfg(feature = "expr")]
            expression: RefCell::new(None),
            pivot: Cell::new(0),
        }
    }

    /// The property this channel animates.
    pub fn target(&self) -> &ChannelPath {
        &self.target
    }

    /// Retarget this channel.
    pub fn set_target(&mut self, target: ChannelPath) {
        self.target = target;
    }

    /// The channel's blend mode.
    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Change the blend mode.
    pub fn set_interpolation(&mut self, mode: InterpolationMode) {
        self.interpolation = mode;
    }

    /// The raw (unresolved) time frame.
    pub fn time_frame(&self) -> TimeFrame {
        self.time_frame
    }

    /// Replace the time frame.
    pub fn set_time_frame(&mut self, frame: TimeFrame) {
        self.time_frame = frame;
    }

    /// The time frame with an unbounded `duration` resolved to the last keyframe time
    /// (invariant 4).
    pub fn effective_time_frame(&self) -> TimeFrame {
        self.time_frame.effective(self.max_time())
    }

    /// This channel's value kind.
    pub fn value_kind(&self) -> ValueKind {
        self.store.value_kind()
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when there are no keyframes.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Read-only view of the keyframe times, strictly increasing (invariant 2).
    pub fn times(&self) -> &[f32] {
        self.store.times()
    }

    /// Timestamp at `i`.
    pub fn get_time(&self, i: usize) -> f32 {
        self.store.get_time(i)
    }

    /// Value at `i`.
    pub fn get_value(&self, i: usize) -> Value {
        self.store.get_value(i)
    }

    /// First keyframe time, or `None` when empty (invariant 3).
    pub fn min_time(&self) -> Option<f32> {
        (!self.store.is_empty()).then(|| self.store.get_time(0))
    }

    /// Last keyframe time, or `None` when empty (invariant 3).
    pub fn max_time(&self) -> Option<f32> {
        (!self.store.is_empty()).then(|| self.store.get_time(self.store.len() - 1))
    }

    /// Sample at world time `t`: map through the effective time frame, find the
    /// bracketing keyframes (via the pivot-hint fast path), interpolate, then apply an
    /// attached expression (spec §4.4's operation order).
    pub fn sample(&self, t: f32) -> ChannelResult<Value> {
        if self.store.is_empty() {
            return Err(ChannelError::EmptyChannel);
        }
        let frame = self.effective_time_frame();
        let t_local = frame.map(t);
        let (i, j, f) = find_with_pivot(self.store.times(), t_local, self.pivot.get(), 0);
        self.pivot.set(i);
        let mut value = interpolate::blend(&self.store, self.interpolation, i, j, f);

        #[cfg(feature = "expr")]
        if let Some(binding) = self.expression.borrow_mut().as_mut() {
            binding.apply(&mut value, t, i as f32, &frame);
        }

        Ok(value)
    }

    /// Like [`Channel::sample`] but ignoring the time frame and any attached
    /// expression — used internally by the editor to read back interpolated boundary
    /// values while mutating the stored arrays directly.
    pub(crate) fn sample_raw(&self, t: f32) -> Option<Value> {
        if self.store.is_empty() {
            return None;
        }
        let (i, j, f) = crate::time_index::find(self.store.times(), t);
        Some(interpolate::blend(&self.store, self.interpolation, i, j, f))
    }

    pub(crate) fn reset_pivot(&self) {
        self.pivot.set(0);
    }

    /// Compile `src` and attach it as this channel's per-sample expression. On a
    /// compile error the previous expression (if any) is left in place.
    #[cfg(feature = "expr")]
    pub fn set_value_expression(&mut self, src: &str) -> ChannelResult<()> {
        let binding = ExpressionBinding::<MevalExpr>::compile(src, self.value_kind())?;
        *self.expression.borrow_mut() = Some(binding);
        Ok(())
    }

    /// Compile `src` without attaching it, surfacing the diagnostic on failure and
    /// discarding the result on success.
    #[cfg(feature = "expr")]
    pub fn test_value_expression(&self, src: &str) -> ChannelResult<()> {
        ExpressionBinding::<MevalExpr>::compile(src, self.value_kind()).map(|_| ())
    }

    /// Detach any compiled expression.
    #[cfg(feature = "expr")]
    pub fn clear_value_expression(&mut self) {
        *self.expression.borrow_mut() = None;
    }

    /// Whether an expression is currently attached.
    #[cfg(feature = "expr")]
    pub fn has_value_expression(&self) -> bool {
        self.expression.borrow().is_some()
    }

    /// The source text of the attached expression, if any. Used by `serialize` to
    /// round-trip the expression field.
    #[cfg(feature = "expr")]
    pub(crate) fn value_expression_source(&self) -> Option<String> {
        self.expression.borrow().as_ref().map(|b| b.source().to_string())
    }

    /// Read-only consistency check (spec §4.5): asserts invariant 2 and never
    /// attempts recovery (see `DESIGN.md`'s Open Question decision). Callers that want
    /// to fix a detected violation should run [`edit::Channel::resolve_duplicates`]
    /// themselves.
    pub fn validate(&self) -> ChannelResult<()> {
        let times = self.store.times();
        for pair in times.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a >= b {
                return Err(ChannelError::Invariant(format!(
                    "times not in order: {a} >= {b}"
                )));
            }
            if b - a < crate::foundation::constants::TIME_EPS / 2.0 {
                return Err(ChannelError::Invariant(format!(
                    "samples too close: {a} and {b}"
                )));
            }
        }
        Ok(())
    }
}

impl Clone for Channel {
    fn clone(&self) -> Self {
        let mut cloned = Self {
            target: self.target.clone(),
            interpolation: self.interpolation,
            time_frame: self.time_frame,
            store: self.store.clone(),
            #[cfg(feature = "expr")]
            expression: RefCell::new(None),
            pivot: Cell::new(0),
        };
        // The expression closes over its owning channel's value kind and component
        // symbols, so it is re-initialized against the clone rather than shared.
        #[cfg(feature = "expr")]
        if let Some(binding) = self.expression.borrow().as_ref() {
            let _ = cloned.set_value_expression(binding.source());
        }
        cloned
    }
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("target", &self.target)
            .field("interpolation", &self.interpolation)
            .field("time_frame", &self.time_frame)
            .field("value_kind", &self.value_kind())
            .field("len", &self.store.len())
            .finish()
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Channel({}, {:?}, {} samples)",
            self.target,
            self.value_kind(),
            self.store.len()
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/channel.rs"]
mod tests;
