//! The Interpolator (spec §4.4): type-dispatched sampling at arbitrary time, with the
//! time-frame mapping applied first.

use serde::{Deserialize, Serialize};

use crate::store::{KeyStore, ValueStore};
use crate::time_index::{TimeFrame, find};
use crate::value::{Value, ValueKind};

/// How a channel blends between two bracketing keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpolationMode {
    /// Hold the nearer keyframe's value; never blends.
    Step,
    /// Blend via the value kind's `lerp`/`slerp`/`round` rule.
    Linear,
}

impl Default for InterpolationMode {
    fn default() -> Self {
        InterpolationMode::Linear
    }
}

/// Sample `store` at world time `t`, mapping through `frame` first. Returns `None`
/// when `store` holds no keyframes.
///
/// Operation order matches spec §4.4: map time via `frame`, find the bracketing
/// indices, then interpolate. Applying an attached expression afterward is the
/// caller's job (`Channel::sample`), since that requires the channel's `timeIndex` and
/// expression binding, which this free function doesn't have access to.
pub fn sample<S: ValueStore>(
    store: &KeyStore<S>,
    mode: InterpolationMode,
    frame: &TimeFrame,
    t: f32,
) -> Option<Value> {
    if store.is_empty() {
        return None;
    }
    let t_local = frame.map(t);
    let (i, j, f) = find(store.times(), t_local);
    Some(blend(store, mode, i, j, f))
}

/// Blend the keyframes at `i`/`j` by factor `f` per `mode`. Callers that already have
/// bracketing indices (e.g. `Channel::sample`'s pivot-hint lookup) use this directly
/// instead of re-running the binary search in [`sample`].
pub fn blend<S: ValueStore>(
    store: &KeyStore<S>,
    mode: InterpolationMode,
    i: usize,
    j: usize,
    f: f32,
) -> Value {
    if i == j {
        return store.get_value(i);
    }
    let kind: ValueKind = store.value_kind();
    match mode {
        InterpolationMode::Step => {
            if f < 0.5 {
                store.get_value(i)
            } else {
                store.get_value(j)
            }
        }
        InterpolationMode::Linear => {
            let a = store.get_value(i);
            let b = store.get_value(j);
            kind.lerp(&a, &b, f)
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/interpolate.rs"]
mod tests;
