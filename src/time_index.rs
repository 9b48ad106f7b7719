//! [`TimeFrame`] (world-to-local time mapping) and the binary-search / pivot-hint time
//! resolver used by both the interpolator and the editor.

use serde::{Deserialize, Serialize};

/// Maps world time to a channel's local time before every lookup (spec §3).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeFrame {
    /// Subtracted from the incoming time before scaling.
    pub start_offset: f32,
    /// Multiplies the time after the offset and clamp are applied.
    pub scale: f32,
    /// Negative means unbounded; see [`TimeFrame::effective`].
    pub duration: f32,
}

impl Default for TimeFrame {
    fn default() -> Self {
        Self {
            start_offset: 0.0,
            scale: 1.0,
            duration: -1.0,
        }
    }
}

impl TimeFrame {
    /// `t_local = (t - start_offset).min(duration if duration >= 0) * scale`.
    pub fn map(&self, t: f32) -> f32 {
        let mut t_local = t - self.start_offset;
        if self.duration >= 0.0 {
            t_local = t_local.min(self.duration);
        }
        t_local * self.scale
    }

    /// A copy with `duration` resolved to the last keyframe time when unbounded
    /// (invariant 4: `effective.duration >= 0`).
    pub fn effective(&self, last_time: Option<f32>) -> TimeFrame {
        let mut out = *self;
        if out.duration < 0.0 {
            out.duration = last_time.unwrap_or(0.0);
        }
        out
    }
}

/// Sentinel index pair/factor returned by [`find`] when a channel has no samples.
pub const EMPTY_SENTINEL: (usize, usize, f32) = (usize::MAX, usize::MAX, 0.0);

/// Binary search for the bracketing sample pair around (already time-frame-mapped)
/// `t`. Returns `(i, j, f)` such that `values[i].lerp(values[j], f)` samples at `t`.
pub fn find(times: &[f32], t: f32) -> (usize, usize, f32) {
    if times.is_empty() {
        return EMPTY_SENTINEL;
    }
    let k = times.partition_point(|&x| x <= t);
    if k == times.len() {
        let last = times.len() - 1;
        return (last, last, 0.0);
    }
    if k == 0 {
        return (0, 0, 0.0);
    }
    let f = (t - times[k - 1]) / (times[k] - times[k - 1]);
    (k - 1, k, f)
}

/// Bounded-recursion fast path: when callers advance roughly monotonically, this
/// resolves the new bracket in O(1) amortized by nudging `pivot` instead of
/// re-searching from scratch. Falls back to [`find`] once `depth` reaches 2.
pub fn find_with_pivot(times: &[f32], t: f32, pivot: usize, depth: u8) -> (usize, usize, f32) {
    if times.is_empty() {
        return EMPTY_SENTINEL;
    }
    if depth >= 2 {
        return find(times, t);
    }
    let next = pivot + 1;
    if next < times.len() && t >= times[pivot] && t < times[next] {
        let f = (t - times[pivot]) / (times[next] - times[pivot]);
        return (pivot, next, f);
    }
    if t >= times[pivot] {
        if next >= times.len() {
            return find(times, t);
        }
        return find_with_pivot(times, t, next, depth + 1);
    }
    if pivot == 0 {
        return (0, 0, 0.0);
    }
    find_with_pivot(times, t, pivot - 1, depth + 1)
}

/// Returns the single index whose timestamp equals `t` within `eps`, or `None` when
/// `t` falls strictly between two samples by more than `eps` on both sides.
pub fn find_value_index(times: &[f32], t: f32, eps: f32) -> Option<usize> {
    let (i, j, f) = find(times, t);
    if i == usize::MAX {
        return None;
    }
    if i == j {
        return Some(i);
    }
    let span = times[j] - times[i];
    if f * span < eps {
        Some(i)
    } else if f * span > span - eps {
        Some(j)
    } else {
        None
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TimeFrame(offset={}, scale={}, duration={})",
            self.start_offset, self.scale, self.duration
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/time_index.rs"]
mod tests;
