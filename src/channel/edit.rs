//! The Editor (spec §4.5): higher-level temporal edits layered on top of
//! [`super::Channel`]'s raw keyframe storage.

use crate::foundation::constants::{DECIMATE_DEFAULT_ERROR, TIME_EPS, VALUE_EPS};
use crate::foundation::error::{ChannelError, ChannelResult};
use crate::reducer::{Reducer, RdpReducer};
use crate::time_index::{find, find_value_index};
use crate::transform::ScaledTransform;
use crate::value::Value;

use super::Channel;

/// Flags accepted by [`Channel::insert_values`].
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertFlags {
    /// Skip the merge-with-existing-data pass and clear the target range outright.
    pub clear_existing_in_range: bool,
    /// Run `decimate` over the inserted range once the insert completes.
    pub decimate_inserted: bool,
}

impl Channel {
    /// Insert or overwrite a single keyframe at `t`. Snaps to (and overwrites) an
    /// existing keyframe within `VALUE_EPS`; otherwise inserts at the position that
    /// keeps `times` sorted. Returns the keyframe's index.
    pub fn add_value(&mut self, t: f32, v: Value) -> usize {
        if self.is_empty() {
            self.store.insert(0, t, v);
            self.reset_pivot();
            return 0;
        }
        if let Some(idx) = find_value_index(self.store.times(), t, VALUE_EPS) {
            self.store.set_value(idx, v);
            return idx;
        }
        let insert_at = if t < self.store.get_time(0) {
            0
        } else if t > self.store.get_time(self.store.len() - 1) {
            self.store.len()
        } else {
            let (_, j, _) = find(self.store.times(), t);
            j
        };
        self.store.insert(insert_at, t, v);
        self.reset_pivot();
        insert_at
    }

    /// Insert a synthetic interpolated sample at `t` if none already exists within
    /// `TIME_EPS`, returning its index either way.
    fn insert_sample(&mut self, t: f32) -> ChannelResult<usize> {
        if let Some(idx) = find_value_index(self.store.times(), t, TIME_EPS) {
            return Ok(idx);
        }
        let v = self.sample_raw(t).ok_or(ChannelError::EmptyChannel)?;
        Ok(self.add_value(t, v))
    }

    /// Resolve the indices bracketing `[t_start, t_end]`. Without `retain`, snaps to
    /// existing samples within `TIME_EPS` and returns `None` if either endpoint has no
    /// such sample. With `retain`, inserts synthetic samples at both endpoints first,
    /// so the pair is always present afterward.
    fn boundary_indices(&mut self, t_start: f32, t_end: f32, retain: bool) -> Option<(usize, usize)> {
        if retain {
            let i = self.insert_sample(t_start).ok()?;
            let j = self.insert_sample(t_end).ok()?;
            Some((i, j))
        } else {
            let i = find_value_index(self.store.times(), t_start, TIME_EPS)?;
            let j = find_value_index(self.store.times(), t_end, TIME_EPS)?;
            Some((i, j))
        }
    }

    /// Keyframes (time, value) with `start <= time <= end`.
    pub(crate) fn data_in_range(&self, start: f32, end: f32) -> Vec<(f32, Value)> {
        (0..self.store.len())
            .filter_map(|i| {
                let t = self.store.get_time(i);
                (t >= start && t <= end).then(|| (t, self.store.get_value(i)))
            })
            .collect()
    }

    /// Remove every keyframe in `[start, end]`. When `add_caps` is set, the
    /// interpolated boundary values are captured before removal and re-inserted at
    /// exactly `start`/`end` afterward. Returns `false` (a no-op) when the range is
    /// inverted or lies entirely outside the channel's bounds.
    pub fn clear_range(&mut self, start: f32, end: f32, add_caps: bool) -> bool {
        if self.is_empty() || end < start {
            return false;
        }
        let min_t = self.store.get_time(0);
        let max_t = self.store.get_time(self.store.len() - 1);
        if end < min_t - TIME_EPS || start > max_t + TIME_EPS {
            return false;
        }
        let start = start.max(min_t);
        let end = end.min(max_t);

        let cap_start = add_caps.then(|| self.sample_raw(start)).flatten();
        let cap_end = add_caps.then(|| self.sample_raw(end)).flatten();

        let (i0, j0, f0) = find(self.store.times(), start);
        let (i1, j1, f1) = find(self.store.times(), end);
        let start_idx = if f0 < TIME_EPS { i0 } else { j0 };
        let end_idx = if f1 > 1.0 - TIME_EPS { j1 } else { i1 };

        if start_idx <= end_idx {
            self.store.remove_value_range(start_idx, end_idx - start_idx + 1);
        }

        if let Some(v) = cap_start {
            self.add_value(start, v);
        }
        if let Some(v) = cap_end {
            self.add_value(end, v);
        }
        self.reset_pivot();
        true
    }

    /// Add `delta` to every keyframe time in `[t_start, t_end]`. A no-op when `delta`
    /// is within `1.5 * TIME_EPS` of zero. When `retain_boundary`, `boundary_indices`
    /// first guarantees exact samples exist at both `t_start` and `t_end` (inserting
    /// synthetic ones if needed) so the shifted block always carries its own edge
    /// values along with it — continuity at the boundary comes from the block moving
    /// as a whole, not from restoring a keyframe afterward at the time it vacated.
    pub fn shift_time_in_range(&mut self, t_start: f32, t_end: f32, delta: f32, retain_boundary: bool) {
        if delta.abs() <= TIME_EPS * 1.5 {
            return;
        }
        let (lo_t, hi_t) = (t_start.min(t_end), t_start.max(t_end));
        let Some((idx_start, idx_end)) = self.boundary_indices(lo_t, hi_t, retain_boundary) else {
            return;
        };
        if idx_start > idx_end {
            return;
        }
        let lo_t = self.store.get_time(idx_start);
        let hi_t = self.store.get_time(idx_end);

        if retain_boundary {
            // Clear only the strip the block is shifting into, beyond its own range,
            // so the moved keys never collide with unrelated surviving ones.
            if delta < 0.0 {
                let _ = self.clear_range(lo_t + delta - TIME_EPS * 1.5, lo_t - TIME_EPS * 1.5, false);
            } else {
                let _ = self.clear_range(hi_t + TIME_EPS * 1.5, hi_t + delta + TIME_EPS * 1.5, false);
            }
        }

        // Re-resolve indices: the destination-strip clear above may have removed keys
        // ahead of `idx_start`/`idx_end`, shifting everything after them down.
        let Some(idx_start) = find_value_index(self.store.times(), lo_t, TIME_EPS) else {
            return;
        };
        let Some(idx_end) = find_value_index(self.store.times(), hi_t, TIME_EPS) else {
            return;
        };

        // Capture the whole moving block before touching the store — `add_value` below
        // reshuffles indices as points land, so indices computed against the pre-edit
        // layout must not be reused after any mutation.
        let moving: Vec<(f32, Value)> = (idx_start..=idx_end)
            .map(|k| (self.store.get_time(k), self.store.get_value(k)))
            .collect();

        self.store.remove_value_range(idx_start, idx_end - idx_start + 1);
        for (t, v) in &moving {
            self.add_value(t + delta, *v);
        }

        self.resolve_duplicates(lo_t + delta);
        self.resolve_duplicates(hi_t + delta);
        self.reset_pivot();
    }

    /// Scale keyframe times in `[t_start, t_end]` about `t_pivot`: `t' = t_pivot + (t -
    /// t_pivot) * scale`. When `retain_boundary`, an edge that gets pulled inward by
    /// the scale (leaving a hole at the original boundary) has its captured value
    /// re-inserted there.
    pub fn scale_time_in_range(
        &mut self,
        t_start: f32,
        t_end: f32,
        t_pivot: f32,
        scale: f32,
        retain_boundary: bool,
    ) {
        let (lo_t, hi_t) = (t_start.min(t_end), t_start.max(t_end));
        let Some((idx_start, idx_end)) = self.boundary_indices(lo_t, hi_t, retain_boundary) else {
            return;
        };
        if idx_start > idx_end {
            return;
        }

        let map = |t: f32| t_pivot + (t - t_pivot) * scale;
        let moving: Vec<(f32, Value)> = (idx_start..=idx_end)
            .map(|k| (self.store.get_time(k), self.store.get_value(k)))
            .collect();
        let start_val = moving.first().copied();
        let end_val = moving.last().copied();

        self.store.remove_value_range(idx_start, idx_end - idx_start + 1);
        for (t, v) in &moving {
            self.add_value(map(*t), *v);
        }

        self.resolve_duplicates(map(lo_t));
        self.resolve_duplicates(map(hi_t));

        if retain_boundary {
            let pulled_in_start = (scale < 1.0 && t_pivot >= lo_t) || (scale > 1.0 && t_pivot <= lo_t);
            let pulled_in_end = (scale < 1.0 && t_pivot <= hi_t) || (scale > 1.0 && t_pivot >= hi_t);
            if pulled_in_start {
                if let Some((_, v)) = start_val {
                    self.add_value(lo_t, v);
                }
            }
            if pulled_in_end {
                if let Some((_, v)) = end_val {
                    self.add_value(hi_t, v);
                }
            }
        }
        self.reset_pivot();
    }

    /// Insert a batch of `(times, values)`. When `flags.clear_existing_in_range` is
    /// unset, existing samples in the incoming range are first merged with the
    /// incoming stream (the incoming sample wins on an exact-time collision — see
    /// `DESIGN.md`'s Open Question decision) and the call recurses with the flag set.
    /// Returns the index the inserted block starts at.
    #[tracing::instrument(skip(self, times, values))]
    pub fn insert_values(
        &mut self,
        times: &[f32],
        values: &[Value],
        offset: f32,
        flags: InsertFlags,
    ) -> ChannelResult<usize> {
        debug_assert_eq!(times.len(), values.len());
        if times.is_empty() {
            return Ok(self.store.len());
        }

        let shifted: Vec<f32> = if offset != 0.0 {
            times.iter().map(|t| t + offset).collect()
        } else {
            times.to_vec()
        };

        if !flags.clear_existing_in_range {
            let range_start = shifted[0];
            let range_end = *shifted.last().unwrap();
            let existing = self.data_in_range(range_start, range_end);
            let (merged_times, merged_values) = merge_incoming_wins(&existing, &shifted, values);
            return self.insert_values(
                &merged_times,
                &merged_values,
                0.0,
                InsertFlags {
                    clear_existing_in_range: true,
                    ..flags
                },
            );
        }

        let range_start = shifted[0] - TIME_EPS;
        let range_end = *shifted.last().unwrap() + TIME_EPS;
        let _ = self.clear_range(range_start, range_end, false);

        let insert_at = self.store.times().partition_point(|&t| t < shifted[0]);
        self.store.add_value_range(insert_at, shifted.len());
        for (k, (&t, &v)) in shifted.iter().zip(values).enumerate() {
            self.store.set_time(insert_at + k, t);
            self.store.set_value(insert_at + k, v);
        }

        if flags.decimate_inserted {
            self.decimate(shifted[0], *shifted.last().unwrap(), None)?;
        }
        self.reset_pivot();
        Ok(insert_at)
    }

    /// Overwrite this channel's data in `[other.min_time, other.max_time]` with
    /// `other`'s keyframes, converting values into this channel's kind. Fails if
    /// `other`'s kind cannot convert into this channel's.
    pub fn merge_values(&mut self, other: &Channel) -> ChannelResult<()> {
        if !other.value_kind().convertible_to(self.value_kind()) {
            return Err(ChannelError::TypeMismatch {
                from: other.value_kind(),
                to: self.value_kind(),
            });
        }
        let (Some(other_min), Some(other_max)) = (other.min_time(), other.max_time()) else {
            return Ok(());
        };

        let _ = self.clear_range(other_min, other_max, false);
        let insert_at = self.store.times().partition_point(|&t| t < other_min);
        self.store.add_value_range(insert_at, other.len());
        for k in 0..other.len() {
            let t = other.get_time(k);
            let v = other.get_value(k);
            let converted = other
                .value_kind()
                .convert(&v, self.value_kind())
                .expect("convertibility already checked above");
            self.store.set_time(insert_at + k, t);
            self.store.set_value(insert_at + k, converted);
        }
        self.resolve_duplicates(other_min);
        self.resolve_duplicates(other_max);
        self.reset_pivot();
        Ok(())
    }

    /// Apply `xform` in place to every keyframe (a no-op for kinds other than
    /// `Vector3`/`Quaternion`; see [`ScaledTransform::apply`]).
    pub fn transform_global(&mut self, xform: &ScaledTransform) {
        for i in 0..self.store.len() {
            let mut v = self.store.get_value(i);
            xform.apply(&mut v);
            self.store.set_value(i, v);
        }
    }

    /// Remove keyframes that lie on the straight line between their neighbors (within
    /// `OPT_EPS`, per component). Returns the number removed.
    pub fn optimize(&mut self) -> usize {
        let kind = self.value_kind();
        let eps = crate::foundation::constants::OPT_EPS;
        let mut removed = 0usize;

        if self.store.len() >= 3 {
            let mut i = self.store.len() - 2;
            loop {
                if i + 1 < self.store.len() {
                    let t_prev = self.store.get_time(i - 1);
                    let t_cur = self.store.get_time(i);
                    let t_next = self.store.get_time(i + 1);
                    let span = t_next - t_prev;
                    let f = if span.abs() > f32::EPSILON { (t_cur - t_prev) / span } else { 0.0 };
                    let v_prev = self.store.get_value(i - 1);
                    let v_next = self.store.get_value(i + 1);
                    let predicted = kind.lerp(&v_prev, &v_next, f);
                    let actual = self.store.get_value(i);
                    if kind.approx_eq(&predicted, &actual, eps) {
                        self.store.remove(i);
                        removed += 1;
                    }
                }
                if i == 1 {
                    break;
                }
                i -= 1;
            }
        }

        if self.store.len() == 2 {
            let a = self.store.get_value(0);
            let b = self.store.get_value(1);
            if kind.approx_eq(&a, &b, eps) {
                self.store.remove(1);
                removed += 1;
            }
        }
        self.reset_pivot();
        removed
    }

    /// Simplify `[t_start, t_end]` per component via the reducer, within `error` RMS
    /// (defaulting to `DECIMATE_DEFAULT_ERROR`). The reducer only ever selects a
    /// subset of the original sample times, so resampling the pre-decimation channel
    /// at the union of kept times across all components reproduces each kept
    /// component's reduced value exactly.
    #[tracing::instrument(skip(self))]
    pub fn decimate(&mut self, t_start: f32, t_end: f32, error: Option<f32>) -> ChannelResult<()> {
        let error = error.unwrap_or(DECIMATE_DEFAULT_ERROR);
        let kind = self.value_kind();
        let data = self.data_in_range(t_start, t_end);
        if data.len() < 3 {
            return Ok(());
        }

        let reducer = RdpReducer;
        let mut reduced_times: Vec<f32> = Vec::new();
        for c in 0..kind.component_count() {
            let points: Vec<(f32, f32)> = data.iter().map(|(t, v)| (*t, kind.get_component(v, c))).collect();
            for (t, _) in reducer.reduce(&points, error) {
                if !reduced_times.iter().any(|&rt| (rt - t).abs() < TIME_EPS) {
                    reduced_times.push(t);
                }
            }
        }
        reduced_times.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mut new_values = Vec::with_capacity(reduced_times.len());
        for &t in &reduced_times {
            new_values.push(self.sample_raw(t).ok_or(ChannelError::EmptyChannel)?);
        }

        let _ = self.clear_range(t_start, t_end, false);
        let insert_at = self.store.times().partition_point(|&t| t < reduced_times[0]);
        self.store.add_value_range(insert_at, reduced_times.len());
        for (k, (&t, v)) in reduced_times.iter().zip(new_values).enumerate() {
            self.store.set_time(insert_at + k, t);
            self.store.set_value(insert_at + k, v);
        }
        self.reset_pivot();
        Ok(())
    }

    /// Post-edit fixup: if a neighbor of the sample at `t` lies within `TIME_EPS`,
    /// remove the neighbor. Repeats until no duplicates remain around `t`.
    pub fn resolve_duplicates(&mut self, t: f32) {
        loop {
            let Some(idx) = find_value_index(self.store.times(), t, TIME_EPS) else {
                return;
            };
            let removed = if idx > 0 && (self.store.get_time(idx) - self.store.get_time(idx - 1)).abs() < TIME_EPS {
                self.store.remove(idx - 1);
                true
            } else if idx + 1 < self.store.len()
                && (self.store.get_time(idx + 1) - self.store.get_time(idx)).abs() < TIME_EPS
            {
                self.store.remove(idx + 1);
                true
            } else {
                false
            };
            if !removed {
                self.reset_pivot();
                return;
            }
        }
    }
}

/// Merge `existing` keyframes with an incoming `(times, values)` stream by ascending
/// time. On an exact-time collision (within `TIME_EPS`), the incoming sample wins and
/// the existing one is dropped — see `DESIGN.md`'s Open Question decision, grounded in
/// the original `MergeDataArrays`' tie-goes-to-incoming comparison.
fn merge_incoming_wins(
    existing: &[(f32, Value)],
    incoming_times: &[f32],
    incoming_values: &[Value],
) -> (Vec<f32>, Vec<Value>) {
    let mut out_t = Vec::with_capacity(existing.len() + incoming_times.len());
    let mut out_v = Vec::with_capacity(existing.len() + incoming_times.len());
    let (mut ei, mut ii) = (0usize, 0usize);

    while ei < existing.len() || ii < incoming_times.len() {
        if ei >= existing.len() {
            out_t.push(incoming_times[ii]);
            out_v.push(incoming_values[ii]);
            ii += 1;
        } else if ii >= incoming_times.len() {
            out_t.push(existing[ei].0);
            out_v.push(existing[ei].1);
            ei += 1;
        } else if existing[ei].0 < incoming_times[ii] {
            if (incoming_times[ii] - existing[ei].0).abs() < TIME_EPS {
                ei += 1;
            } else {
                out_t.push(existing[ei].0);
                out_v.push(existing[ei].1);
                ei += 1;
            }
        } else {
            out_t.push(incoming_times[ii]);
            out_v.push(incoming_values[ii]);
            if (existing[ei].0 - incoming_times[ii]).abs() < TIME_EPS {
                ei += 1;
            }
            ii += 1;
        }
    }
    (out_t, out_v)
}

#[cfg(test)]
#[path = "../../tests/unit/channel/edit.rs"]
mod tests;
