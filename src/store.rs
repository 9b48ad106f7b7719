//! The *Store* (spec §6): the narrow contract this crate consumes for raw array
//! storage, plus [`KeyStore`], which keeps the `times`/`values` arrays in lockstep on
//! top of it.
//!
//! The C++ source's `Store` juggles a compressed/uncompressed representation behind
//! raw pointers; in safe Rust (this crate forbids `unsafe`, like its forebear) that
//! maps to a trait over an owned [`Value`] sequence plus a generation counter that
//! stands in for "the cached pointers are stale and must be refreshed".

use crate::value::{Value, ValueKind};

/// The storage contract a [`crate::Channel`] consumes for its values array. Kept
/// narrow and safe: no raw pointers, no generic `get<T>`/`set<T>` — every slot is a
/// tagged [`Value`], so the contract itself enforces that a store never silently
/// holds a value of the wrong kind.
pub trait ValueStore {
    /// The kind every element in this store holds.
    fn value_kind(&self) -> ValueKind;

    /// Re-tag the store to a new kind, discarding existing elements. Used when a
    /// channel is first bound to a value kind, or when `Load` rebuilds a store.
    fn set_value_kind(&mut self, kind: ValueKind);

    /// Number of elements currently stored.
    fn len(&self) -> usize;

    /// True when `len() == 0`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grow or shrink to exactly `n` elements, padding new slots with `value_kind()`'s
    /// identity value.
    fn resize(&mut self, n: usize);

    /// Read element `i`. Panics if `i >= len()` — an internal-contract violation, not
    /// a reportable error (spec §7).
    fn get(&self, i: usize) -> Value;

    /// Overwrite element `i`.
    fn set(&mut self, i: usize, v: Value);

    /// Insert `v` at position `i`, shifting subsequent elements right.
    fn insert(&mut self, i: usize, v: Value);

    /// Remove the element at `i`, shifting subsequent elements left.
    fn remove(&mut self, i: usize);

    /// Insert `n` identity-valued elements starting at `i`.
    fn add_range(&mut self, i: usize, n: usize);

    /// Remove the `n` elements starting at `i`.
    fn remove_range(&mut self, i: usize, n: usize);

    /// Whether a value of `from` is convertible into this store's kind.
    fn convertible(&self, from: ValueKind) -> bool {
        from.convertible_to(self.value_kind())
    }

    /// Requests that the store pin itself to an uncompressed representation for as
    /// long as a [`KeyStore`] holds it. `VecStore` has only one representation, so
    /// this is a no-op kept for contract parity with stores that do compress.
    fn set_uncompressed_persistent(&mut self, _persistent: bool) {}
}

/// A plain `Vec<Value>`-backed store: the one concrete [`ValueStore`] this crate
/// ships, sufficient for in-memory channel authoring and the test suite.
#[derive(Clone, Debug)]
pub struct VecStore {
    kind: ValueKind,
    data: Vec<Value>,
}

impl VecStore {
    /// An empty store tagged with `kind`.
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            data: Vec::new(),
        }
    }
}

impl ValueStore for VecStore {
    fn value_kind(&self) -> ValueKind {
        self.kind
    }

    fn set_value_kind(&mut self, kind: ValueKind) {
        self.kind = kind;
        self.data.clear();
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn resize(&mut self, n: usize) {
        self.data.resize(n, self.kind.identity());
    }

    fn get(&self, i: usize) -> Value {
        self.data[i]
    }

    fn set(&mut self, i: usize, v: Value) {
        self.data[i] = v;
    }

    fn insert(&mut self, i: usize, v: Value) {
        self.data.insert(i, v);
    }

    fn remove(&mut self, i: usize) {
        self.data.remove(i);
    }

    fn add_range(&mut self, i: usize, n: usize) {
        let identity = self.kind.identity();
        self.data.splice(i..i, std::iter::repeat(identity).take(n));
    }

    fn remove_range(&mut self, i: usize, n: usize) {
        self.data.drain(i..i + n);
    }
}

/// Owns a channel's `times` array and, via a [`ValueStore`], its `values` array, and
/// keeps them in lockstep.
///
/// `generation` plays the role of the lookup cache described in spec §4.3/§9: every
/// mutating method bumps it, and [`KeyStore::refresh`] is the explicit acknowledgment
/// point a caller uses after reaching into a borrowed store directly (there is none in
/// this crate today, but the seam is kept so a future non-`VecStore` backend has
/// somewhere to hook invalidation).
#[derive(Clone)]
pub struct KeyStore<S: ValueStore> {
    times: Vec<f32>,
    values: S,
    generation: u64,
}

impl<S: ValueStore> KeyStore<S> {
    /// Wrap an empty `values` store.
    pub fn new(values: S) -> Self {
        Self {
            times: Vec::new(),
            values,
            generation: 0,
        }
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.times.len(), self.values.len());
        self.times.len()
    }

    /// True when there are no keyframes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The kind stored in `values`.
    pub fn value_kind(&self) -> ValueKind {
        self.values.value_kind()
    }

    /// Read-only view of the time array.
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    /// Timestamp at `i`.
    pub fn get_time(&self, i: usize) -> f32 {
        self.times[i]
    }

    /// Value at `i`.
    pub fn get_value(&self, i: usize) -> Value {
        self.values.get(i)
    }

    /// Overwrite the value at `i`, leaving its timestamp untouched.
    pub fn set_value(&mut self, i: usize, v: Value) {
        self.values.set(i, v);
        self.refresh();
    }

    /// Resize both arrays to exactly `n` elements (new times default to `0.0`).
    pub fn resize(&mut self, n: usize) {
        self.times.resize(n, 0.0);
        self.values.resize(n);
        self.refresh();
    }

    /// Insert `(t, v)` at `i`, shifting subsequent keyframes right.
    pub fn insert(&mut self, i: usize, t: f32, v: Value) {
        self.times.insert(i, t);
        self.values.insert(i, v);
        self.refresh();
    }

    /// Remove the keyframe at `i`.
    pub fn remove(&mut self, i: usize) {
        self.times.remove(i);
        self.values.remove(i);
        self.refresh();
    }

    /// Insert `count` identity-valued keyframes starting at `start`; `times` for the
    /// new slots are left at `0.0` and expected to be overwritten by the caller before
    /// the next read.
    pub fn add_value_range(&mut self, start: usize, count: usize) {
        self.times.splice(start..start, std::iter::repeat(0.0).take(count));
        self.values.add_range(start, count);
        self.refresh();
    }

    /// Remove `count` keyframes starting at `start`.
    pub fn remove_value_range(&mut self, start: usize, count: usize) {
        self.times.drain(start..start + count);
        self.values.remove_range(start, count);
        self.refresh();
    }

    /// Overwrite the timestamp at `i` directly (used after `add_value_range` to stamp
    /// freshly reserved slots, e.g. by `insert_values`, `merge_values` and `decimate`).
    pub fn set_time(&mut self, i: usize, t: f32) {
        self.times[i] = t;
        self.refresh();
    }

    /// Acknowledge a mutation: bumps the generation counter and re-asserts the
    /// times/values length invariant (invariant 1, invariant 5).
    pub fn refresh(&mut self) {
        debug_assert_eq!(self.times.len(), self.values.len());
        self.generation = self.generation.wrapping_add(1);
    }

    /// Current generation counter, exposed for tests asserting that a mutation
    /// actually refreshed the cache.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
#[path = "../tests/unit/store.rs"]
mod tests;
