//! Small float helpers shared by the time-index, key-store and interpolation code.

/// Linear interpolation between two `f32` scalars; `t` is not clamped by design — every
/// caller here has already derived `t` from a binary search and knows it lies in
/// `[0, 1]` (or is being used deliberately to extrapolate a capped time-frame edge).
#[inline]
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Round-half-away-from-zero to the nearest integer, used for interpolating integer
/// `ValueKind`s (spec: "Integer kinds: round(lerp(a,b,f))").
#[inline]
pub(crate) fn round_half_away(x: f64) -> f64 {
    x.round()
}

/// True when `|a - b| < eps`.
#[inline]
pub(crate) fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
