//! The closed set of value kinds a [`crate::Channel`] can hold, plus the per-kind
//! dispatch table (lerp, slerp, identity, component access, convertibility) that the
//! interpolator, editor and expression binding all sit on top of.
//!
//! The dispatch surface is closed: every operation here is a `match` over
//! [`ValueKind`]/[`Value`], not an open trait object, because the spec enumerates the
//! full set of supported kinds and nothing else needs to plug in.

use glam::{Affine3A, IVec2, IVec3, IVec4, Mat4, Quat, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Euler angles in radians, pitch/yaw/roll order. `glam` has no first-class Euler type,
/// so this crate defines its own, matching the teacher's pattern of wrapping a small
/// domain type next to the values it interpolates (c.f. `foundation::core::Transform2D`
/// in the example this crate was built from).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation around the X axis, in radians.
    pub pitch: f32,
    /// Rotation around the Y axis, in radians.
    pub yaw: f32,
    /// Rotation around the Z axis, in radians.
    pub roll: f32,
}

impl EulerAngles {
    /// Construct from pitch/yaw/roll, in radians.
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}

/// Enumerates every value type a channel may store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// 2D float vector.
    Vector2,
    /// 3D float vector.
    Vector3,
    /// 4D float vector.
    Vector4,
    /// 2D integer vector.
    Vector2i,
    /// 3D integer vector.
    Vector3i,
    /// 4D integer vector.
    Vector4i,
    /// Unit quaternion, rotation.
    Quaternion,
    /// Pitch/yaw/roll rotation.
    EulerAngles,
    /// 3x4 affine transform (rotation/scale + translation, no projection row).
    Mat3x4,
    /// 4x4 matrix.
    Mat4,
}

/// A single typed value, tagged by its [`ValueKind`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// See [`ValueKind::Bool`].
    Bool(bool),
    /// See [`ValueKind::Int8`].
    Int8(i8),
    /// See [`ValueKind::UInt8`].
    UInt8(u8),
    /// See [`ValueKind::Int16`].
    Int16(i16),
    /// See [`ValueKind::UInt16`].
    UInt16(u16),
    /// See [`ValueKind::Int32`].
    Int32(i32),
    /// See [`ValueKind::UInt32`].
    UInt32(u32),
    /// See [`ValueKind::Int64`].
    Int64(i64),
    /// See [`ValueKind::UInt64`].
    UInt64(u64),
    /// See [`ValueKind::Float`].
    Float(f32),
    /// See [`ValueKind::Double`].
    Double(f64),
    /// See [`ValueKind::Vector2`].
    Vector2(Vec2),
    /// See [`ValueKind::Vector3`].
    Vector3(Vec3),
    /// See [`ValueKind::Vector4`].
    Vector4(Vec4),
    /// See [`ValueKind::Vector2i`].
    Vector2i(IVec2),
    /// See [`ValueKind::Vector3i`].
    Vector3i(IVec3),
    /// See [`ValueKind::Vector4i`].
    Vector4i(IVec4),
    /// See [`ValueKind::Quaternion`].
    Quaternion(Quat),
    /// See [`ValueKind::EulerAngles`].
    EulerAngles(EulerAngles),
    /// See [`ValueKind::Mat3x4`].
    Mat3x4(Affine3A),
    /// See [`ValueKind::Mat4`].
    Mat4(Mat4),
}

impl Value {
    /// The [`ValueKind`] tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int8(_) => ValueKind::Int8,
            Value::UInt8(_) => ValueKind::UInt8,
            Value::Int16(_) => ValueKind::Int16,
            Value::UInt16(_) => ValueKind::UInt16,
            Value::Int32(_) => ValueKind::Int32,
            Value::UInt32(_) => ValueKind::UInt32,
            Value::Int64(_) => ValueKind::Int64,
            Value::UInt64(_) => ValueKind::UInt64,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
            Value::Vector2(_) => ValueKind::Vector2,
            Value::Vector3(_) => ValueKind::Vector3,
            Value::Vector4(_) => ValueKind::Vector4,
            Value::Vector2i(_) => ValueKind::Vector2i,
            Value::Vector3i(_) => ValueKind::Vector3i,
            Value::Vector4i(_) => ValueKind::Vector4i,
            Value::Quaternion(_) => ValueKind::Quaternion,
            Value::EulerAngles(_) => ValueKind::EulerAngles,
            Value::Mat3x4(_) => ValueKind::Mat3x4,
            Value::Mat4(_) => ValueKind::Mat4,
        }
    }
}

impl ValueKind {
    /// Every kind is eligible for interpolation/optimize/decimate; booleans and
    /// integer kinds just use nearest-neighbor/rounded semantics rather than a true
    /// blend (spec §3). Kept as an explicit predicate (rather than inlining the check
    /// at call sites) so `Editor`/`Interpolator` read the same intent spec.md states.
    pub fn is_animatable(self) -> bool {
        true
    }

    /// True when this kind is a boolean or any integer kind — the kinds that step or
    /// round rather than smoothly blend.
    pub fn is_step_like(self) -> bool {
        matches!(
            self,
            ValueKind::Bool
                | ValueKind::Int8
                | ValueKind::UInt8
                | ValueKind::Int16
                | ValueKind::UInt16
                | ValueKind::Int32
                | ValueKind::UInt32
                | ValueKind::Int64
                | ValueKind::UInt64
                | ValueKind::Vector2i
                | ValueKind::Vector3i
                | ValueKind::Vector4i
        )
    }

    /// Number of scalar components `get_component`/`set_component` expose, used by
    /// `decimate` to reduce each component of a value kind independently.
    pub fn component_count(self) -> usize {
        match self {
            ValueKind::Bool
            | ValueKind::Int8
            | ValueKind::UInt8
            | ValueKind::Int16
            | ValueKind::UInt16
            | ValueKind::Int32
            | ValueKind::UInt32
            | ValueKind::Int64
            | ValueKind::UInt64
            | ValueKind::Float
            | ValueKind::Double => 1,
            ValueKind::Vector2 | ValueKind::Vector2i => 2,
            ValueKind::Vector3 | ValueKind::Vector3i | ValueKind::EulerAngles => 3,
            ValueKind::Vector4 | ValueKind::Vector4i | ValueKind::Quaternion => 4,
            ValueKind::Mat3x4 => 12,
            ValueKind::Mat4 => 16,
        }
    }

    /// The zero/identity value for this kind.
    pub fn identity(self) -> Value {
        match self {
            ValueKind::Bool => Value::Bool(false),
            ValueKind::Int8 => Value::Int8(0),
            ValueKind::UInt8 => Value::UInt8(0),
            ValueKind::Int16 => Value::Int16(0),
            ValueKind::UInt16 => Value::UInt16(0),
            ValueKind::Int32 => Value::Int32(0),
            ValueKind::UInt32 => Value::UInt32(0),
            ValueKind::Int64 => Value::Int64(0),
            ValueKind::UInt64 => Value::UInt64(0),
            ValueKind::Float => Value::Float(0.0),
            ValueKind::Double => Value::Double(0.0),
            ValueKind::Vector2 => Value::Vector2(Vec2::ZERO),
            ValueKind::Vector3 => Value::Vector3(Vec3::ZERO),
            ValueKind::Vector4 => Value::Vector4(Vec4::ZERO),
            ValueKind::Vector2i => Value::Vector2i(IVec2::ZERO),
            ValueKind::Vector3i => Value::Vector3i(IVec3::ZERO),
            ValueKind::Vector4i => Value::Vector4i(IVec4::ZERO),
            ValueKind::Quaternion => Value::Quaternion(Quat::IDENTITY),
            ValueKind::EulerAngles => Value::EulerAngles(EulerAngles::default()),
            ValueKind::Mat3x4 => Value::Mat3x4(Affine3A::IDENTITY),
            ValueKind::Mat4 => Value::Mat4(Mat4::IDENTITY),
        }
    }

    /// Whether a value of kind `self` can be converted into kind `to`.
    pub fn convertible_to(self, to: ValueKind) -> bool {
        if self == to {
            return true;
        }
        use ValueKind::*;
        let scalar = |k: ValueKind| {
            matches!(
                k,
                Bool | Int8 | UInt8 | Int16 | UInt16 | Int32 | UInt32 | Int64 | UInt64 | Float
                    | Double
            )
        };
        match (self, to) {
            (a, b) if scalar(a) && scalar(b) => true,
            (Vector2, Vector2i) | (Vector2i, Vector2) => true,
            (Vector3, Vector3i) | (Vector3i, Vector3) => true,
            (Vector4, Vector4i) | (Vector4i, Vector4) => true,
            (Quaternion, EulerAngles) | (EulerAngles, Quaternion) => true,
            (Mat3x4, Mat4) | (Mat4, Mat3x4) => true,
            _ => false,
        }
    }

    /// Convert `value` (expected to have kind `self`) into kind `to`. Returns `None`
    /// when `convertible_to` would be `false`; `debug_assert`s that `value.kind() ==
    /// self`, per spec §7's policy that internal-contract violations are a caller bug,
    /// not a reportable error.
    pub fn convert(self, value: &Value, to: ValueKind) -> Option<Value> {
        debug_assert_eq!(value.kind(), self);
        if to == self {
            return Some(*value);
        }
        if !self.convertible_to(to) {
            return None;
        }
        let as_f64 = scalar_as_f64(value)?;
        Some(match to {
            ValueKind::Bool => Value::Bool(as_f64 != 0.0),
            ValueKind::Int8 => Value::Int8(as_f64 as i8),
            ValueKind::UInt8 => Value::UInt8(as_f64 as u8),
            ValueKind::Int16 => Value::Int16(as_f64 as i16),
            ValueKind::UInt16 => Value::UInt16(as_f64 as u16),
            ValueKind::Int32 => Value::Int32(as_f64 as i32),
            ValueKind::UInt32 => Value::UInt32(as_f64 as u32),
            ValueKind::Int64 => Value::Int64(as_f64 as i64),
            ValueKind::UInt64 => Value::UInt64(as_f64 as u64),
            ValueKind::Float => Value::Float(as_f64 as f32),
            ValueKind::Double => Value::Double(as_f64),
            ValueKind::Vector2 => match value {
                Value::Vector2i(v) => Value::Vector2(Vec2::new(v.x as f32, v.y as f32)),
                _ => return None,
            },
            ValueKind::Vector2i => match value {
                Value::Vector2(v) => {
                    Value::Vector2i(IVec2::new(v.x.round() as i32, v.y.round() as i32))
                }
                _ => return None,
            },
            ValueKind::Vector3 => match value {
                Value::Vector3i(v) => Value::Vector3(Vec3::new(v.x as f32, v.y as f32, v.z as f32)),
                _ => return None,
            },
            ValueKind::Vector3i => match value {
                Value::Vector3(v) => Value::Vector3i(IVec3::new(
                    v.x.round() as i32,
                    v.y.round() as i32,
                    v.z.round() as i32,
                )),
                _ => return None,
            },
            ValueKind::Vector4 => match value {
                Value::Vector4i(v) => {
                    Value::Vector4(Vec4::new(v.x as f32, v.y as f32, v.z as f32, v.w as f32))
                }
                _ => return None,
            },
            ValueKind::Vector4i => match value {
                Value::Vector4(v) => Value::Vector4i(IVec4::new(
                    v.x.round() as i32,
                    v.y.round() as i32,
                    v.z.round() as i32,
                    v.w.round() as i32,
                )),
                _ => return None,
            },
            ValueKind::Quaternion => match value {
                Value::EulerAngles(e) => Value::Quaternion(Quat::from_euler(
                    glam::EulerRot::YXZ,
                    e.yaw,
                    e.pitch,
                    e.roll,
                )),
                _ => return None,
            },
            ValueKind::EulerAngles => match value {
                Value::Quaternion(q) => {
                    let (yaw, pitch, roll) = q.to_euler(glam::EulerRot::YXZ);
                    Value::EulerAngles(EulerAngles::new(pitch, yaw, roll))
                }
                _ => return None,
            },
            ValueKind::Mat3x4 => match value {
                Value::Mat4(m) => Value::Mat3x4(Affine3A::from_mat4(*m)),
                _ => return None,
            },
            ValueKind::Mat4 => match value {
                Value::Mat3x4(a) => Value::Mat4(Mat4::from(*a)),
                _ => return None,
            },
        })
    }

    /// Component-dispatched interpolation. `f` need not be clamped by the caller for
    /// normal in-range samples, but boundary callers may pass `0.0`/`1.0` directly.
    pub fn lerp(self, a: &Value, b: &Value, f: f32) -> Value {
        debug_assert_eq!(a.kind(), self);
        debug_assert_eq!(b.kind(), self);
        match (a, b) {
            (Value::Bool(a), Value::Bool(b)) => Value::Bool(if f < 0.5 { *a } else { *b }),
            (Value::Int8(a), Value::Int8(b)) => {
                Value::Int8(round_lerp(*a as f64, *b as f64, f) as i8)
            }
            (Value::UInt8(a), Value::UInt8(b)) => {
                Value::UInt8(round_lerp(*a as f64, *b as f64, f) as u8)
            }
            (Value::Int16(a), Value::Int16(b)) => {
                Value::Int16(round_lerp(*a as f64, *b as f64, f) as i16)
            }
            (Value::UInt16(a), Value::UInt16(b)) => {
                Value::UInt16(round_lerp(*a as f64, *b as f64, f) as u16)
            }
            (Value::Int32(a), Value::Int32(b)) => {
                Value::Int32(round_lerp(*a as f64, *b as f64, f) as i32)
            }
            (Value::UInt32(a), Value::UInt32(b)) => {
                Value::UInt32(round_lerp(*a as f64, *b as f64, f) as u32)
            }
            (Value::Int64(a), Value::Int64(b)) => {
                Value::Int64(round_lerp(*a as f64, *b as f64, f) as i64)
            }
            (Value::UInt64(a), Value::UInt64(b)) => {
                Value::UInt64(round_lerp(*a as f64, *b as f64, f) as u64)
            }
            (Value::Float(a), Value::Float(b)) => {
                Value::Float(crate::foundation::math::lerp_f32(*a, *b, f))
            }
            (Value::Double(a), Value::Double(b)) => Value::Double(a + (b - a) * f as f64),
            (Value::Vector2(a), Value::Vector2(b)) => Value::Vector2(a.lerp(*b, f)),
            (Value::Vector3(a), Value::Vector3(b)) => Value::Vector3(a.lerp(*b, f)),
            (Value::Vector4(a), Value::Vector4(b)) => Value::Vector4(a.lerp(*b, f)),
            (Value::Vector2i(a), Value::Vector2i(b)) => Value::Vector2i(IVec2::new(
                round_lerp(a.x as f64, b.x as f64, f) as i32,
                round_lerp(a.y as f64, b.y as f64, f) as i32,
            )),
            (Value::Vector3i(a), Value::Vector3i(b)) => Value::Vector3i(IVec3::new(
                round_lerp(a.x as f64, b.x as f64, f) as i32,
                round_lerp(a.y as f64, b.y as f64, f) as i32,
                round_lerp(a.z as f64, b.z as f64, f) as i32,
            )),
            (Value::Vector4i(a), Value::Vector4i(b)) => Value::Vector4i(IVec4::new(
                round_lerp(a.x as f64, b.x as f64, f) as i32,
                round_lerp(a.y as f64, b.y as f64, f) as i32,
                round_lerp(a.z as f64, b.z as f64, f) as i32,
                round_lerp(a.w as f64, b.w as f64, f) as i32,
            )),
            (Value::Quaternion(a), Value::Quaternion(b)) => {
                Value::Quaternion(a.normalize().slerp(b.normalize(), f))
            }
            (Value::EulerAngles(a), Value::EulerAngles(b)) => Value::EulerAngles(EulerAngles::new(
                crate::foundation::math::lerp_f32(a.pitch, b.pitch, f),
                crate::foundation::math::lerp_f32(a.yaw, b.yaw, f),
                crate::foundation::math::lerp_f32(a.roll, b.roll, f),
            )),
            (Value::Mat3x4(a), Value::Mat3x4(b)) => {
                let a = a.to_mat4().to_cols_array();
                let b = b.to_mat4().to_cols_array();
                let mut out = [0f32; 16];
                for i in 0..16 {
                    out[i] = crate::foundation::math::lerp_f32(a[i], b[i], f);
                }
                Value::Mat3x4(Affine3A::from_mat4(Mat4::from_cols_array(&out)))
            }
            (Value::Mat4(a), Value::Mat4(b)) => {
                let a = a.to_cols_array();
                let b = b.to_cols_array();
                let mut out = [0f32; 16];
                for i in 0..16 {
                    out[i] = crate::foundation::math::lerp_f32(a[i], b[i], f);
                }
                Value::Mat4(Mat4::from_cols_array(&out))
            }
            _ => {
                debug_assert!(false, "mismatched value kinds passed to ValueKind::lerp");
                *a
            }
        }
    }

    /// Read scalar component `idx` of `value` as `f64`. Used by `decimate` to reduce
    /// each component of a multi-component value independently.
    pub fn get_component(self, value: &Value, idx: usize) -> f64 {
        debug_assert!(idx < self.component_count());
        match value {
            Value::Bool(v) => {
                debug_assert_eq!(idx, 0);
                if *v { 1.0 } else { 0.0 }
            }
            Value::Int8(v) => *v as f64,
            Value::UInt8(v) => *v as f64,
            Value::Int16(v) => *v as f64,
            Value::UInt16(v) => *v as f64,
            Value::Int32(v) => *v as f64,
            Value::UInt32(v) => *v as f64,
            Value::Int64(v) => *v as f64,
            Value::UInt64(v) => *v as f64,
            Value::Float(v) => *v as f64,
            Value::Double(v) => *v,
            Value::Vector2(v) => [v.x, v.y][idx] as f64,
            Value::Vector3(v) => [v.x, v.y, v.z][idx] as f64,
            Value::Vector4(v) => [v.x, v.y, v.z, v.w][idx] as f64,
            Value::Vector2i(v) => [v.x, v.y][idx] as f64,
            Value::Vector3i(v) => [v.x, v.y, v.z][idx] as f64,
            Value::Vector4i(v) => [v.x, v.y, v.z, v.w][idx] as f64,
            Value::Quaternion(v) => [v.x, v.y, v.z, v.w][idx] as f64,
            Value::EulerAngles(e) => [e.pitch, e.yaw, e.roll][idx] as f64,
            Value::Mat3x4(m) => m.to_mat4().to_cols_array()[idx] as f64,
            Value::Mat4(m) => m.to_cols_array()[idx] as f64,
        }
    }

    /// Write scalar component `idx` of `value` (expected to have kind `self`).
    pub fn set_component(self, value: &mut Value, idx: usize, v: f64) {
        debug_assert!(idx < self.component_count());
        match value {
            Value::Bool(b) => *b = v != 0.0,
            Value::Int8(x) => *x = v as i8,
            Value::UInt8(x) => *x = v as u8,
            Value::Int16(x) => *x = v as i16,
            Value::UInt16(x) => *x = v as u16,
            Value::Int32(x) => *x = v as i32,
            Value::UInt32(x) => *x = v as u32,
            Value::Int64(x) => *x = v as i64,
            Value::UInt64(x) => *x = v as u64,
            Value::Float(x) => *x = v as f32,
            Value::Double(x) => *x = v,
            Value::Vector2(x) => set_at(&mut [&mut x.x, &mut x.y], idx, v as f32),
            Value::Vector3(x) => set_at(&mut [&mut x.x, &mut x.y, &mut x.z], idx, v as f32),
            Value::Vector4(x) => {
                set_at(&mut [&mut x.x, &mut x.y, &mut x.z, &mut x.w], idx, v as f32)
            }
            Value::Vector2i(x) => set_at_i(&mut [&mut x.x, &mut x.y], idx, v as i32),
            Value::Vector3i(x) => set_at_i(&mut [&mut x.x, &mut x.y, &mut x.z], idx, v as i32),
            Value::Vector4i(x) => {
                set_at_i(&mut [&mut x.x, &mut x.y, &mut x.z, &mut x.w], idx, v as i32)
            }
            Value::Quaternion(q) => {
                let mut arr = [q.x, q.y, q.z, q.w];
                arr[idx] = v as f32;
                *q = Quat::from_xyzw(arr[0], arr[1], arr[2], arr[3]);
            }
            Value::EulerAngles(e) => {
                set_at(&mut [&mut e.pitch, &mut e.yaw, &mut e.roll], idx, v as f32)
            }
            Value::Mat3x4(m) => {
                let mut arr = m.to_mat4().to_cols_array();
                arr[idx] = v as f32;
                *m = Affine3A::from_mat4(Mat4::from_cols_array(&arr));
            }
            Value::Mat4(m) => {
                let mut arr = m.to_cols_array();
                arr[idx] = v as f32;
                *m = Mat4::from_cols_array(&arr);
            }
        }
    }

    /// True when `a` and `b` agree on every component within `eps`, used by
    /// `Editor::optimize` (and the property test suite) as the interpolation-faithful
    /// equality check spec §4.5 calls for.
    pub fn approx_eq(self, a: &Value, b: &Value, eps: f32) -> bool {
        let eps = eps as f64;
        (0..self.component_count()).all(|i| (self.get_component(a, i) - self.get_component(b, i)).abs() <= eps)
    }
}

fn round_lerp(a: f64, b: f64, f: f32) -> f64 {
    crate::foundation::math::round_half_away(a + (b - a) * f as f64)
}

fn set_at(slots: &mut [&mut f32], idx: usize, v: f32) {
    *slots[idx] = v;
}

fn set_at_i(slots: &mut [&mut i32], idx: usize, v: i32) {
    *slots[idx] = v;
}

fn scalar_as_f64(value: &Value) -> Option<f64> {
    Some(match value {
        Value::Bool(v) => {
            if *v {
                1.0
            } else {
                0.0
            }
        }
        Value::Int8(v) => *v as f64,
        Value::UInt8(v) => *v as f64,
        Value::Int16(v) => *v as f64,
        Value::UInt16(v) => *v as f64,
        Value::Int32(v) => *v as f64,
        Value::UInt32(v) => *v as f64,
        Value::Int64(v) => *v as f64,
        Value::UInt64(v) => *v as f64,
        Value::Float(v) => *v as f64,
        Value::Double(v) => *v,
        _ => return None,
    })
}

#[cfg(test)]
#[path = "../tests/unit/value.rs"]
mod tests;
