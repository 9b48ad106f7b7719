//! A scaled rigid transform, applied in place to `Vector3`/`Quaternion` channels by
//! `Channel::transform_global` (spec §4.5). All other value kinds are left untouched.

use glam::{Quat, Vec3};

use crate::value::Value;

/// Translation + rotation + uniform scale, applied as `p' = translation + rotation *
/// (p * scale)` to point-valued channels and `q' = rotation * q` to rotation-valued
/// ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledTransform {
    /// World-space translation.
    pub translation: Vec3,
    /// World-space rotation.
    pub rotation: Quat,
    /// Uniform scale applied to points before rotation/translation.
    pub scale: f32,
}

impl Default for ScaledTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl ScaledTransform {
    /// Apply this transform to `value` in place. `Vector3` is treated as a point,
    /// `Quaternion` as a rotation to compose with; every other kind is a no-op.
    pub fn apply(&self, value: &mut Value) {
        match value {
            Value::Vector3(p) => {
                *p = self.translation + self.rotation * (*p * self.scale);
            }
            Value::Quaternion(q) => {
                *q = (self.rotation * *q).normalize();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/transform.rs"]
mod tests;
