use super::*;
use glam::{IVec2, Quat, Vec3};

#[test]
fn lerp_float_is_linear() {
    let a = Value::Float(0.0);
    let b = Value::Float(10.0);
    assert_eq!(ValueKind::Float.lerp(&a, &b, 0.25), Value::Float(2.5));
}

#[test]
fn lerp_int_rounds_half_away_from_zero() {
    let a = Value::Int32(0);
    let b = Value::Int32(3);
    // 0 + (3-0)*0.5 = 1.5 -> rounds to 2
    assert_eq!(ValueKind::Int32.lerp(&a, &b, 0.5), Value::Int32(2));
}

#[test]
fn lerp_bool_steps_at_midpoint() {
    let a = Value::Bool(false);
    let b = Value::Bool(true);
    assert_eq!(ValueKind::Bool.lerp(&a, &b, 0.49), Value::Bool(false));
    assert_eq!(ValueKind::Bool.lerp(&a, &b, 0.51), Value::Bool(true));
}

#[test]
fn lerp_quaternion_takes_shortest_arc() {
    let a = Value::Quaternion(Quat::IDENTITY);
    let b = Value::Quaternion(Quat::from_rotation_y(std::f32::consts::PI));
    let mid = ValueKind::Quaternion.lerp(&a, &b, 0.5);
    if let Value::Quaternion(q) = mid {
        assert!((q.length() - 1.0).abs() < 1e-4);
    } else {
        panic!("expected quaternion");
    }
}

#[test]
fn vector3_components_round_trip() {
    let kind = ValueKind::Vector3;
    let mut v = Value::Vector3(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(kind.get_component(&v, 1), 2.0);
    kind.set_component(&mut v, 1, 9.0);
    assert_eq!(kind.get_component(&v, 1), 9.0);
}

#[test]
fn convert_vector2_to_vector2i_rounds() {
    let v = Value::Vector2(glam::Vec2::new(1.6, -1.6));
    let converted = ValueKind::Vector2.convert(&v, ValueKind::Vector2i);
    assert_eq!(converted, Some(Value::Vector2i(IVec2::new(2, -2))));
}

#[test]
fn convert_quaternion_euler_round_trips_identity() {
    let q = Value::Quaternion(Quat::IDENTITY);
    let e = ValueKind::Quaternion.convert(&q, ValueKind::EulerAngles).unwrap();
    let back = ValueKind::EulerAngles.convert(&e, ValueKind::Quaternion).unwrap();
    if let Value::Quaternion(back) = back {
        assert!((back.dot(Quat::IDENTITY).abs() - 1.0).abs() < 1e-4);
    } else {
        panic!("expected quaternion");
    }
}

#[test]
fn incompatible_conversion_is_none() {
    let v = Value::Vector2(glam::Vec2::ZERO);
    assert_eq!(ValueKind::Vector2.convert(&v, ValueKind::Vector3), None);
    assert!(!ValueKind::Vector2.convertible_to(ValueKind::Vector3));
}

#[test]
fn approx_eq_is_per_component() {
    let a = Value::Vector2(glam::Vec2::new(1.0, 1.0));
    let b = Value::Vector2(glam::Vec2::new(1.0005, 1.0));
    assert!(ValueKind::Vector2.approx_eq(&a, &b, 0.001));
    let c = Value::Vector2(glam::Vec2::new(1.01, 1.0));
    assert!(!ValueKind::Vector2.approx_eq(&a, &c, 0.001));
}

#[test]
fn identity_matches_kind() {
    assert_eq!(ValueKind::Bool.identity().kind(), ValueKind::Bool);
    assert_eq!(ValueKind::Mat4.identity(), Value::Mat4(glam::Mat4::IDENTITY));
}

#[test]
fn matrix_lerp_is_componentwise() {
    let a = Value::Mat4(glam::Mat4::IDENTITY);
    let b = Value::Mat4(glam::Mat4::from_scale(Vec3::splat(2.0)));
    let mid = ValueKind::Mat4.lerp(&a, &b, 0.5);
    if let Value::Mat4(m) = mid {
        assert!((m.x_axis.x - 1.5).abs() < 1e-5);
    } else {
        panic!("expected matrix");
    }
}
