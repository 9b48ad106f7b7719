use super::*;
use crate::path::ChannelPath;
use crate::value::ValueKind;

fn linear_channel() -> Channel {
    let mut c = Channel::new(ChannelPath::parse("panima:obj/scale"), ValueKind::Float);
    c.add_value(0.0, Value::Float(0.0));
    c.add_value(1.0, Value::Float(10.0));
    c.add_value(2.0, Value::Float(0.0));
    c
}

#[test]
fn new_channel_is_empty_with_default_interpolation_and_time_frame() {
    let c = Channel::new(ChannelPath::empty(), ValueKind::Float);
    assert!(c.is_empty());
    assert_eq!(c.interpolation(), InterpolationMode::Linear);
    assert_eq!(c.time_frame(), TimeFrame::default());
    assert_eq!(c.min_time(), None);
    assert_eq!(c.max_time(), None);
}

#[test]
fn sample_on_empty_channel_is_an_error() {
    let c = Channel::new(ChannelPath::empty(), ValueKind::Float);
    assert!(matches!(c.sample(0.0), Err(ChannelError::EmptyChannel)));
}

// Scenario S1 (spec §8): times [0,1,2], values [0,10,0].
#[test]
fn scenario_s1_sample_matches_linear_interpolation() {
    let c = linear_channel();
    assert_eq!(c.sample(0.5).unwrap(), Value::Float(5.0));
    assert_eq!(c.sample(1.5).unwrap(), Value::Float(5.0));
    assert_eq!(c.sample(-1.0).unwrap(), Value::Float(0.0));
    assert_eq!(c.sample(3.0).unwrap(), Value::Float(0.0));
}

#[test]
fn effective_time_frame_resolves_unbounded_duration_to_last_keyframe() {
    let c = linear_channel();
    let frame = c.effective_time_frame();
    assert_eq!(frame.duration, 2.0);
}

#[test]
fn effective_time_frame_on_empty_channel_defaults_to_zero() {
    let c = Channel::new(ChannelPath::empty(), ValueKind::Float);
    assert_eq!(c.effective_time_frame().duration, 0.0);
}

#[test]
fn time_frame_offset_and_scale_affect_sampling() {
    let mut c = linear_channel();
    c.set_time_frame(TimeFrame {
        start_offset: 1.0,
        scale: 1.0,
        duration: -1.0,
    });
    // world t=1.5 maps to local t=0.5 -> halfway between keyframes 0 and 1.
    assert_eq!(c.sample(1.5).unwrap(), Value::Float(5.0));
}

#[test]
fn sample_raw_ignores_time_frame() {
    let mut c = linear_channel();
    c.set_time_frame(TimeFrame {
        start_offset: 1.0,
        scale: 1.0,
        duration: -1.0,
    });
    assert_eq!(c.sample_raw(0.5), Some(Value::Float(5.0)));
}

#[test]
fn validate_passes_for_well_ordered_times() {
    let c = linear_channel();
    assert!(c.validate().is_ok());
}

#[test]
fn validate_still_passes_after_edits() {
    let mut c = linear_channel();
    c.add_value(0.5, Value::Float(7.0));
    c.clear_range(0.2, 0.8, false);
    assert!(c.validate().is_ok());
}

#[cfg(feature = "expr")]
#[test]
fn attached_expression_rewrites_sampled_value() {
    let mut c = linear_channel();
    c.set_value_expression("value * 2").unwrap();
    assert_eq!(c.sample(0.5).unwrap(), Value::Float(10.0));
}

#[cfg(feature = "expr")]
#[test]
fn clear_value_expression_detaches_it() {
    let mut c = linear_channel();
    c.set_value_expression("value * 2").unwrap();
    assert!(c.has_value_expression());
    c.clear_value_expression();
    assert!(!c.has_value_expression());
    assert_eq!(c.sample(0.5).unwrap(), Value::Float(5.0));
}

#[cfg(feature = "expr")]
#[test]
fn failed_expression_compile_leaves_previous_expression_attached() {
    let mut c = linear_channel();
    c.set_value_expression("value * 2").unwrap();
    assert!(c.set_value_expression("(((").is_err());
    assert!(c.has_value_expression());
    assert_eq!(c.sample(0.5).unwrap(), Value::Float(10.0));
}

#[test]
fn clone_deep_copies_keyframes() {
    let original = linear_channel();
    let mut cloned = original.clone();
    cloned.add_value(0.5, Value::Float(99.0));
    assert_eq!(original.len(), 3);
    assert_eq!(cloned.len(), 4);
}

#[cfg(feature = "expr")]
#[test]
fn clone_reattaches_expression_against_the_clone() {
    let mut original = linear_channel();
    original.set_value_expression("value * 2").unwrap();
    let cloned = original.clone();
    assert!(cloned.has_value_expression());
    assert_eq!(cloned.sample(0.5).unwrap(), Value::Float(10.0));
}

#[test]
fn display_includes_target_kind_and_len() {
    let c = linear_channel();
    let s = format!("{c}");
    assert!(s.contains("obj/scale"));
    assert!(s.contains("3 samples"));
}
