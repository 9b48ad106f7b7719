use super::*;

#[test]
fn find_empty_returns_sentinel() {
    assert_eq!(find(&[], 1.0), EMPTY_SENTINEL);
}

#[test]
fn find_before_first_clamps_to_start() {
    assert_eq!(find(&[1.0, 2.0, 3.0], 0.0), (0, 0, 0.0));
}

#[test]
fn find_after_last_clamps_to_end() {
    assert_eq!(find(&[1.0, 2.0, 3.0], 5.0), (2, 2, 0.0));
}

#[test]
fn find_interpolates_between_bracket() {
    let (i, j, f) = find(&[0.0, 1.0, 2.0], 0.5);
    assert_eq!((i, j), (0, 1));
    assert!((f - 0.5).abs() < 1e-6);
}

#[test]
fn find_at_exact_sample_lands_on_left_bracket() {
    let (i, j, f) = find(&[0.0, 1.0, 2.0], 1.0);
    assert_eq!((i, j), (1, 2));
    assert_eq!(f, 0.0);
}

#[test]
fn find_with_pivot_matches_binary_search() {
    let times = [0.0, 1.0, 2.0, 3.0, 4.0];
    for t in [0.3, 1.7, 2.2, 3.9] {
        let direct = find(&times, t);
        let pivoted = find_with_pivot(&times, t, 0, 0);
        assert_eq!(direct, pivoted, "mismatch at t={t}");
    }
}

#[test]
fn find_with_pivot_falls_back_after_two_hops() {
    let times = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    // Pivot far from the target forces > 2 hops; must still match find().
    assert_eq!(find_with_pivot(&times, 4.5, 0, 0), find(&times, 4.5));
}

#[test]
fn find_value_index_snaps_to_nearest_within_eps() {
    let times = [0.0, 1.0, 2.0];
    assert_eq!(find_value_index(&times, 1.0005, 0.001), Some(1));
    assert_eq!(find_value_index(&times, 1.5, 0.001), None);
}

#[test]
fn time_frame_maps_and_clamps_to_duration() {
    let tf = TimeFrame {
        start_offset: 1.0,
        scale: 2.0,
        duration: 1.0,
    };
    assert_eq!(tf.map(1.0), 0.0);
    assert_eq!(tf.map(1.5), 1.0);
    assert_eq!(tf.map(10.0), 2.0);
}

#[test]
fn time_frame_effective_resolves_unbounded_duration() {
    let tf = TimeFrame::default();
    assert_eq!(tf.effective(Some(5.0)).duration, 5.0);
    assert_eq!(tf.effective(None).duration, 0.0);
}
