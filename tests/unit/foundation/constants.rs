use super::*;

#[test]
fn epsilons_are_small_and_positive() {
    assert!(TIME_EPS > 0.0 && TIME_EPS < 0.01);
    assert!(VALUE_EPS > 0.0 && VALUE_EPS < 0.01);
    assert!(OPT_EPS > 0.0 && OPT_EPS < 0.01);
    assert!(DECIMATE_DEFAULT_ERROR > 0.0);
}
