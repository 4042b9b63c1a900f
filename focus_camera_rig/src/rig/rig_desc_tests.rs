use super::*;

#[test]
fn test_default_desc_is_valid() {
    let desc = RigDesc::default();
    assert!(desc.validate().is_ok());
    assert_eq!(desc.horizontal.min_angle, -90.0);
    assert_eq!(desc.vertical.damping_distance, 30.0);
    assert_eq!(desc.zoom.min_zoom, 30.0);
    assert_eq!(desc.zoom.max_zoom, 100.0);
    assert!(desc.axis_inversion.is_empty());
}

#[test]
fn test_platform_zoom_mode_on_desktop() {
    if cfg!(not(any(target_os = "android", target_os = "ios"))) {
        assert_eq!(ZoomMode::for_platform(), ZoomMode::Scroll);
    }
}

#[test]
fn test_constraints_disabled_only_when_both_zero() {
    let mut axis = AxisDesc::default();
    assert!(axis.constraints_enabled());

    axis.min_angle = 0.0;
    assert!(axis.constraints_enabled());

    axis.max_angle = 0.0;
    assert!(!axis.constraints_enabled());
}

#[test]
fn test_damping_window_is_inset() {
    let axis = AxisDesc::default();
    assert_eq!(axis.damping_window(), (-60.0, 60.0));
}

#[test]
fn test_clamp_depth() {
    let zoom = ZoomDesc::default();
    assert_eq!(zoom.clamp_depth(-150.0), -100.0);
    assert_eq!(zoom.clamp_depth(-10.0), -30.0);
    assert_eq!(zoom.clamp_depth(-55.0), -55.0);
}

#[test]
fn test_clamp_depth_unvalidated_bounds_never_panic() {
    let inverted = ZoomDesc { min_zoom: 100.0, max_zoom: 30.0, ..ZoomDesc::default() };
    assert_eq!(inverted.clamp_depth(-50.0), -100.0);

    let nan = ZoomDesc { max_zoom: f32::NAN, ..ZoomDesc::default() };
    assert_eq!(nan.clamp_depth(-500.0), -500.0);
    assert_eq!(nan.clamp_depth(-10.0), -30.0);
}

#[test]
fn test_axis_inversion_flags() {
    let both = AxisInversion::X | AxisInversion::Y;
    assert!(both.contains(AxisInversion::X));
    assert!(!AxisInversion::Y.contains(AxisInversion::X));
}

// ============================================================================
// Validation failures
// ============================================================================

fn assert_invalid(desc: RigDesc) {
    assert!(matches!(desc.validate(), Err(Error::InvalidConfig(_))), "{:?}", desc);
}

#[test]
fn test_inverted_zoom_range_rejected() {
    let mut desc = RigDesc::default();
    desc.zoom.min_zoom = 120.0;
    assert_invalid(desc);
}

#[test]
fn test_negative_min_zoom_rejected() {
    let mut desc = RigDesc::default();
    desc.zoom.min_zoom = -1.0;
    assert_invalid(desc);
}

#[test]
fn test_inverted_constraints_rejected() {
    let mut desc = RigDesc::default();
    desc.vertical.min_angle = 45.0;
    desc.vertical.max_angle = -45.0;
    assert_invalid(desc);
}

#[test]
fn test_damping_out_of_unit_range_rejected() {
    let mut desc = RigDesc::default();
    desc.horizontal.rotation_damping = 1.5;
    assert_invalid(desc);
}

#[test]
fn test_non_finite_rejected() {
    let mut desc = RigDesc::default();
    desc.horizontal.target_rotation_speed = f32::NAN;
    assert_invalid(desc);

    let mut desc = RigDesc::default();
    desc.zoom.speed = f32::INFINITY;
    assert_invalid(desc);
}

#[test]
fn test_damping_margin_wider_than_window_rejected() {
    let mut desc = RigDesc::default();
    desc.horizontal.min_angle = -20.0;
    desc.horizontal.max_angle = 20.0;
    desc.horizontal.damping_distance = 30.0;
    assert_invalid(desc);

    desc.horizontal.damping_distance = 0.0;
    assert!(desc.validate().is_ok());
}
