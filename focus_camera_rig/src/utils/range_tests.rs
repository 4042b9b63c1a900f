use super::*;

// ============================================================================
// Inside the interval
// ============================================================================

#[test]
fn test_inside_is_zero() {
    for value in [-90.0, -45.5, 0.0, 12.25, 89.999, 90.0] {
        assert_eq!(out_of_range_distance(-90.0, 90.0, value), 0.0, "value {}", value);
    }
}

#[test]
fn test_bounds_are_inclusive() {
    assert_eq!(out_of_range_distance(-60.0, 60.0, -60.0), 0.0);
    assert_eq!(out_of_range_distance(-60.0, 60.0, 60.0), 0.0);
}

#[test]
fn test_degenerate_interval() {
    assert_eq!(out_of_range_distance(5.0, 5.0, 5.0), 0.0);
    assert_eq!(out_of_range_distance(5.0, 5.0, 7.0), 2.0);
    assert_eq!(out_of_range_distance(5.0, 5.0, 1.0), -4.0);
}

// ============================================================================
// Outside the interval
// ============================================================================

#[test]
fn test_above_max_is_positive() {
    assert_eq!(out_of_range_distance(-90.0, 90.0, 100.0), 10.0);
    assert_eq!(out_of_range_distance(0.0, 1.0, 3.5), 2.5);
}

#[test]
fn test_below_min_is_negative() {
    assert_eq!(out_of_range_distance(-90.0, 90.0, -95.0), -5.0);
    assert_eq!(out_of_range_distance(10.0, 20.0, 0.0), -10.0);
}

#[test]
fn test_continuous_at_bounds() {
    let eps = 1e-3;
    assert!(out_of_range_distance(-90.0, 90.0, 90.0 + eps).abs() <= eps * 1.01);
    assert!(out_of_range_distance(-90.0, 90.0, -90.0 - eps).abs() <= eps * 1.01);
}

// ============================================================================
// Inverted interval
// ============================================================================

#[test]
fn test_inverted_interval_still_returns() {
    // Diagnostic only: below-min wins over above-max.
    assert_eq!(out_of_range_distance(30.0, -30.0, 0.0), -30.0);
    assert_eq!(out_of_range_distance(30.0, -30.0, 40.0), 70.0);
}
