/// Signed distance of `value` outside the closed interval `[min, max]`.
///
/// Returns `value - min` (negative) below the interval, `value - max`
/// (positive) above it and `0.0` inside, including both bounds.
///
/// Callers must keep `min <= max`. An inverted interval is reported at
/// ERROR severity and the below/above checks still run in that order, so
/// the result is not meaningful.
///
/// # Example
///
/// ```
/// use focus_camera_rig::focuscam::utils::out_of_range_distance;
///
/// assert_eq!(out_of_range_distance(-90.0, 90.0, 100.0), 10.0);
/// assert_eq!(out_of_range_distance(-90.0, 90.0, -95.0), -5.0);
/// assert_eq!(out_of_range_distance(-90.0, 90.0, 0.0), 0.0);
/// ```
pub fn out_of_range_distance(min: f32, max: f32, value: f32) -> f32 {
    if min > max {
        crate::engine_error!(
            "focuscam::utils",
            "out_of_range_distance: min ({}) can not be greater than max ({})",
            min, max
        );
    }

    if value < min {
        value - min
    } else if value > max {
        value - max
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
