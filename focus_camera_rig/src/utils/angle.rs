use glam::Vec3;

/// Unsigned angle between two vectors in degrees, in `[0, 180]`.
///
/// Returns `0.0` when either vector is (nearly) zero length instead of NaN.
pub fn angle_degrees(from: Vec3, to: Vec3) -> f32 {
    let denominator = (from.length_squared() * to.length_squared()).sqrt();
    if denominator < 1e-15 {
        return 0.0;
    }

    let cos = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

#[cfg(test)]
#[path = "angle_tests.rs"]
mod tests;
