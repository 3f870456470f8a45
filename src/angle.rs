///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Degree arithmetic
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Wraps an accumulated rotation into `[-360, 360]`, keeping the sign of the
/// dividend so a rotation can cross zero and wrap negative.
pub fn wrap_degrees(degree: f64) -> f64 {
    degree % 360.0
}

/// Whether a single-axis angle is within 90° of a multiple of 360°, i.e. the
/// element presents its front along that axis. Boundaries are inclusive.
pub fn is_front_facing(degree: f64) -> bool {
    (-360.0..=-270.0).contains(&degree)
        || (-90.0..=90.0).contains(&degree)
        || (270.0..=360.0).contains(&degree)
}

/// The fit target for a released rotation: the nearest of
/// {-360, -180, 0, 180, 360} by quadrant. The comparisons are strict, so the
/// exact boundary angles (-270, -90, 90, 270) fall through to the final
/// branch and snap to 360.
pub fn snap_target(degree: f64) -> f64 {
    if degree < -270.0 {
        -360.0
    } else if degree > -270.0 && degree < -90.0 {
        -180.0
    } else if degree > -90.0 && degree < 90.0 {
        0.0
    } else if degree > 90.0 && degree < 270.0 {
        180.0
    } else {
        360.0
    }
}
