///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// DistancePolicy
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Rule converting raw pointer pixels into rotation degrees. At most one
/// bound is ever active; the builder setters enforce the mutual exclusion
/// eagerly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DistancePolicy {
    /// Raw pixel values stand in for degrees unchanged.
    #[default]
    Unbounded,
    /// One full drag across the measured travel span yields `count * 180`
    /// degrees.
    Count(f64),
    /// Every `distance` pixels of drag yield 180 degrees.
    Distance(f64),
}

impl DistancePolicy {
    pub fn is_bounded(&self) -> bool {
        !matches!(self, DistancePolicy::Unbounded)
    }

    /// Only the count bound normalizes against a measured travel span; the
    /// distance bound carries its own scale.
    pub fn uses_travel(&self) -> bool {
        matches!(self, DistancePolicy::Count(_))
    }

    /// Converts a raw pixel coordinate into degree units. Until a travel
    /// span has been measured the count bound passes the raw value through,
    /// so session anchors can be stored before the first move fixes the
    /// span.
    pub fn to_degrees(&self, raw: f64, max_travel: Option<f64>) -> f64 {
        match self {
            DistancePolicy::Unbounded => raw,
            DistancePolicy::Count(count) => match max_travel {
                Some(travel) => raw * count * 180.0 / travel,
                None => raw,
            },
            DistancePolicy::Distance(distance) => raw * 180.0 / distance,
        }
    }
}

/// The pixel span a drag can cover before running out of screen, fixed from
/// the first observed motion direction: toward the far edge it is the
/// remaining distance, toward the near edge it is the anchor itself.
pub fn travel_span(anchor: f64, current: f64, extent: f64) -> f64 {
    if current - anchor > 0.0 {
        extent - anchor
    } else {
        anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unbounded_is_identity() {
        for raw in [-500.0, -1.5, 0.0, 33.3, 1920.0] {
            assert_eq!(DistancePolicy::Unbounded.to_degrees(raw, None), raw);
            assert_eq!(DistancePolicy::Unbounded.to_degrees(raw, Some(100.0)), raw);
        }
    }

    #[test]
    fn count_maps_full_travel_to_count_half_turns() {
        let policy = DistancePolicy::Count(2.0);
        assert_relative_eq!(policy.to_degrees(500.0, Some(500.0)), 2.0 * 180.0);
        assert_relative_eq!(policy.to_degrees(250.0, Some(500.0)), 180.0);
    }

    #[test]
    fn count_without_travel_passes_raw_through() {
        assert_eq!(DistancePolicy::Count(2.0).to_degrees(500.0, None), 500.0);
    }

    #[test]
    fn distance_scales_by_half_turn_per_distance() {
        let policy = DistancePolicy::Distance(90.0);
        assert_relative_eq!(policy.to_degrees(45.0, None), 90.0);
        assert_relative_eq!(policy.to_degrees(90.0, None), 180.0);
    }

    #[test]
    fn travel_span_follows_motion_direction() {
        // Moving toward the far edge leaves extent - anchor of room.
        assert_eq!(travel_span(500.0, 750.0, 1000.0), 500.0);
        // Moving back toward the origin leaves the anchor itself.
        assert_eq!(travel_span(500.0, 400.0, 1000.0), 500.0);
        assert_eq!(travel_span(200.0, 100.0, 1000.0), 200.0);
    }

    #[test]
    fn only_count_consumes_travel() {
        assert!(DistancePolicy::Count(1.0).uses_travel());
        assert!(!DistancePolicy::Distance(50.0).uses_travel());
        assert!(!DistancePolicy::Unbounded.uses_travel());
        assert!(DistancePolicy::Distance(50.0).is_bounded());
        assert!(!DistancePolicy::Unbounded.is_bounded());
    }
}
