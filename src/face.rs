///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Face visibility
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::Data;

use crate::angle::is_front_facing;
use crate::RotationAxis;

/// Which side of a front/back element pair is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Data)]
pub enum Face {
    Front,
    Back,
}

/// Resolves which face should be visible for the given rotation angles.
///
/// Single-axis modes classify the driven axis and invert the answer when the
/// other axis has rotated out of its own front range. `Both` mode requires
/// the two angles to land in matching quadrant pairs, enumerated as open
/// intervals, so the exact 90°/270° boundaries resolve to `Back` there.
pub fn resolve(x_degree: f64, y_degree: f64, axis: RotationAxis) -> Face {
    let front = match axis {
        RotationAxis::X => {
            let mut front = is_front_facing(x_degree);
            if !is_front_facing(y_degree) {
                front = !front;
            }
            front
        }
        RotationAxis::Y => {
            let mut front = is_front_facing(y_degree);
            if !is_front_facing(x_degree) {
                front = !front;
            }
            front
        }
        RotationAxis::Both => {
            let x = x_degree;
            let y = y_degree;
            within(x, -90.0, 90.0) && within(y, -90.0, 90.0)
                || within(x, -90.0, 90.0) && within(y, -360.0, -270.0)
                || within(x, -360.0, -270.0) && within(y, -90.0, 90.0)
                || within(x, -90.0, 90.0) && within(y, 270.0, 360.0)
                || within(x, 270.0, 360.0) && within(y, -90.0, 90.0)
                || within(x, 90.0, 270.0) && within(y, -270.0, -90.0)
                || within(x, -270.0, -90.0) && within(y, 90.0, 270.0)
                || within(x, 90.0, 270.0) && within(y, 90.0, 270.0)
                || within(x, -270.0, -90.0) && within(y, -270.0, -90.0)
        }
    };

    if front {
        Face::Front
    } else {
        Face::Back
    }
}

fn within(value: f64, low: f64, high: f64) -> bool {
    value > low && value < high
}
