///////////////////////////////////////////////////////////////////////////////////////////////////
use std::str::FromStr;

use druid::Data;
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Modules
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub mod angle;
pub mod controller;
pub mod error;
pub mod face;
pub mod policy;
pub mod rotatable;
pub mod tween;

pub use controller::{
    RotatableController, RotateTo, ORIENTATION_CHANGED, ROTATE_TO, SET_DIRECTION,
    SET_TOUCH_ENABLED, TAKE_ATTENTION,
};
pub use error::ConfigError;
pub use face::Face;
pub use policy::DistancePolicy;
pub use rotatable::{
    Rotatable, RotatableBuilder, RotatableData, RotationListener, RotationState, ScreenExtent,
};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationAxis
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Which axis (or both) responds to pointer movement. X rotation is driven
/// by vertical drags, Y rotation by horizontal drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Data)]
pub enum RotationAxis {
    X,
    Y,
    Both,
}

impl RotationAxis {
    pub fn rotates_x(self) -> bool {
        matches!(self, RotationAxis::X | RotationAxis::Both)
    }

    pub fn rotates_y(self) -> bool {
        matches!(self, RotationAxis::Y | RotationAxis::Both)
    }
}

impl FromStr for RotationAxis {
    type Err = ConfigError;

    /// Parses a direction from a settings form. Anything outside x/y/both
    /// is rejected without touching any state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(RotationAxis::X),
            "y" => Ok(RotationAxis::Y),
            "both" => Ok(RotationAxis::Both),
            other => Err(ConfigError::InvalidDirection(other.to_string())),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Orientation
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Device orientation as reported by the host. Square and unknown screens
/// are treated like portrait when reordering the measured extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Data)]
pub enum Orientation {
    Portrait,
    Landscape,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_selection() {
        assert!(RotationAxis::X.rotates_x());
        assert!(!RotationAxis::X.rotates_y());
        assert!(RotationAxis::Y.rotates_y());
        assert!(!RotationAxis::Y.rotates_x());
        assert!(RotationAxis::Both.rotates_x() && RotationAxis::Both.rotates_y());
    }

    #[test]
    fn direction_parsing_rejects_unknown_values() {
        assert_eq!("x".parse::<RotationAxis>(), Ok(RotationAxis::X));
        assert_eq!("Both".parse::<RotationAxis>(), Ok(RotationAxis::Both));
        assert_eq!(
            "diagonal".parse::<RotationAxis>(),
            Err(ConfigError::InvalidDirection("diagonal".to_string()))
        );
    }
}
