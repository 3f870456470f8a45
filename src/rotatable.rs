///////////////////////////////////////////////////////////////////////////////////////////////////
use std::time::Duration;

use druid::{Point, Size};

use crate::angle;
use crate::error::ConfigError;
use crate::face::{self, Face};
use crate::policy::{self, DistancePolicy};
use crate::tween::{Tween, DEFAULT_ROTATE_ANIM_TIME, FIT_ANIM_TIME};
use crate::{Orientation, RotationAxis};
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotatableData
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Capability set the host element must expose: rotation properties per
/// axis, the transform pivot, and which face of a front/back pair is
/// showing. A druid app implements this on its `Data` struct; tests
/// implement it on a plain struct.
pub trait RotatableData {
    fn get_rotation_x(&self) -> f64;
    fn set_rotation_x(&mut self, degree: f64);
    fn get_rotation_y(&self) -> f64;
    fn set_rotation_y(&mut self, degree: f64);
    fn get_pivot(&self) -> Point;
    fn set_pivot(&mut self, pivot: Point);
    fn get_visible_face(&self) -> Face;
    fn set_visible_face(&mut self, face: Face);
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationListener
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Observer notified after every rotation-changing step: each pointer move,
/// each completed programmatic rotation, and the end of the release fit.
pub trait RotationListener {
    fn on_rotation_changed(&mut self, x_degree: f64, y_degree: f64);
}

impl<F: FnMut(f64, f64)> RotationListener for F {
    fn on_rotation_changed(&mut self, x_degree: f64, y_degree: f64) {
        self(x_degree, y_degree)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// State records
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Accumulated rotation per axis plus the lazily measured travel spans.
/// Angles are wrapped into `[-360, 360]` after every update. Travel spans
/// are computed at most once per drag session and cleared on release and on
/// orientation change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub current_x: f64,
    pub current_y: f64,
    /// Horizontal span, drives Y rotation.
    pub max_travel_x: Option<f64>,
    /// Vertical span, drives X rotation.
    pub max_travel_y: Option<f64>,
}

/// Per-drag anchor and current position in policy-adjusted degree units.
/// The anchor advances to the current position on every move.
#[derive(Debug, Clone, Copy, Default)]
struct TouchSession {
    anchor_x: f64,
    anchor_y: f64,
    current_x: f64,
    current_y: f64,
}

/// Screen dimensions the travel spans are measured against, captured once
/// from the host window and reordered on orientation change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenExtent {
    pub width: f64,
    pub height: f64,
}

impl ScreenExtent {
    /// Landscape keeps the larger dimension as width; portrait, square, and
    /// unknown all keep the smaller one.
    pub fn oriented(self, orientation: Orientation) -> Self {
        let larger = self.width.max(self.height);
        let smaller = self.width.min(self.height);
        match orientation {
            Orientation::Landscape => Self {
                width: larger,
                height: smaller,
            },
            Orientation::Portrait | Orientation::Other => Self {
                width: smaller,
                height: larger,
            },
        }
    }
}

impl From<Size> for ScreenExtent {
    fn from(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Animation
///
///////////////////////////////////////////////////////////////////////////////////////////////////

enum AnimationKind {
    Fit,
    Programmatic,
    AttentionOut,
    AttentionReturn,
}

/// Completion callback for a programmatic rotation, invoked with the final
/// angles.
pub type RotateDone = Box<dyn FnOnce(f64, f64)>;

struct Animation {
    x: Option<Tween>,
    y: Option<Tween>,
    kind: AnimationKind,
    on_done: Option<RotateDone>,
}

impl Animation {
    fn is_finished(&self) -> bool {
        self.x.as_ref().map_or(true, Tween::is_finished)
            && self.y.as_ref().map_or(true, Tween::is_finished)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Rotatable
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// The touch-to-rotation state machine. Interprets pointer events into
/// angle deltas under the active distance policy, keeps the accumulated
/// rotation wrapped, resolves front/back visibility, and produces the fit
/// animation on release.
///
/// All operations run on the host event thread; a programmatic rotation
/// issued while a drag is in flight (or the reverse) is last-write-wins on
/// the animation slot, not a coordinated interleaving.
pub struct Rotatable {
    axis: RotationAxis,
    policy: DistancePolicy,
    swap_faces: bool,
    touch_enabled: bool,
    pivot_override: Option<Point>,
    default_pivot: Option<Point>,
    state: RotationState,
    session: Option<TouchSession>,
    extent: Option<ScreenExtent>,
    animation: Option<Animation>,
    listener: Option<Box<dyn RotationListener>>,
}

impl Rotatable {
    pub fn builder() -> RotatableBuilder {
        RotatableBuilder::default()
    }

    pub fn direction(&self) -> RotationAxis {
        self.axis
    }

    /// Direction changes take the typed axis, so there is no invalid value
    /// to reject here; string input goes through `RotationAxis::from_str`.
    pub fn set_direction(&mut self, axis: RotationAxis) {
        self.axis = axis;
    }

    pub fn is_touch_enabled(&self) -> bool {
        self.touch_enabled
    }

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.touch_enabled = enabled;
    }

    pub fn rotation_state(&self) -> RotationState {
        self.state
    }

    pub fn measured_extent(&self) -> Option<ScreenExtent> {
        self.extent
    }

    /// Begins a drag session: stores the policy-adjusted anchor for each
    /// enabled axis. No observable side effect beyond session state.
    pub fn on_pointer_down(&mut self, pos: Point, data: &mut impl RotatableData) {
        if !self.touch_enabled {
            return;
        }
        self.ensure_attached(data);

        let mut session = TouchSession::default();
        if self.axis.rotates_x() {
            session.anchor_y = self.policy.to_degrees(pos.y, self.state.max_travel_y);
        }
        if self.axis.rotates_y() {
            session.anchor_x = self.policy.to_degrees(pos.x, self.state.max_travel_x);
        }
        self.session = Some(session);
    }

    /// Advances the drag: fixes the travel span on the first move under a
    /// count bound, converts the new position into degrees, applies the
    /// per-axis delta, re-resolves face visibility, and notifies the
    /// observer.
    pub fn on_pointer_move(&mut self, pos: Point, window: Size, data: &mut impl RotatableData) {
        if !self.touch_enabled {
            return;
        }
        let Some(mut session) = self.session else {
            return;
        };
        let extent = self.screen_extent(window);

        if self.axis.rotates_x() {
            if self.policy.uses_travel() && self.state.max_travel_y.is_none() {
                // The anchor is still in raw pixels here, so the span can be
                // measured from the first observed direction of motion.
                let travel = policy::travel_span(session.anchor_y, pos.y, extent.height);
                self.state.max_travel_y = Some(travel);
                session.anchor_y = self.policy.to_degrees(session.anchor_y, self.state.max_travel_y);
            }
            session.current_y = self.policy.to_degrees(pos.y, self.state.max_travel_y);
        }

        if self.axis.rotates_y() {
            if self.policy.uses_travel() && self.state.max_travel_x.is_none() {
                let travel = policy::travel_span(session.anchor_x, pos.x, extent.width);
                self.state.max_travel_x = Some(travel);
                session.anchor_x = self.policy.to_degrees(session.anchor_x, self.state.max_travel_x);
            }
            session.current_x = self.policy.to_degrees(pos.x, self.state.max_travel_x);
        }

        self.apply_rotation(&mut session, data);
        self.session = Some(session);

        if self.swap_faces {
            self.apply_face(data);
        }
        self.notify_listener();
    }

    /// Ends the drag: starts the fit tween toward the nearest quadrant
    /// target on each enabled axis and clears the travel spans for the next
    /// session. The observer fires once more when the tween lands.
    pub fn on_pointer_up(&mut self, data: &mut impl RotatableData) {
        if !self.touch_enabled {
            return;
        }
        self.session = None;

        let mut animation = Animation {
            x: None,
            y: None,
            kind: AnimationKind::Fit,
            on_done: None,
        };
        if self.axis.rotates_x() {
            let current = data.get_rotation_x();
            let target = angle::snap_target(current);
            log::debug!("fitting x rotation {current:.1} -> {target:.1}");
            animation.x = Some(Tween::new(current, target, FIT_ANIM_TIME));
        }
        if self.axis.rotates_y() {
            let current = data.get_rotation_y();
            let target = angle::snap_target(current);
            log::debug!("fitting y rotation {current:.1} -> {target:.1}");
            animation.y = Some(Tween::new(current, target, FIT_ANIM_TIME));
        }
        self.animation = Some(animation);

        self.state.max_travel_x = None;
        self.state.max_travel_y = None;
    }

    /// An interrupted drag fits exactly like a released one.
    pub fn on_pointer_cancel(&mut self, data: &mut impl RotatableData) {
        self.on_pointer_up(data);
    }

    /// Programmatic rotation of the given axis (or both) to `degree`.
    /// Face visibility is re-resolved on every animation tick, so a
    /// programmatic spin swaps faces at the same boundaries as a manual
    /// drag. Replaces any animation already in flight.
    pub fn rotate_to(
        &mut self,
        axis: RotationAxis,
        degree: f64,
        duration: Duration,
        on_done: Option<RotateDone>,
        data: &mut impl RotatableData,
    ) {
        self.ensure_attached(data);
        let mut animation = Animation {
            x: None,
            y: None,
            kind: AnimationKind::Programmatic,
            on_done,
        };
        if axis.rotates_x() {
            animation.x = Some(Tween::new(data.get_rotation_x(), degree, duration));
        }
        if axis.rotates_y() {
            animation.y = Some(Tween::new(data.get_rotation_y(), degree, duration));
        }
        self.animation = Some(animation);
    }

    /// Reveal animation: tilts to (10°, -10°) and settles back to rest.
    pub fn take_attention(&mut self, data: &mut impl RotatableData) {
        self.ensure_attached(data);
        self.animation = Some(Animation {
            x: Some(Tween::new(data.get_rotation_x(), 10.0, DEFAULT_ROTATE_ANIM_TIME)),
            y: Some(Tween::new(data.get_rotation_y(), -10.0, DEFAULT_ROTATE_ANIM_TIME)),
            kind: AnimationKind::AttentionOut,
            on_done: None,
        });
    }

    /// Advances the in-flight animation by one anim-frame interval.
    /// Returns true while more frames are needed.
    pub fn tick(&mut self, interval_nanos: u64, data: &mut impl RotatableData) -> bool {
        let finished = {
            let Some(animation) = self.animation.as_mut() else {
                return false;
            };
            if let Some(tween) = animation.x.as_mut() {
                data.set_rotation_x(tween.advance(interval_nanos));
            }
            if let Some(tween) = animation.y.as_mut() {
                data.set_rotation_y(tween.advance(interval_nanos));
            }
            animation.is_finished()
        };

        self.state.current_x = data.get_rotation_x();
        self.state.current_y = data.get_rotation_y();
        if self.swap_faces {
            self.apply_face(data);
        }

        if finished {
            self.finish_animation(data)
        } else {
            true
        }
    }

    /// The host must report device rotations whenever a bound policy is in
    /// use; the stored extent is reordered and the travel spans recomputed
    /// against it on the next drag.
    pub fn orientation_changed(&mut self, new_orientation: Orientation, measured: Size) {
        if !self.policy.is_bounded() {
            log::debug!("orientation change without a bound policy has no effect on rotation");
        }
        let extent = self.extent.unwrap_or_else(|| ScreenExtent::from(measured));
        self.extent = Some(extent.oriented(new_orientation));

        self.state.max_travel_x = None;
        self.state.max_travel_y = None;
    }

    /// Restores the element's prior pivot and releases the session,
    /// animation, and observer. The controller must not be used afterwards.
    pub fn teardown(&mut self, data: &mut impl RotatableData) {
        if let Some(pivot) = self.default_pivot.take() {
            data.set_pivot(pivot);
        }
        self.session = None;
        self.animation = None;
        self.listener = None;
    }

    ////////////////////////////////////////////////////////////////////////
    // Internals
    ////////////////////////////////////////////////////////////////////////

    /// First contact with the host data: capture the prior pivot, apply the
    /// override, and pick up any preset rotation. Runs exactly once.
    fn ensure_attached(&mut self, data: &mut impl RotatableData) {
        if self.default_pivot.is_some() {
            return;
        }
        self.default_pivot = Some(data.get_pivot());
        if let Some(pivot) = self.pivot_override {
            data.set_pivot(pivot);
        }
        self.state.current_x = data.get_rotation_x();
        self.state.current_y = data.get_rotation_y();
    }

    fn screen_extent(&mut self, window: Size) -> ScreenExtent {
        *self.extent.get_or_insert_with(|| ScreenExtent::from(window))
    }

    /// Applies the per-axis deltas. The X axis takes the vertical delta
    /// directly; the Y axis takes the horizontal delta with its sign tied
    /// to whether the X angle is currently front-facing, so an edge-on
    /// element spins like a paddle wheel.
    fn apply_rotation(&mut self, session: &mut TouchSession, data: &mut impl RotatableData) {
        if self.axis.rotates_x() {
            let delta = session.current_y - session.anchor_y;
            let next = angle::wrap_degrees(data.get_rotation_x() + delta);
            data.set_rotation_x(next);
            self.state.current_x = next;
            session.anchor_y = session.current_y;
        }

        if self.axis.rotates_y() {
            let delta = session.current_x - session.anchor_x;
            let next = if angle::is_front_facing(self.state.current_x) {
                angle::wrap_degrees(data.get_rotation_y() + delta)
            } else {
                angle::wrap_degrees(data.get_rotation_y() - delta)
            };
            data.set_rotation_y(next);
            self.state.current_y = next;
            session.anchor_x = session.current_x;
        }
    }

    /// Writes the resolved face to the host only when it actually changed.
    fn apply_face(&self, data: &mut impl RotatableData) {
        let resolved = face::resolve(self.state.current_x, self.state.current_y, self.axis);
        if resolved != data.get_visible_face() {
            data.set_visible_face(resolved);
        }
    }

    /// Finalizes a landed animation. The attention tilt chains into its
    /// return leg; everything else refreshes state, fires the completion
    /// callback, and notifies the observer. Returns true when a chained
    /// animation still needs frames.
    fn finish_animation(&mut self, data: &mut impl RotatableData) -> bool {
        let Some(animation) = self.animation.take() else {
            return false;
        };
        self.state.current_x = data.get_rotation_x();
        self.state.current_y = data.get_rotation_y();

        match animation.kind {
            AnimationKind::AttentionOut => {
                self.animation = Some(Animation {
                    x: Some(Tween::new(self.state.current_x, 0.0, FIT_ANIM_TIME)),
                    y: Some(Tween::new(self.state.current_y, 0.0, FIT_ANIM_TIME)),
                    kind: AnimationKind::AttentionReturn,
                    on_done: None,
                });
                true
            }
            AnimationKind::Fit | AnimationKind::Programmatic | AnimationKind::AttentionReturn => {
                if let Some(on_done) = animation.on_done {
                    on_done(self.state.current_x, self.state.current_y);
                }
                self.notify_listener();
                false
            }
        }
    }

    fn notify_listener(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_rotation_changed(self.state.current_x, self.state.current_y);
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotatableBuilder
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Builds a `Rotatable`. A direction is required; the count and distance
/// bounds are mutually exclusive and the setters fail eagerly when the
/// other bound is already present.
#[derive(Default)]
pub struct RotatableBuilder {
    direction: Option<RotationAxis>,
    policy: DistancePolicy,
    swap_faces: bool,
    pivot: Option<Point>,
    listener: Option<Box<dyn RotationListener>>,
}

impl RotatableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, axis: RotationAxis) -> Self {
        self.direction = Some(axis);
        self
    }

    /// One full drag across the measured screen extent yields
    /// `count * 180` degrees, irrespective of where the drag starts.
    pub fn rotation_count(mut self, count: f64) -> Result<Self, ConfigError> {
        if matches!(self.policy, DistancePolicy::Distance(_)) {
            return Err(ConfigError::ConflictingBounds);
        }
        self.policy = DistancePolicy::Count(count);
        Ok(self)
    }

    /// Every `distance` pixels of drag yield 180 degrees; short drags fit
    /// on release rather than completing a turn.
    pub fn rotation_distance(mut self, distance: f64) -> Result<Self, ConfigError> {
        if matches!(self.policy, DistancePolicy::Count(_)) {
            return Err(ConfigError::ConflictingBounds);
        }
        self.policy = DistancePolicy::Distance(distance);
        Ok(self)
    }

    /// Declares that the host data carries a front/back pair to swap as the
    /// rotation crosses the visibility boundary.
    pub fn sides(mut self) -> Self {
        self.swap_faces = true;
        self
    }

    /// Overrides the transform pivot. The prior pivot is restored on
    /// teardown.
    pub fn pivot(mut self, x: f64, y: f64) -> Self {
        self.pivot = Some(Point::new(x, y));
        self
    }

    pub fn listener(mut self, listener: impl RotationListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn build(self) -> Result<Rotatable, ConfigError> {
        let axis = self.direction.ok_or(ConfigError::MissingDirection)?;
        Ok(Rotatable {
            axis,
            policy: self.policy,
            swap_faces: self.swap_faces,
            touch_enabled: true,
            pivot_override: self.pivot,
            default_pivot: None,
            state: RotationState::default(),
            session: None,
            extent: None,
            animation: None,
            listener: self.listener,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use approx::assert_relative_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestCard {
        rotation_x: f64,
        rotation_y: f64,
        pivot: Point,
        face: Face,
    }

    impl TestCard {
        fn new() -> Self {
            Self {
                rotation_x: 0.0,
                rotation_y: 0.0,
                pivot: Point::new(50.0, 50.0),
                face: Face::Front,
            }
        }
    }

    impl RotatableData for TestCard {
        fn get_rotation_x(&self) -> f64 {
            self.rotation_x
        }
        fn set_rotation_x(&mut self, degree: f64) {
            self.rotation_x = degree;
        }
        fn get_rotation_y(&self) -> f64 {
            self.rotation_y
        }
        fn set_rotation_y(&mut self, degree: f64) {
            self.rotation_y = degree;
        }
        fn get_pivot(&self) -> Point {
            self.pivot
        }
        fn set_pivot(&mut self, pivot: Point) {
            self.pivot = pivot;
        }
        fn get_visible_face(&self) -> Face {
            self.face
        }
        fn set_visible_face(&mut self, face: Face) {
            self.face = face;
        }
    }

    const WINDOW: Size = Size::new(1080.0, 1920.0);

    fn tick_for(rotatable: &mut Rotatable, data: &mut TestCard, millis: u64, step: u64) -> bool {
        let mut running = true;
        let mut elapsed = 0;
        while elapsed < millis {
            running = rotatable.tick(step * 1_000_000, data);
            elapsed += step;
        }
        running
    }

    #[test]
    fn free_drag_adds_vertical_delta_to_x() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::Both)
            .build()
            .unwrap();
        let mut card = TestCard::new();

        rotatable.on_pointer_down(Point::new(100.0, 100.0), &mut card);
        rotatable.on_pointer_move(Point::new(100.0, 190.0), WINDOW, &mut card);

        assert_relative_eq!(card.rotation_x, 90.0);
        assert_relative_eq!(card.rotation_y, 0.0);
    }

    #[test]
    fn y_spin_direction_flips_when_x_is_edge_on() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::Both)
            .build()
            .unwrap();
        let mut card = TestCard::new();

        rotatable.on_pointer_down(Point::new(0.0, 0.0), &mut card);
        // Rotate the X axis out of its front range first.
        rotatable.on_pointer_move(Point::new(0.0, 180.0), WINDOW, &mut card);
        assert_relative_eq!(card.rotation_x, 180.0);

        // A rightward drag now spins Y backwards.
        rotatable.on_pointer_move(Point::new(100.0, 180.0), WINDOW, &mut card);
        assert_relative_eq!(card.rotation_y, -100.0);
    }

    #[test]
    fn count_bound_full_travel_yields_count_half_turns() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::X)
            .rotation_count(2.0)
            .unwrap()
            .build()
            .unwrap();
        let mut card = TestCard::new();
        let window = Size::new(600.0, 1000.0);

        rotatable.on_pointer_down(Point::new(100.0, 500.0), &mut card);
        rotatable.on_pointer_move(Point::new(100.0, 750.0), window, &mut card);

        // Travel span fixed from the first move's direction: 1000 - 500.
        assert_eq!(rotatable.rotation_state().max_travel_y, Some(500.0));
        assert_relative_eq!(card.rotation_x, 180.0);

        // Completing the full span accumulates 2 * 180 degrees and wraps.
        rotatable.on_pointer_move(Point::new(100.0, 1000.0), window, &mut card);
        assert_relative_eq!(card.rotation_x, 0.0);
    }

    #[test]
    fn distance_bound_scales_pixels_to_half_turns() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::X)
            .rotation_distance(90.0)
            .unwrap()
            .build()
            .unwrap();
        let mut card = TestCard::new();

        rotatable.on_pointer_down(Point::new(0.0, 100.0), &mut card);
        rotatable.on_pointer_move(Point::new(0.0, 145.0), WINDOW, &mut card);

        assert_relative_eq!(card.rotation_x, 90.0);
        // Distance bound needs no travel span.
        assert_eq!(rotatable.rotation_state().max_travel_y, None);
    }

    #[test]
    fn release_fits_to_the_nearest_quadrant_target() {
        let notified = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notified);
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::X)
            .listener(move |x: f64, y: f64| sink.borrow_mut().push((x, y)))
            .build()
            .unwrap();
        let mut card = TestCard::new();

        rotatable.on_pointer_down(Point::new(0.0, 0.0), &mut card);
        rotatable.on_pointer_move(Point::new(0.0, 200.0), WINDOW, &mut card);
        assert_relative_eq!(card.rotation_x, 200.0);

        rotatable.on_pointer_up(&mut card);
        let running = tick_for(&mut rotatable, &mut card, 400, 16);

        assert!(!running);
        assert_relative_eq!(card.rotation_x, 180.0);
        assert_eq!(rotatable.rotation_state().max_travel_y, None);
        // One notification per move plus one when the fit lands.
        assert_eq!(notified.borrow().last(), Some(&(180.0, 0.0)));
    }

    #[test]
    fn release_near_negative_full_turn_fits_to_minus_360() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::X)
            .build()
            .unwrap();
        let mut card = TestCard::new();

        rotatable.on_pointer_down(Point::new(0.0, 0.0), &mut card);
        rotatable.on_pointer_move(Point::new(0.0, -350.0), WINDOW, &mut card);
        assert_relative_eq!(card.rotation_x, -350.0);

        rotatable.on_pointer_cancel(&mut card);
        tick_for(&mut rotatable, &mut card, 400, 16);
        assert_relative_eq!(card.rotation_x, -360.0);
    }

    #[test]
    fn builder_rejects_both_bounds() {
        let result = Rotatable::builder()
            .direction(RotationAxis::X)
            .rotation_count(2.0)
            .unwrap()
            .rotation_distance(50.0);
        assert_eq!(result.err(), Some(ConfigError::ConflictingBounds));

        let result = Rotatable::builder()
            .direction(RotationAxis::X)
            .rotation_distance(50.0)
            .unwrap()
            .rotation_count(2.0);
        assert_eq!(result.err(), Some(ConfigError::ConflictingBounds));
    }

    #[test]
    fn builder_requires_a_direction() {
        assert_eq!(
            Rotatable::builder().build().err(),
            Some(ConfigError::MissingDirection)
        );
    }

    #[test]
    fn orientation_change_reorders_extent_and_resets_travel() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::X)
            .rotation_count(1.0)
            .unwrap()
            .build()
            .unwrap();
        let mut card = TestCard::new();

        // Portrait window measured lazily during the first drag.
        rotatable.on_pointer_down(Point::new(0.0, 960.0), &mut card);
        rotatable.on_pointer_move(Point::new(0.0, 1460.0), WINDOW, &mut card);
        assert_eq!(rotatable.rotation_state().max_travel_y, Some(960.0));

        rotatable.orientation_changed(Orientation::Landscape, WINDOW);
        let extent = rotatable.measured_extent().unwrap();
        assert!(extent.width >= extent.height);
        assert_eq!(rotatable.rotation_state().max_travel_y, None);

        // The next drag measures against the landscape height.
        rotatable.on_pointer_down(Point::new(0.0, 500.0), &mut card);
        rotatable.on_pointer_move(Point::new(0.0, 800.0), WINDOW, &mut card);
        assert_eq!(rotatable.rotation_state().max_travel_y, Some(580.0));
    }

    #[test]
    fn programmatic_rotation_swaps_faces_and_reports_completion() {
        let done = Rc::new(RefCell::new(None));
        let done_sink = Rc::clone(&done);
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::X)
            .sides()
            .build()
            .unwrap();
        let mut card = TestCard::new();

        rotatable.rotate_to(
            RotationAxis::X,
            180.0,
            Duration::from_millis(300),
            Some(Box::new(move |x, y| {
                *done_sink.borrow_mut() = Some((x, y));
            })),
            &mut card,
        );
        let running = tick_for(&mut rotatable, &mut card, 400, 16);

        assert!(!running);
        assert_relative_eq!(card.rotation_x, 180.0);
        assert_eq!(card.face, Face::Back);
        assert_eq!(*done.borrow(), Some((180.0, 0.0)));
    }

    #[test]
    fn drag_past_the_face_boundary_swaps_views() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::X)
            .sides()
            .build()
            .unwrap();
        let mut card = TestCard::new();

        rotatable.on_pointer_down(Point::new(0.0, 0.0), &mut card);
        rotatable.on_pointer_move(Point::new(0.0, 91.0), WINDOW, &mut card);
        assert_eq!(card.face, Face::Back);

        rotatable.on_pointer_move(Point::new(0.0, 45.0), WINDOW, &mut card);
        assert_eq!(card.face, Face::Front);
    }

    #[test]
    fn attention_animation_tilts_and_returns_to_rest() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::Both)
            .build()
            .unwrap();
        let mut card = TestCard::new();

        rotatable.take_attention(&mut card);
        // The outward tilt chains into the return leg.
        let running = tick_for(&mut rotatable, &mut card, 600, 16);
        assert!(running);

        tick_for(&mut rotatable, &mut card, 400, 16);
        assert_relative_eq!(card.rotation_x, 0.0);
        assert_relative_eq!(card.rotation_y, 0.0);
    }

    #[test]
    fn pivot_override_is_applied_once_and_restored_on_teardown() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::Both)
            .pivot(10.0, 10.0)
            .build()
            .unwrap();
        let mut card = TestCard::new();
        assert_eq!(card.pivot, Point::new(50.0, 50.0));

        rotatable.on_pointer_down(Point::new(0.0, 0.0), &mut card);
        assert_eq!(card.pivot, Point::new(10.0, 10.0));

        rotatable.teardown(&mut card);
        assert_eq!(card.pivot, Point::new(50.0, 50.0));
    }

    #[test]
    fn disabled_touch_ignores_pointer_events() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::Both)
            .build()
            .unwrap();
        rotatable.set_touch_enabled(false);
        let mut card = TestCard::new();

        rotatable.on_pointer_down(Point::new(0.0, 0.0), &mut card);
        rotatable.on_pointer_move(Point::new(50.0, 50.0), WINDOW, &mut card);
        assert_relative_eq!(card.rotation_x, 0.0);
        assert_relative_eq!(card.rotation_y, 0.0);

        rotatable.set_touch_enabled(true);
        assert!(rotatable.is_touch_enabled());
    }

    #[test]
    fn set_direction_switches_the_driven_axis() {
        let mut rotatable = Rotatable::builder()
            .direction(RotationAxis::X)
            .build()
            .unwrap();
        let mut card = TestCard::new();

        rotatable.set_direction(RotationAxis::Y);
        assert_eq!(rotatable.direction(), RotationAxis::Y);

        rotatable.on_pointer_down(Point::new(0.0, 0.0), &mut card);
        rotatable.on_pointer_move(Point::new(30.0, 30.0), WINDOW, &mut card);
        assert_relative_eq!(card.rotation_x, 0.0);
        assert_relative_eq!(card.rotation_y, 30.0);
    }
}
