///////////////////////////////////////////////////////////////////////////////////////////////////
use std::time::Duration;

use druid::widget::Controller;
use druid::{Data, Env, Event, EventCtx, Selector, Widget};

use crate::rotatable::{Rotatable, RotatableData};
use crate::tween::DEFAULT_ROTATE_ANIM_TIME;
use crate::{Orientation, RotationAxis};
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Command Selectors
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Animate the hosted element to a rotation target.
pub const ROTATE_TO: Selector<RotateTo> = Selector::new("rotatable.rotate-to");
/// Switch which axis responds to pointer movement.
pub const SET_DIRECTION: Selector<RotationAxis> = Selector::new("rotatable.set-direction");
/// Enable or disable touch interaction.
pub const SET_TOUCH_ENABLED: Selector<bool> = Selector::new("rotatable.set-touch-enabled");
/// Report a device rotation so travel spans are recomputed.
pub const ORIENTATION_CHANGED: Selector<Orientation> =
    Selector::new("rotatable.orientation-changed");
/// Play the reveal tilt animation.
pub const TAKE_ATTENTION: Selector = Selector::new("rotatable.take-attention");

/// Payload for `ROTATE_TO`. Completion is reported through the
/// `RotationListener`; hosts driving the core directly can pass an
/// `on_done` callback to `Rotatable::rotate_to` instead.
#[derive(Debug, Clone, Copy)]
pub struct RotateTo {
    pub axis: RotationAxis,
    pub degree: f64,
    pub duration: Duration,
}

impl RotateTo {
    pub fn new(axis: RotationAxis, degree: f64) -> Self {
        Self {
            axis,
            degree,
            duration: DEFAULT_ROTATE_ANIM_TIME,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotatableController
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// druid adapter around the `Rotatable` state machine: grabs the pointer on
/// left-button down, feeds moves while active, starts the fit on release,
/// and drives in-flight tweens from anim frames. Window resizes double as
/// orientation notifications.
pub struct RotatableController {
    rotatable: Rotatable,
}

impl RotatableController {
    pub fn new(rotatable: Rotatable) -> Self {
        Self { rotatable }
    }
}

impl<T: Data + RotatableData, W: Widget<T>> Controller<T, W> for RotatableController {
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        match event {
            Event::MouseDown(mouse) if mouse.button.is_left() => {
                if self.rotatable.is_touch_enabled() {
                    ctx.set_active(true);
                    self.rotatable.on_pointer_down(mouse.window_pos, data);
                    ctx.set_handled();
                }
            }
            Event::MouseMove(mouse) if ctx.is_active() => {
                let window = ctx.window().get_size();
                self.rotatable.on_pointer_move(mouse.window_pos, window, data);
                ctx.set_handled();
            }
            Event::MouseUp(mouse) if ctx.is_active() && mouse.button.is_left() => {
                ctx.set_active(false);
                self.rotatable.on_pointer_up(data);
                ctx.request_anim_frame();
                ctx.set_handled();
            }
            Event::AnimFrame(interval) => {
                if self.rotatable.tick(*interval, data) {
                    ctx.request_anim_frame();
                }
            }
            Event::WindowSize(size) => {
                let orientation = if size.width >= size.height {
                    Orientation::Landscape
                } else {
                    Orientation::Portrait
                };
                self.rotatable.orientation_changed(orientation, *size);
            }
            Event::Command(cmd) if cmd.is(ROTATE_TO) => {
                let rotate = cmd.get_unchecked(ROTATE_TO);
                self.rotatable
                    .rotate_to(rotate.axis, rotate.degree, rotate.duration, None, data);
                ctx.request_anim_frame();
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(SET_DIRECTION) => {
                self.rotatable.set_direction(*cmd.get_unchecked(SET_DIRECTION));
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(SET_TOUCH_ENABLED) => {
                self.rotatable
                    .set_touch_enabled(*cmd.get_unchecked(SET_TOUCH_ENABLED));
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(ORIENTATION_CHANGED) => {
                let orientation = *cmd.get_unchecked(ORIENTATION_CHANGED);
                self.rotatable
                    .orientation_changed(orientation, ctx.window().get_size());
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(TAKE_ATTENTION) => {
                self.rotatable.take_attention(data);
                ctx.request_anim_frame();
                ctx.set_handled();
            }
            _ => {}
        }

        child.event(ctx, event, data, env);
    }
}
