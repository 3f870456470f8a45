use druid::widget::{Button, CrossAxisAlignment, Flex, Label, MainAxisAlignment, Painter};
use druid::{
    AppLauncher, Color, Command, Data, Lens, LocalizedString, Point, Rect, RenderContext, Size,
    Target, Widget, WidgetExt, WidgetId, WindowDesc,
};

use druid_rotatable_widget::{
    Face, Rotatable, RotatableController, RotatableData, RotateTo, RotationAxis, ROTATE_TO,
    SET_DIRECTION, TAKE_ATTENTION,
};

//////////////////////////////////////////////////////////////////////////////////////
// Constants
//////////////////////////////////////////////////////////////////////////////////////
pub const CARD_ID: WidgetId = WidgetId::reserved(1);
pub const FRONT_COLOR: Color = Color::rgb8(0x3A, 0x7C, 0xA5);
pub const BACK_COLOR: Color = Color::rgb8(0xA5, 0x3A, 0x52);

//////////////////////////////////////////////////////////////////////////////////////
//
// CardData
//
//////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Data, Lens)]
pub struct CardData {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub pivot: Point,
    pub visible_face: Face,
}

impl CardData {
    fn new() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            pivot: Point::ZERO,
            visible_face: Face::Front,
        }
    }
}

impl RotatableData for CardData {
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
        self.visible_face
    }

    fn set_visible_face(&mut self, face: Face) {
        self.visible_face = face;
    }
}

//////////////////////////////////////////////////////////////////////////////////////
//
// Main
//
//////////////////////////////////////////////////////////////////////////////////////

fn main() {
    let main_window = WindowDesc::new(make_ui())
        .window_size((640.0, 560.0))
        .title(LocalizedString::new("Rotatable Card"));

    AppLauncher::with_window(main_window)
        .log_to_console()
        .launch(CardData::new())
        .expect("launch failed");
}

fn make_ui() -> impl Widget<CardData> {
    let rotatable = Rotatable::builder()
        .direction(RotationAxis::Both)
        .sides()
        .listener(|x: f64, y: f64| log::debug!("rotation changed: x={x:.1} y={y:.1}"))
        .build()
        .expect("invalid rotatable configuration");

    let card = card_painter()
        .controller(RotatableController::new(rotatable))
        .with_id(CARD_ID);

    Flex::column()
        .with_flex_child(card, 1.0)
        .with_child(make_control_bar())
        .main_axis_alignment(MainAxisAlignment::SpaceAround)
        .cross_axis_alignment(CrossAxisAlignment::Center)
}

/// Fakes the 3D flip on a 2D surface: the card shrinks along each axis by
/// the cosine of that axis' rotation and shows the color of whichever face
/// the resolver picked.
fn card_painter() -> Painter<CardData> {
    Painter::new(|ctx, data: &CardData, _env| {
        let bounds = ctx.size();
        let scale_x = data.rotation_y.to_radians().cos().abs().max(0.02);
        let scale_y = data.rotation_x.to_radians().cos().abs().max(0.02);

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let card = Rect::from_center_size(
            center,
            Size::new(bounds.width * 0.7 * scale_x, bounds.height * 0.7 * scale_y),
        )
        .to_rounded_rect(12.0);

        let fill = match data.visible_face {
            Face::Front => FRONT_COLOR,
            Face::Back => BACK_COLOR,
        };
        ctx.fill(card, &fill);
    })
}

fn make_control_bar() -> impl Widget<CardData> {
    Flex::row()
        .with_child(Button::new("Flip X").on_click(|ctx, data: &mut CardData, _env| {
            let degree = if data.rotation_x.abs() < 90.0 { 180.0 } else { 0.0 };
            ctx.submit_command(Command::new(
                ROTATE_TO,
                RotateTo::new(RotationAxis::X, degree),
                Target::Widget(CARD_ID),
            ));
        }))
        .with_child(Button::new("Flip Y").on_click(|ctx, data: &mut CardData, _env| {
            let degree = if data.rotation_y.abs() < 90.0 { 180.0 } else { 0.0 };
            ctx.submit_command(Command::new(
                ROTATE_TO,
                RotateTo::new(RotationAxis::Y, degree),
                Target::Widget(CARD_ID),
            ));
        }))
        .with_child(Button::new("Attention").on_click(|ctx, _data: &mut CardData, _env| {
            ctx.submit_command(Command::new(TAKE_ATTENTION, (), Target::Widget(CARD_ID)));
        }))
        .with_child(make_direction_picker())
        .with_child(Label::new(|data: &CardData, _: &_| {
            format!("x: {:+.1}  y: {:+.1}", data.rotation_x, data.rotation_y)
        }))
        .main_axis_alignment(MainAxisAlignment::SpaceAround)
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .must_fill_main_axis(true)
        .padding(8.0)
}

fn make_direction_picker() -> impl Widget<CardData> {
    let direction_button = |label: &'static str, axis: RotationAxis| {
        Button::new(label).on_click(move |ctx, _data: &mut CardData, _env| {
            ctx.submit_command(Command::new(SET_DIRECTION, axis, Target::Widget(CARD_ID)));
        })
    };

    Flex::row()
        .with_child(Label::new("Direction: "))
        .with_child(direction_button("X", RotationAxis::X))
        .with_child(direction_button("Y", RotationAxis::Y))
        .with_child(direction_button("Both", RotationAxis::Both))
}
