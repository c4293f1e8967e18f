//! Stand-in panel for a diagram that failed to render.

use crate::scene::Scene;
use crate::surface::{Surface, TextStyle};
use kurbo::{Point, Rect, Size};
use peniko::Color;

/// Fixed placeholder size in pixels.
pub const PLACEHOLDER_SIZE: Size = Size::new(600.0, 200.0);
pub const PLACEHOLDER_TITLE: &str = "Diagram unavailable";

const PANEL_FILL: Color = Color::from_rgba8(243, 244, 246, 255);
const PANEL_BORDER: Color = Color::from_rgba8(209, 213, 219, 255);
const TITLE_COLOR: Color = Color::from_rgba8(55, 65, 81, 255);
const MESSAGE_COLOR: Color = Color::from_rgba8(107, 114, 128, 255);

/// Paint the placeholder panel with an explanatory message.
pub fn draw_placeholder<S: Surface + ?Sized>(surface: &mut S, message: &str) {
    let panel = Rect::from_origin_size(Point::ZERO, PLACEHOLDER_SIZE);
    surface.fill_rect(panel, PANEL_FILL);
    surface.stroke_rect(panel.inset(-1.0), PANEL_BORDER, 2.0);

    let center_x = panel.center().x;
    surface.fill_text(
        PLACEHOLDER_TITLE,
        Point::new(center_x, panel.center().y - 8.0),
        TextStyle::bold(18.0),
        TITLE_COLOR,
    );
    surface.fill_text(
        message,
        Point::new(center_x, panel.center().y + 20.0),
        TextStyle::regular(13.0),
        MESSAGE_COLOR,
    );
}

/// A new scene holding only the placeholder.
pub fn placeholder_scene(message: &str) -> Scene {
    let mut scene = Scene::new(PLACEHOLDER_SIZE);
    draw_placeholder(&mut scene, message);
    scene
}
