//! SVG serialization of a [`Scene`].

use crate::scene::{DrawCommand, Rgba, Scene};
use crate::surface::Surface;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::fmt::Write as _;

/// Font stack used for all overlay text.
pub const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

/// Round to 1/1000 px so output is stable and compact.
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

fn rgb(color: &Rgba) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// `fill="…"` plus `fill-opacity` when the color is translucent.
fn paint(attr: &str, color: &Rgba) -> String {
    if color.a == 255 {
        format!(r#"{attr}="{}""#, rgb(color))
    } else {
        format!(r#"{attr}="{}" {attr}-opacity="{}""#, rgb(color), num(color.opacity()))
    }
}

fn write_command(out: &mut String, cmd: &DrawCommand) {
    // Writing into a String cannot fail.
    let _ = match cmd {
        DrawCommand::FillCircle { circle, color } => writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            num(circle.center.x),
            num(circle.center.y),
            num(circle.radius),
            paint("fill", color)
        ),
        DrawCommand::StrokeCircle {
            circle,
            color,
            width,
        } => writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" {} stroke-width="{}"/>"#,
            num(circle.center.x),
            num(circle.center.y),
            num(circle.radius),
            paint("stroke", color),
            num(*width)
        ),
        DrawCommand::FillRect { rect, color } => writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
            num(rect.x0),
            num(rect.y0),
            num(rect.width()),
            num(rect.height()),
            paint("fill", color)
        ),
        DrawCommand::StrokeRect { rect, color, width } => writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" {} stroke-width="{}"/>"#,
            num(rect.x0),
            num(rect.y0),
            num(rect.width()),
            num(rect.height()),
            paint("stroke", color),
            num(*width)
        ),
        DrawCommand::Text {
            text,
            anchor,
            style,
            color,
        } => writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-family="{}" font-size="{}"{} {}>{}</text>"#,
            num(anchor.x),
            num(anchor.y),
            FONT_FAMILY,
            num(style.size),
            if style.bold { r#" font-weight="bold""# } else { "" },
            paint("fill", color),
            escape_xml(text)
        ),
    };
}

/// Serialize the scene, page bitmap first, then commands in draw order.
pub fn to_svg(scene: &Scene) -> String {
    let size = scene.size();
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(size.width),
        h = num(size.height)
    );
    if let Some(bitmap) = scene.background() {
        let _ = writeln!(
            out,
            r#"<image x="0" y="0" width="{}" height="{}" preserveAspectRatio="none" xlink:href="data:image/png;base64,{}"/>"#,
            num(size.width),
            num(size.height),
            STANDARD.encode(&bitmap.png)
        );
    }
    for cmd in scene.commands() {
        write_command(&mut out, cmd);
    }
    out.push_str("</svg>\n");
    out
}
