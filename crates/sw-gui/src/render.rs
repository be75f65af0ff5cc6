//! Drawing for the desktop and the stickman.

use macroquad::prelude::{
    Color, draw_circle, draw_circle_lines, draw_line, draw_rectangle, draw_rectangle_lines,
    draw_text,
};
use sw_companion::platform::{MouseButton, VirtualDesktop, WindowInfo};
use sw_companion::pose::Segment;
use sw_companion::{Point, Pose};

use crate::app::ClickMarker;
use crate::theme::{HEAD_WIDTH, LIMB_WIDTH, TITLE_BAR, TITLE_FONT, palette};

/// Draw every window, bottom first. The background window is skipped.
pub fn draw_desktop(desktop: &VirtualDesktop, surface_title: &str) {
    for window in desktop.windows().iter().filter(|w| w.qualifies()) {
        draw_window(window, window.title == surface_title);
    }
}

fn draw_window(window: &WindowInfo, active: bool) {
    let r = window.rect;
    draw_rectangle(r.left, r.top, r.width(), r.height(), palette::WINDOW);
    let bar = if active {
        palette::TITLE_ACTIVE
    } else {
        palette::TITLE_INACTIVE
    };
    draw_rectangle(r.left, r.top, r.width(), TITLE_BAR.min(r.height()), bar);
    draw_rectangle_lines(r.left, r.top, r.width(), r.height(), 2.0, palette::BORDER);
    draw_text(
        &window.title,
        r.left + 6.0,
        r.top + TITLE_BAR - 7.0,
        TITLE_FONT,
        palette::TITLE_TEXT,
    );
}

/// Draw the stickman whose frame origin is `origin`.
pub fn draw_stickman(origin: Point, pose: &Pose) {
    let head = origin + pose.head;
    draw_circle_lines(head.x, head.y, pose.head_radius, HEAD_WIDTH, palette::INK);

    for limb in [&pose.body, &pose.left_leg, &pose.right_leg, &pose.left_arm] {
        draw_limb(origin, limb, palette::INK);
    }
    let arm = if pose.tracking_cursor {
        palette::REACHING
    } else {
        palette::INK
    };
    draw_limb(origin, &pose.reaching_arm, arm);
}

fn draw_limb(origin: Point, segment: &Segment, color: Color) {
    let from = origin + segment.from;
    let to = origin + segment.to;
    draw_line(from.x, from.y, to.x, to.y, LIMB_WIDTH, color);
    // Round joints.
    draw_circle(from.x, from.y, LIMB_WIDTH / 2.0, color);
    draw_circle(to.x, to.y, LIMB_WIDTH / 2.0, color);
}

/// Draw a ring where the companion last clicked, shrinking with `age`.
pub fn draw_click(marker: &ClickMarker, age: f64, lifetime: f64) {
    let fade = (1.0 - age / lifetime).clamp(0.0, 1.0) as f32;
    let base = match marker.button {
        MouseButton::Left => palette::CLICK_LEFT,
        MouseButton::Right => palette::CLICK_RIGHT,
    };
    let color = Color::new(base.r, base.g, base.b, fade);
    draw_circle_lines(marker.at.x, marker.at.y, 6.0 + 10.0 * fade, 2.0, color);
}
