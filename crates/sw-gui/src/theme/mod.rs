//! Visual theme: palette, stroke sizes, and virtual canvas scaling.

use macroquad::prelude::*;

/// Virtual canvas width in pixels. This is the companion's screen.
pub const CANVAS_W: f32 = 1280.0;
/// Virtual canvas height in pixels.
pub const CANVAS_H: f32 = 720.0;

/// Height of a window's title bar.
pub const TITLE_BAR: f32 = 24.0;
/// Font size for window titles.
pub const TITLE_FONT: f32 = 18.0;
/// Stroke width for limbs.
pub const LIMB_WIDTH: f32 = 4.0;
/// Stroke width for the head outline.
pub const HEAD_WIDTH: f32 = 3.0;
/// Seconds a click marker stays visible.
pub const CLICK_MARKER_SECS: f64 = 0.4;

/// Desktop colors.
pub mod palette {
    use macroquad::prelude::Color;

    /// Letterbox bars.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Desktop wallpaper.
    pub const WALLPAPER: Color = Color::new(0.114, 0.169, 0.326, 1.0);
    /// Window body.
    pub const WINDOW: Color = Color::new(0.761, 0.765, 0.780, 1.0);
    /// Title bar of the window the companion stands on.
    pub const TITLE_ACTIVE: Color = Color::new(0.161, 0.678, 1.0, 1.0);
    /// Title bar of other windows.
    pub const TITLE_INACTIVE: Color = Color::new(0.373, 0.341, 0.310, 1.0);
    /// Window borders.
    pub const BORDER: Color = Color::new(0.0, 0.0, 0.0, 0.6);
    /// Title text.
    pub const TITLE_TEXT: Color = Color::new(1.0, 0.945, 0.910, 1.0);
    /// The stickman.
    pub const INK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// The reaching arm while it follows the cursor.
    pub const REACHING: Color = Color::new(1.0, 0.0, 0.302, 1.0);
    /// Left click marker.
    pub const CLICK_LEFT: Color = Color::new(1.0, 0.925, 0.153, 1.0);
    /// Right click marker.
    pub const CLICK_RIGHT: Color = Color::new(1.0, 0.467, 0.659, 1.0);
}

/// Set up a `Camera2D` that maps the virtual canvas to the current window.
pub fn setup_virtual_canvas() {
    let (scale, offset_x, offset_y) = canvas_transform();
    set_camera(&Camera2D {
        zoom: vec2(2.0 / CANVAS_W, 2.0 / CANVAS_H),
        target: vec2(CANVAS_W / 2.0, CANVAS_H / 2.0),
        viewport: Some((
            offset_x as i32,
            offset_y as i32,
            (CANVAS_W * scale) as i32,
            (CANVAS_H * scale) as i32,
        )),
        ..Default::default()
    });
}

/// Convert the window mouse position to virtual canvas coordinates.
pub fn mouse_canvas_position() -> (f32, f32) {
    let (mx, my) = mouse_position();
    let (scale, offset_x, offset_y) = canvas_transform();
    ((mx - offset_x) / scale, (my - offset_y) / scale)
}

fn canvas_transform() -> (f32, f32, f32) {
    let scale = (screen_width() / CANVAS_W).min(screen_height() / CANVAS_H);
    let offset_x = (screen_width() - CANVAS_W * scale) / 2.0;
    let offset_y = (screen_height() - CANVAS_H * scale) / 2.0;
    (scale, offset_x, offset_y)
}
