//! Mouse and keyboard state for one frame.

use macroquad::prelude::{KeyCode, MouseButton, is_key_pressed, is_mouse_button_down};
use macroquad::prelude::{is_mouse_button_pressed, is_mouse_button_released};
use sw_companion::Point;

use crate::theme::mouse_canvas_position;

/// Left-button state and cursor position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Cursor position.
    pub position: Point,
    /// Button went down this frame.
    pub pressed: bool,
    /// Button is down.
    pub held: bool,
    /// Button went up this frame.
    pub released: bool,
}

impl Pointer {
    /// Read the current frame's mouse state.
    pub fn read() -> Self {
        let (x, y) = mouse_canvas_position();
        Self {
            position: Point::new(x, y),
            pressed: is_mouse_button_pressed(MouseButton::Left),
            held: is_mouse_button_down(MouseButton::Left),
            released: is_mouse_button_released(MouseButton::Left),
        }
    }
}

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}
