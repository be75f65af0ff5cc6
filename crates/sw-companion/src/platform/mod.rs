//! Platform services the companion loop calls into.
//!
//! Window lookup and click injection are OS concerns. The loop only sees
//! these traits, and every call is best-effort: a lookup that finds
//! nothing keeps the previous surface, and clicks are fire-and-forget.

pub mod desktop;

use std::fmt;

use crate::geometry::{Point, Rect};

pub use desktop::VirtualDesktop;

/// Window classes that belong to the desktop background, never a surface.
pub const DESKTOP_CLASSES: &[&str] = &["Progman", "WorkerW"];
/// Windows must be larger than this in both dimensions to count.
pub const MIN_WINDOW_SIZE: f32 = 50.0;
/// Title reported for windows without one.
pub const UNTITLED: &str = "<no title>";

/// A window found under a screen point.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowInfo {
    /// Outer bounds in screen coordinates.
    pub rect: Rect,
    /// Window class name.
    pub class_name: String,
    /// Window title, never empty.
    pub title: String,
}

impl WindowInfo {
    /// Create a window description. An empty title becomes [`UNTITLED`].
    pub fn new(rect: Rect, class_name: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            rect,
            class_name: class_name.into(),
            title: if title.is_empty() {
                UNTITLED.to_string()
            } else {
                title
            },
        }
    }

    /// Whether this window can serve as a surface: not part of the desktop
    /// background and larger than [`MIN_WINDOW_SIZE`] on both axes.
    pub fn qualifies(&self) -> bool {
        !DESKTOP_CLASSES.contains(&self.class_name.as_str())
            && self.rect.width() > MIN_WINDOW_SIZE
            && self.rect.height() > MIN_WINDOW_SIZE
    }
}

/// Looks up the topmost qualifying window at a screen point.
pub trait WindowService {
    /// The window under `point`, or `None` if nothing qualifies or the
    /// lookup failed.
    fn window_at(&self, point: Point) -> Option<WindowInfo>;
}

/// Mouse buttons that can be clicked synthetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Injects synthetic clicks at the current cursor position.
pub trait InputInjector {
    /// Request a click. Failures are not reported.
    fn click(&mut self, button: MouseButton);
}

/// A window service that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWindows;

impl WindowService for NoWindows {
    fn window_at(&self, _point: Point) -> Option<WindowInfo> {
        None
    }
}

/// An injector that logs click requests instead of performing them.
#[derive(Debug, Clone, Default)]
pub struct LoggingInjector {
    /// Every click requested so far, in order.
    pub requested: Vec<MouseButton>,
}

impl InputInjector for LoggingInjector {
    fn click(&mut self, button: MouseButton) {
        log::info!("Synthetic {button} click requested");
        self.requested.push(button);
    }
}

impl<W: WindowService + ?Sized> WindowService for &W {
    fn window_at(&self, point: Point) -> Option<WindowInfo> {
        (**self).window_at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_replaced() {
        let info = WindowInfo::new(Rect::new(0.0, 0.0, 100.0, 100.0), "Notepad", "");
        assert_eq!(info.title, UNTITLED);
    }

    #[test]
    fn desktop_windows_do_not_qualify() {
        let rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        assert!(!WindowInfo::new(rect, "Progman", "Program Manager").qualifies());
        assert!(!WindowInfo::new(rect, "WorkerW", "").qualifies());
        assert!(WindowInfo::new(rect, "Chrome_WidgetWin_1", "Docs").qualifies());
    }

    #[test]
    fn small_windows_do_not_qualify() {
        assert!(!WindowInfo::new(Rect::new(0.0, 0.0, 50.0, 400.0), "Tool", "t").qualifies());
        assert!(!WindowInfo::new(Rect::new(0.0, 0.0, 400.0, 50.0), "Tool", "t").qualifies());
        assert!(WindowInfo::new(Rect::new(0.0, 0.0, 51.0, 51.0), "Tool", "t").qualifies());
    }

    #[test]
    fn logging_injector_records_requests() {
        let mut injector = LoggingInjector::default();
        injector.click(MouseButton::Right);
        injector.click(MouseButton::Left);
        assert_eq!(injector.requested, vec![MouseButton::Right, MouseButton::Left]);
    }

    #[test]
    fn no_windows_finds_nothing() {
        assert!(NoWindows.window_at(Point::new(10.0, 10.0)).is_none());
    }
}
