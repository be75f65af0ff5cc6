//! An in-process stand-in for the OS window stack.

use crate::geometry::{Point, Rect};

use super::{WindowInfo, WindowService};

/// An ordered stack of windows, bottom first.
///
/// Lookups behave like a native point query: the topmost window containing
/// the point is found, and if it does not qualify as a surface the result
/// is `None` rather than whatever lies beneath it.
#[derive(Debug, Clone, Default)]
pub struct VirtualDesktop {
    windows: Vec<WindowInfo>,
}

impl VirtualDesktop {
    /// An empty desktop.
    pub fn new() -> Self {
        Self::default()
    }

    /// A desktop with a background window covering `screen`.
    pub fn with_background(screen: Rect) -> Self {
        let mut desktop = Self::new();
        desktop.push(WindowInfo::new(screen, "Progman", "Program Manager"));
        desktop
    }

    /// Place a window on top of the stack.
    pub fn push(&mut self, window: WindowInfo) {
        self.windows.push(window);
    }

    /// Bring the window at `index` to the top. Returns its new index.
    pub fn raise(&mut self, index: usize) -> Option<usize> {
        if index >= self.windows.len() {
            return None;
        }
        let window = self.windows.remove(index);
        self.windows.push(window);
        Some(self.windows.len() - 1)
    }

    /// Index of the topmost window containing `point`, qualifying or not.
    pub fn topmost_at(&self, point: Point) -> Option<usize> {
        self.windows.iter().rposition(|w| w.rect.contains(point))
    }

    /// Move the window at `index` by `delta`.
    pub fn move_by(&mut self, index: usize, delta: Point) {
        if let Some(window) = self.windows.get_mut(index) {
            window.rect = Rect::new(
                window.rect.left + delta.x,
                window.rect.top + delta.y,
                window.rect.right + delta.x,
                window.rect.bottom + delta.y,
            );
        }
    }

    /// All windows, bottom first.
    pub fn windows(&self) -> &[WindowInfo] {
        &self.windows
    }
}

impl WindowService for VirtualDesktop {
    fn window_at(&self, point: Point) -> Option<WindowInfo> {
        let index = self.topmost_at(point)?;
        let window = &self.windows[index];
        window.qualifies().then(|| window.clone())
    }
}
