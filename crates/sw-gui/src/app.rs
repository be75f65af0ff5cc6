//! Host state: the companion, the virtual desktop it lives on, and the
//! fixed-step timer that drives it.

use sw_companion::platform::{LoggingInjector, MouseButton, VirtualDesktop, WindowInfo};
use sw_companion::{
    Clock, Companion, FlushOnDrop, Point, Pose, RandomSource, Rect, SystemClock, ThreadRandom,
};

use crate::input::Pointer;

/// Ticks run at most this many times per rendered frame. Time beyond
/// that is dropped so a stalled window does not fast-forward the
/// character.
pub const MAX_CATCH_UP: u32 = 5;

/// Turns variable frame times into a whole number of fixed steps.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f64,
    accumulated: f64,
}

impl FixedStep {
    /// A timer that fires every `step` seconds.
    pub fn new(step: f64) -> Self {
        Self {
            step,
            accumulated: 0.0,
        }
    }

    /// Add `dt` seconds and return how many steps are due.
    pub fn advance(&mut self, dt: f64) -> u32 {
        if self.step <= 0.0 {
            return 0;
        }
        self.accumulated += dt.max(0.0);
        let mut due = 0;
        while self.accumulated >= self.step {
            self.accumulated -= self.step;
            due += 1;
        }
        due.min(MAX_CATCH_UP)
    }
}

/// What the left mouse button is holding on to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Grab {
    /// Nothing.
    #[default]
    None,
    /// The companion.
    Character,
    /// A window, by stack index, with the last cursor position.
    Window {
        /// Index in the desktop stack.
        index: usize,
        /// Cursor position at the previous move.
        last: Point,
    },
}

/// A click the companion made, kept briefly for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickMarker {
    /// Where the cursor was.
    pub at: Point,
    /// Which button.
    pub button: MouseButton,
    /// Epoch seconds when it happened.
    pub time: f64,
}

/// Shared state of the running host.
pub struct AppState<C: Clock = SystemClock, R: RandomSource = ThreadRandom> {
    /// The companion, flushed to disk when the state is dropped.
    pub companion: FlushOnDrop<C, R>,
    /// The windows the companion can stand on.
    pub desktop: VirtualDesktop,
    /// Receives the companion's click requests.
    pub injector: LoggingInjector,
    /// Current mouse grab.
    pub grab: Grab,
    /// Most recent synthetic click.
    pub last_click: Option<ClickMarker>,
    /// Whether the host should exit.
    pub should_quit: bool,
    stepper: FixedStep,
}

impl<C: Clock, R: RandomSource> AppState<C, R> {
    /// Create host state around `companion`.
    pub fn new(companion: Companion<R>, clock: C, desktop: VirtualDesktop) -> Self {
        let stepper = FixedStep::new(companion.config().tick_seconds());
        Self {
            companion: FlushOnDrop::new(companion, clock),
            desktop,
            injector: LoggingInjector::default(),
            grab: Grab::None,
            last_click: None,
            should_quit: false,
            stepper,
        }
    }

    /// Advance by `dt` seconds of frame time, running every tick that is
    /// due. Returns the number of ticks run.
    pub fn update(&mut self, dt: f64, cursor: Point) -> u32 {
        let due = self.stepper.advance(dt);
        for _ in 0..due {
            let now = self.companion.clock().now();
            let outcome = self
                .companion
                .tick(cursor, now, &self.desktop, &mut self.injector);
            if let Some(&button) = outcome.clicks.last() {
                self.last_click = Some(ClickMarker {
                    at: cursor,
                    button,
                    time: now,
                });
            }
            self.injector.requested.clear();
        }
        due
    }

    /// Route one frame of mouse input.
    ///
    /// Pressing on the companion drags it. Pressing on a window raises it
    /// and drags the window instead.
    pub fn apply_pointer(&mut self, pointer: &Pointer) {
        let at = pointer.position;
        if pointer.pressed {
            if self.companion.hit_test(at) {
                self.companion.press(at);
                self.grab = Grab::Character;
            } else if let Some(index) = self
                .movable_window_at(at)
                .and_then(|index| self.desktop.raise(index))
            {
                self.grab = Grab::Window { index, last: at };
            }
        }

        if pointer.held {
            match self.grab {
                Grab::Character => self.companion.drag_to(at, &self.desktop),
                Grab::Window { index, last } => {
                    self.desktop.move_by(index, at - last);
                    self.grab = Grab::Window { index, last: at };
                }
                Grab::None => {}
            }
        }

        if pointer.released {
            if self.grab == Grab::Character {
                self.companion.release();
            }
            self.grab = Grab::None;
        }
    }

    /// Derive the pose to draw this frame.
    pub fn pose(&mut self, cursor: Point) -> Pose {
        self.companion.render_pose(cursor)
    }

    /// The click marker, if it is still recent at `now`.
    pub fn click_marker(&self, now: f64, lifetime: f64) -> Option<ClickMarker> {
        self.last_click.filter(|c| now - c.time < lifetime)
    }

    fn movable_window_at(&self, at: Point) -> Option<usize> {
        let index = self.desktop.topmost_at(at)?;
        self.desktop
            .windows()
            .get(index)
            .is_some_and(WindowInfo::qualifies)
            .then_some(index)
    }
}

/// A desktop with a background and a few overlapping windows for the
/// companion to climb on.
pub fn sample_desktop(screen: Rect) -> VirtualDesktop {
    let w = screen.width();
    let h = screen.height();
    let mut desktop = VirtualDesktop::with_background(screen);
    desktop.push(WindowInfo::new(
        Rect::new(w * 0.06, h * 0.45, w * 0.46, h * 0.92),
        "Notepad",
        "notes.txt - Notepad",
    ));
    desktop.push(WindowInfo::new(
        Rect::new(w * 0.38, h * 0.18, w * 0.90, h * 0.70),
        "MozillaWindowClass",
        "crates.io: Rust Package Registry — Mozilla Firefox",
    ));
    desktop.push(WindowInfo::new(
        Rect::new(w * 0.62, h * 0.58, w * 0.96, h * 0.88),
        "ConsoleWindowClass",
        "Terminal",
    ));
    desktop.push(WindowInfo::new(
        Rect::new(w * 0.02, h * 0.05, w * 0.05, h * 0.10),
        "Tool",
        "tooltip",
    ));
    desktop
}
