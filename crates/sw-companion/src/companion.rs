use sw_memory::{MemoryRecord, MemoryStore};

use crate::character::{Action, CharacterState, Mood};
use crate::config::CompanionConfig;
use crate::error::{CompanionError, CompanionResult};
use crate::geometry::{Point, Rect};
use crate::physics::{self, Contacts};
use crate::platform::{InputInjector, MouseButton, WindowInfo, WindowService};
use crate::pose::Pose;
use crate::random::{RandomSource, ThreadRandom, pick};

/// Title of the surface used before any window has been found.
pub const DESKTOP_TITLE: &str = "<desktop>";

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Whether the cursor held the character's attention this tick.
    pub reacted: bool,
    /// Synthetic clicks requested, in order.
    pub clicks: Vec<MouseButton>,
    /// Surface edges touched while moving.
    pub contacts: Contacts,
    /// Whether the action was redrawn.
    pub decided: bool,
    /// Whether the window favorites were recomputed.
    pub favorites_refreshed: bool,
    /// Whether memory was flushed.
    pub flushed: bool,
}

/// The desktop companion: character state, memory, and behavior.
///
/// One instance lives for the whole process. The host calls
/// [`Companion::tick`] on a fixed timer, [`Companion::render_pose`] when
/// drawing, and the drag handlers on mouse input. All of these run on the
/// same thread.
pub struct Companion<R: RandomSource = ThreadRandom> {
    config: CompanionConfig,
    state: CharacterState,
    surface: Rect,
    surface_title: String,
    memory: MemoryRecord,
    store: Option<MemoryStore>,
    rng: R,
    last_flush: f64,
}

impl<R: RandomSource> std::fmt::Debug for Companion<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Companion")
            .field("frame", &self.state.frame)
            .field("action", &self.state.action)
            .field("mood", &self.state.mood)
            .field("surface", &self.surface_title)
            .finish()
    }
}

impl<R: RandomSource> Companion<R> {
    /// Create a companion resting at the center of the screen.
    ///
    /// The mood starts from the remembered `last_mood`. The surface starts
    /// as the whole screen.
    pub fn new(config: CompanionConfig, memory: MemoryRecord, rng: R, now: f64) -> Self {
        let mood = Mood::parse(&memory.last_mood);
        let state = CharacterState::at(config.screen_center_origin(), mood, now);
        let surface = config.screen_rect();
        Self {
            config,
            state,
            surface,
            surface_title: DESKTOP_TITLE.to_string(),
            memory,
            store: None,
            rng,
            last_flush: now,
        }
    }

    /// Attach a store used by periodic and final flushes.
    pub fn with_store(mut self, store: MemoryStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the horizontal velocity to a random launch speed.
    pub fn launch(&mut self) {
        if let Some(&vx) = pick(&mut self.rng, &self.config.launch_speeds) {
            self.state.vx = vx;
        }
    }

    /// Run one step of perception, physics, and decision making.
    pub fn tick<W, I>(
        &mut self,
        cursor: Point,
        now: f64,
        windows: &W,
        injector: &mut I,
    ) -> TickOutcome
    where
        W: WindowService + ?Sized,
        I: InputInjector + ?Sized,
    {
        let mut outcome = TickOutcome::default();
        self.state.frame += 1;

        let center = self.config.frame_center(self.state.position);
        if let Some(window) = windows.window_at(center) {
            self.adopt_surface(window);
        }

        outcome.favorites_refreshed = self.memory.refresh_favorites(
            now,
            self.config.favorites_interval,
            self.config.favorites_count,
        );

        let cursor_dist = self.config.head_point(self.state.position).distance(cursor);
        let curious = self.rng.roll(self.memory.personality.curiosity);

        if cursor_dist < self.config.vision_radius && curious {
            outcome.reacted = true;
            self.react(cursor, cursor_dist, injector, &mut outcome);
        } else {
            if !self.state.dragging {
                outcome.contacts = self.move_on_surface();
            }
            if now - self.state.last_action_change > self.config.decision_interval {
                self.decide(now);
                outcome.decided = true;
            }
        }

        physics::clamp_to_screen(&mut self.state, &self.config);

        if now - self.last_flush > self.config.save_interval {
            outcome.flushed = self.flush(now);
        }
        outcome
    }

    /// Derive the pose for drawing and remember where the reaching arm's
    /// tip ended up. The next tick's click test reads that tip.
    pub fn render_pose(&mut self, cursor: Point) -> Pose {
        let pose = Pose::compute(&self.state, cursor, &self.config);
        self.state.arm_tip = pose.reaching_tip(self.state.position);
        pose
    }

    fn react<I: InputInjector + ?Sized>(
        &mut self,
        cursor: Point,
        cursor_dist: f32,
        injector: &mut I,
        outcome: &mut TickOutcome,
    ) {
        if self.rng.roll(self.config.tap_chance) {
            if self.state.arm_tip.distance(cursor) < self.config.arm_tip_radius {
                self.click(MouseButton::Right, injector, outcome);
            }
            if cursor_dist < self.config.arm_reach {
                self.click(MouseButton::Left, injector, outcome);
            }
            self.set_action(Action::TapLeft);
        } else {
            self.set_action(Action::Wave);
        }
        self.state.vx = 0.0;
    }

    fn click<I: InputInjector + ?Sized>(
        &mut self,
        button: MouseButton,
        injector: &mut I,
        outcome: &mut TickOutcome,
    ) {
        injector.click(button);
        self.memory.record_click();
        outcome.clicks.push(button);
    }

    fn move_on_surface(&mut self) -> Contacts {
        let mut contacts = physics::step_vertical(&mut self.state, &self.surface, &self.config);
        if contacts.floor
            && self.state.action == Action::Walk
            && self.rng.roll(self.config.jump_chance)
        {
            self.state.vy = self.config.jump_impulse;
        }
        let sides = physics::step_horizontal(&mut self.state, &self.surface, &self.config);
        contacts.left = sides.left;
        contacts.right = sides.right;
        contacts
    }

    fn decide(&mut self, now: f64) {
        let favorites = self.memory.favorites.len();
        let explore = self.config.explore_base + self.config.explore_per_favorite * favorites as f64;
        let walk = (self.rng.roll(explore) && favorites > 0)
            || self.rng.roll(self.config.wander_chance);

        if walk {
            self.set_action(Action::Walk);
            if let Some(&vx) = pick(&mut self.rng, &self.config.walk_speeds) {
                self.state.vx = vx;
            }
        } else {
            self.set_action(Action::Idle);
            self.state.vx = 0.0;
        }
        self.state.last_action_change = now;
    }

    fn set_action(&mut self, action: Action) {
        if self.state.action != action {
            log::debug!("Action {} -> {}", self.state.action, action);
            self.state.action = action;
        }
    }

    fn adopt_surface(&mut self, window: WindowInfo) {
        if self.surface_title != window.title {
            log::debug!("Standing on \"{}\"", window.title);
        }
        self.surface = window.rect;
        self.memory.observe_window(&window.title);
        self.surface_title = window.title;
    }

    /// Whether `point` lies on the character frame.
    pub fn hit_test(&self, point: Point) -> bool {
        self.config.frame_rect(self.state.position).contains(point)
    }

    /// Start dragging from `cursor`. Velocity is cleared.
    pub fn press(&mut self, cursor: Point) {
        self.state.dragging = true;
        self.state.drag_offset = cursor - self.state.position;
        self.state.vx = 0.0;
        self.state.vy = 0.0;
    }

    /// Move the character with the cursor while dragging, looking up the
    /// window now under the cursor.
    pub fn drag_to<W: WindowService + ?Sized>(&mut self, cursor: Point, windows: &W) {
        if !self.state.dragging {
            return;
        }
        self.state.position = cursor - self.state.drag_offset;
        if let Some(window) = windows.window_at(cursor) {
            self.adopt_surface(window);
        }
    }

    /// Let go of the character, throwing it sideways.
    pub fn release(&mut self) {
        if !self.state.dragging {
            return;
        }
        self.state.dragging = false;
        self.launch();
    }

    /// Save memory through the attached store, logging any failure.
    ///
    /// Returns `true` if the record reached disk. The flush timer restarts
    /// either way.
    pub fn flush(&mut self, now: f64) -> bool {
        self.last_flush = now;
        match &self.store {
            Some(store) => store.flush(&mut self.memory, now),
            None => false,
        }
    }

    /// Save memory through the attached store, returning any failure.
    pub fn save(&mut self, now: f64) -> CompanionResult<()> {
        let store = self.store.as_ref().ok_or(CompanionError::NoStore)?;
        self.last_flush = now;
        store.save(&mut self.memory, now)?;
        Ok(())
    }

    /// The character state.
    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    /// Mutable character state, for hosts that reposition the character.
    pub fn state_mut(&mut self) -> &mut CharacterState {
        &mut self.state
    }

    /// The remembered record.
    pub fn memory(&self) -> &MemoryRecord {
        &self.memory
    }

    /// Mutable access to the remembered record.
    pub fn memory_mut(&mut self) -> &mut MemoryRecord {
        &mut self.memory
    }

    /// The surface the character currently walks on.
    pub fn surface(&self) -> &Rect {
        &self.surface
    }

    /// Title of the current surface.
    pub fn surface_title(&self) -> &str {
        &self.surface_title
    }

    /// The configuration in use.
    pub fn config(&self) -> &CompanionConfig {
        &self.config
    }

    /// The random source, for inspection in tests.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// The attached store, if any.
    pub fn store(&self) -> Option<&MemoryStore> {
        self.store.as_ref()
    }

    /// Consume the companion, returning its memory.
    pub fn into_memory(self) -> MemoryRecord {
        self.memory
    }
}
