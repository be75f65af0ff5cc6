use crate::geometry::{Point, Rect};

/// Tunable constants for a companion.
///
/// Distances are screen pixels, velocities pixels per tick, and intervals
/// wall-clock seconds.
#[derive(Debug, Clone)]
pub struct CompanionConfig {
    /// Screen width the character is clamped to.
    pub screen_width: f32,
    /// Screen height the character is clamped to.
    pub screen_height: f32,
    /// Width of the character frame.
    pub frame_width: f32,
    /// Height of the character frame.
    pub frame_height: f32,
    /// Collision hitbox width, centered on the torso.
    pub hitbox_width: f32,
    /// Collision hitbox height, starting at the neck.
    pub hitbox_height: f32,
    /// Distance within which the cursor is noticed.
    pub vision_radius: f32,
    /// Distance within which the reaching arm can touch the cursor.
    pub arm_reach: f32,
    /// How close the arm tip must be to the cursor for a right click.
    pub arm_tip_radius: f32,
    /// Downward acceleration per tick.
    pub gravity: f32,
    /// Vertical velocity of a bounce.
    pub jump_impulse: f32,
    /// Chance per landing tick of bouncing while walking.
    pub jump_chance: f64,
    /// Chance per reactive tick of tapping instead of waving.
    pub tap_chance: f64,
    /// Base chance of walking when favorites are known.
    pub explore_base: f64,
    /// Extra walking chance per known favorite.
    pub explore_per_favorite: f64,
    /// Chance of walking when not exploring.
    pub wander_chance: f64,
    /// Horizontal speeds to pick from when starting to walk.
    pub walk_speeds: Vec<f32>,
    /// Horizontal speeds to pick from when launched or released.
    pub launch_speeds: Vec<f32>,
    /// Seconds between action decisions.
    pub decision_interval: f64,
    /// Seconds between favorites refreshes.
    pub favorites_interval: f64,
    /// Number of favorites to keep.
    pub favorites_count: usize,
    /// Seconds between periodic memory flushes.
    pub save_interval: f64,
    /// Milliseconds between ticks.
    pub tick_ms: u64,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            screen_width: 1920.0,
            screen_height: 1080.0,
            frame_width: 150.0,
            frame_height: 250.0,
            hitbox_width: 100.0,
            hitbox_height: 150.0,
            vision_radius: 200.0,
            arm_reach: 120.0,
            arm_tip_radius: 10.0,
            gravity: 0.8,
            jump_impulse: -12.0,
            jump_chance: 0.01,
            tap_chance: 0.01,
            explore_base: 0.2,
            explore_per_favorite: 0.1,
            wander_chance: 0.3,
            walk_speeds: vec![-6.0, -5.0, 5.0, 6.0],
            launch_speeds: vec![-5.0, 5.0],
            decision_interval: 1.2,
            favorites_interval: 30.0,
            favorites_count: 3,
            save_interval: 300.0,
            tick_ms: 30,
        }
    }
}

/// Torso x offset within the frame.
pub(crate) const TORSO_X: f32 = 75.0;
/// Neck y offset within the frame; the head point for cursor distance.
pub(crate) const NECK_Y: f32 = 32.0;

impl CompanionConfig {
    /// Set the screen size.
    pub fn with_screen(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Set the vision radius and arm reach.
    pub fn with_reach(mut self, vision_radius: f32, arm_reach: f32) -> Self {
        self.vision_radius = vision_radius;
        self.arm_reach = arm_reach;
        self
    }

    /// Set the per-tick gravity.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the periodic flush interval in seconds.
    pub fn with_save_interval(mut self, seconds: f64) -> Self {
        self.save_interval = seconds;
        self
    }

    /// The whole screen as a rectangle.
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.screen_width, self.screen_height)
    }

    /// Frame origin that centers the character on the screen.
    pub fn screen_center_origin(&self) -> Point {
        Point::new(
            (self.screen_width / 2.0 - self.frame_width / 2.0).floor(),
            (self.screen_height / 2.0 - self.frame_height / 2.0).floor(),
        )
    }

    /// Center of the character frame.
    pub fn frame_center(&self, origin: Point) -> Point {
        Point::new(
            origin.x + self.frame_width / 2.0,
            origin.y + self.frame_height / 2.0,
        )
    }

    /// The character frame in screen coordinates.
    pub fn frame_rect(&self, origin: Point) -> Rect {
        Rect::from_origin(origin, self.frame_width, self.frame_height)
    }

    /// The head point used for cursor distance.
    pub fn head_point(&self, origin: Point) -> Point {
        Point::new(origin.x + TORSO_X, origin.y + NECK_Y)
    }

    /// The collision hitbox in screen coordinates.
    pub fn hitbox(&self, origin: Point) -> Rect {
        let left = origin.x + TORSO_X - (self.hitbox_width / 2.0).floor();
        let top = origin.y + NECK_Y;
        Rect::new(left, top, left + self.hitbox_width, top + self.hitbox_height)
    }

    /// The tick interval as a duration in seconds.
    pub fn tick_seconds(&self) -> f64 {
        self.tick_ms as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = CompanionConfig::default();
        assert_eq!(config.frame_width, 150.0);
        assert_eq!(config.hitbox_height, 150.0);
        assert!((config.gravity - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.favorites_count, 3);
        assert_eq!(config.tick_ms, 30);
        assert!((config.tick_seconds() - 0.03).abs() < f64::EPSILON);
    }

    #[test]
    fn config_builder_chain() {
        let config = CompanionConfig::default()
            .with_screen(800.0, 600.0)
            .with_reach(300.0, 90.0)
            .with_gravity(1.5)
            .with_save_interval(10.0);
        assert_eq!(config.screen_rect(), Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(config.vision_radius, 300.0);
        assert_eq!(config.arm_reach, 90.0);
        assert_eq!(config.gravity, 1.5);
        assert_eq!(config.save_interval, 10.0);
    }

    #[test]
    fn hitbox_is_centered_on_torso() {
        let config = CompanionConfig::default();
        let hitbox = config.hitbox(Point::new(100.0, 200.0));
        assert_eq!(hitbox, Rect::new(125.0, 232.0, 225.0, 382.0));
        assert_eq!(config.head_point(Point::new(100.0, 200.0)), Point::new(175.0, 232.0));
    }

    #[test]
    fn centered_origin() {
        let config = CompanionConfig::default().with_screen(1000.0, 800.0);
        assert_eq!(config.screen_center_origin(), Point::new(425.0, 275.0));
        assert_eq!(
            config.frame_center(config.screen_center_origin()),
            Point::new(500.0, 400.0)
        );
    }
}
