use crate::character::CharacterState;
use crate::config::CompanionConfig;
use crate::geometry::Rect;

/// Which surface edges the hitbox was pushed back from during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    /// Came to rest on the bottom edge.
    pub floor: bool,
    /// Hit the top edge.
    pub ceiling: bool,
    /// Bounced off the left edge.
    pub left: bool,
    /// Bounced off the right edge.
    pub right: bool,
}

impl Contacts {
    /// Whether any edge was touched.
    pub fn any(&self) -> bool {
        self.floor || self.ceiling || self.left || self.right
    }
}

/// Apply gravity, then move vertically and resolve against the top and
/// bottom edges of `surface`.
pub fn step_vertical(
    state: &mut CharacterState,
    surface: &Rect,
    config: &CompanionConfig,
) -> Contacts {
    state.vy += config.gravity;
    state.position.y += state.vy;

    let mut contacts = Contacts::default();
    let hitbox = config.hitbox(state.position);
    if hitbox.bottom > surface.bottom {
        state.position.y -= hitbox.bottom - surface.bottom;
        state.vy = 0.0;
        contacts.floor = true;
    }
    let hitbox = config.hitbox(state.position);
    if hitbox.top < surface.top {
        state.position.y += surface.top - hitbox.top;
        state.vy = 0.0;
        contacts.ceiling = true;
    }
    contacts
}

/// Move horizontally and reflect off the left and right edges of `surface`.
pub fn step_horizontal(
    state: &mut CharacterState,
    surface: &Rect,
    config: &CompanionConfig,
) -> Contacts {
    state.position.x += state.vx;

    let mut contacts = Contacts::default();
    let hitbox = config.hitbox(state.position);
    if hitbox.left < surface.left {
        state.position.x += surface.left - hitbox.left;
        state.vx = -state.vx;
        contacts.left = true;
    }
    let hitbox = config.hitbox(state.position);
    if hitbox.right > surface.right {
        state.position.x -= hitbox.right - surface.right;
        state.vx = -state.vx;
        contacts.right = true;
    }
    contacts
}

/// Keep the whole character frame on screen.
pub fn clamp_to_screen(state: &mut CharacterState, config: &CompanionConfig) {
    let max_x = (config.screen_width - config.frame_width).max(0.0);
    let max_y = (config.screen_height - config.frame_height).max(0.0);
    state.position.x = state.position.x.clamp(0.0, max_x);
    state.position.y = state.position.y.clamp(0.0, max_y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Mood;
    use crate::geometry::Point;

    fn state_at(x: f32, y: f32) -> CharacterState {
        CharacterState::at(Point::new(x, y), Mood::Neutral, 0.0)
    }

    #[test]
    fn free_fall_accumulates_gravity() {
        let config = CompanionConfig::default();
        let surface = config.screen_rect();
        let mut state = state_at(500.0, 100.0);

        let contacts = step_vertical(&mut state, &surface, &config);
        assert!(!contacts.any());
        assert_eq!(state.vy, 0.8);
        assert_eq!(state.position.y, 100.8);
    }

    #[test]
    fn lands_exactly_on_surface_bottom() {
        let config = CompanionConfig::default().with_gravity(1.0);
        let surface = Rect::new(0.0, 0.0, 1000.0, 500.0);
        // Hitbox bottom starts at 497; falling 10 px overshoots by 7.
        let mut state = state_at(200.0, 315.0);
        state.vy = 9.0;

        let contacts = step_vertical(&mut state, &surface, &config);
        assert!(contacts.floor);
        assert_eq!(state.vy, 0.0);
        assert_eq!(config.hitbox(state.position).bottom, surface.bottom);
        assert_eq!(state.position.y, 318.0);
    }

    #[test]
    fn ceiling_pushes_down() {
        let config = CompanionConfig::default().with_gravity(1.0);
        let surface = Rect::new(0.0, 300.0, 1000.0, 900.0);
        let mut state = state_at(200.0, 270.0);
        state.vy = -11.0;

        let contacts = step_vertical(&mut state, &surface, &config);
        assert!(contacts.ceiling);
        assert!(!contacts.floor);
        assert_eq!(state.vy, 0.0);
        assert_eq!(config.hitbox(state.position).top, surface.top);
    }

    #[test]
    fn left_edge_reflects() {
        let config = CompanionConfig::default();
        let surface = Rect::new(100.0, 0.0, 800.0, 900.0);
        let mut state = state_at(80.0, 0.0);
        state.vx = -6.0;

        let contacts = step_horizontal(&mut state, &surface, &config);
        assert!(contacts.left);
        assert_eq!(state.vx, 6.0);
        assert_eq!(config.hitbox(state.position).left, surface.left);
    }

    #[test]
    fn right_edge_reflects() {
        let config = CompanionConfig::default();
        let surface = Rect::new(100.0, 0.0, 800.0, 900.0);
        let mut state = state_at(672.0, 0.0);
        state.vx = 5.0;

        let contacts = step_horizontal(&mut state, &surface, &config);
        assert!(contacts.right);
        assert_eq!(state.vx, -5.0);
        assert_eq!(config.hitbox(state.position).right, surface.right);
    }

    #[test]
    fn inside_surface_moves_freely() {
        let config = CompanionConfig::default();
        let surface = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let mut state = state_at(400.0, 0.0);
        state.vx = -5.0;

        let contacts = step_horizontal(&mut state, &surface, &config);
        assert!(!contacts.any());
        assert_eq!(state.position.x, 395.0);
        assert_eq!(state.vx, -5.0);
    }

    #[test]
    fn clamp_keeps_frame_on_screen() {
        let config = CompanionConfig::default().with_screen(800.0, 600.0);
        let mut state = state_at(-40.0, 900.0);
        clamp_to_screen(&mut state, &config);
        assert_eq!(state.position, Point::new(0.0, 350.0));

        let mut state = state_at(760.0, -3.0);
        clamp_to_screen(&mut state, &config);
        assert_eq!(state.position, Point::new(650.0, 0.0));
    }
}
