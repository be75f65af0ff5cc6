//! Procedural limb posing.
//!
//! Nothing here is stored between frames. A [`Pose`] is derived from the
//! character state and the cursor each time the host draws. All points are
//! local to the character frame.

use crate::character::{Action, CharacterState};
use crate::config::{CompanionConfig, NECK_Y, TORSO_X};
use crate::geometry::{Point, rotate_point};

/// Head center in frame coordinates.
pub const HEAD_CENTER: Point = Point::new(TORSO_X, 20.0);
/// Head radius.
pub const HEAD_RADIUS: f32 = 12.0;
/// Top of the torso; arms rotate about this point.
pub const BODY_TOP: Point = Point::new(TORSO_X, NECK_Y);
/// Bottom of the torso; legs rotate about this point.
pub const BODY_BOTTOM: Point = Point::new(TORSO_X, 100.0);
/// Where the arms are drawn from.
pub const SHOULDER: Point = Point::new(TORSO_X, NECK_Y + 10.0);
/// Leg length.
pub const LEG_LENGTH: f32 = 50.0;
/// Arm length.
pub const ARM_LENGTH: f32 = 40.0;

/// A limb drawn as one straight segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

/// Every drawable part of the stickman, in frame coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    /// Head circle center.
    pub head: Point,
    /// Head circle radius.
    pub head_radius: f32,
    /// Torso segment.
    pub body: Segment,
    /// Left leg.
    pub left_leg: Segment,
    /// Right leg.
    pub right_leg: Segment,
    /// Arm that always swings against the legs.
    pub left_arm: Segment,
    /// Arm that waves or reaches for the cursor.
    pub reaching_arm: Segment,
    /// Angle of the reaching arm in degrees.
    pub reaching_angle: f32,
    /// Whether the reaching arm is following the cursor.
    pub tracking_cursor: bool,
}

/// Gait swing in degrees for the current frame.
pub fn swing(state: &CharacterState) -> f32 {
    let t = state.frame as f32 / 12.0;
    match state.action {
        Action::Walk => {
            let speed_factor = state.vx.abs().max(1.0);
            15.0 * t.sin() * speed_factor / 4.0
        }
        Action::Wave => 0.0,
        Action::Idle | Action::TapLeft => 3.0 * (t / 2.0).sin(),
    }
}

impl Pose {
    /// Derive the pose for `state` with the cursor at `cursor` (screen
    /// coordinates).
    pub fn compute(state: &CharacterState, cursor: Point, config: &CompanionConfig) -> Self {
        let t = state.frame as f32 / 12.0;
        let swing = swing(state);

        let foot = Point::new(BODY_BOTTOM.x, BODY_BOTTOM.y + LEG_LENGTH);
        let left_leg = rotate_point(foot, BODY_BOTTOM, -15.0 + swing);
        let right_leg = rotate_point(foot, BODY_BOTTOM, 15.0 - swing);

        let shoulder_world = state.position + SHOULDER;
        let offset = cursor - shoulder_world;
        let cursor_dist = offset.x.hypot(offset.y);

        let tracking_cursor = cursor_dist < config.arm_reach && state.mood.is_engaged();
        let reaching_angle = if tracking_cursor {
            offset.y.atan2(offset.x).to_degrees() - 90.0
        } else if state.action == Action::Wave {
            (40.0 * t.sin()).max(0.0)
        } else {
            25.0 - swing / 2.0
        };
        let left_arm_angle = -25.0 + swing / 2.0;

        let hand = Point::new(BODY_TOP.x, SHOULDER.y + ARM_LENGTH);
        let left_hand = rotate_point(hand, BODY_TOP, left_arm_angle);
        let reaching_hand = rotate_point(hand, BODY_TOP, reaching_angle);

        Self {
            head: HEAD_CENTER,
            head_radius: HEAD_RADIUS,
            body: Segment {
                from: BODY_TOP,
                to: BODY_BOTTOM,
            },
            left_leg: Segment {
                from: BODY_BOTTOM,
                to: left_leg,
            },
            right_leg: Segment {
                from: BODY_BOTTOM,
                to: right_leg,
            },
            left_arm: Segment {
                from: SHOULDER,
                to: left_hand,
            },
            reaching_arm: Segment {
                from: SHOULDER,
                to: reaching_hand,
            },
            reaching_angle,
            tracking_cursor,
        }
    }

    /// Screen position of the reaching arm's tip for a frame at `origin`.
    pub fn reaching_tip(&self, origin: Point) -> Point {
        origin + self.reaching_arm.to
    }
}
