use std::fmt;

use crate::geometry::Point;

/// What the character is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Standing still.
    #[default]
    Idle,
    /// Walking along the surface.
    Walk,
    /// Waving at a nearby cursor.
    Wave,
    /// Reaching out to tap the cursor.
    TapLeft,
}

impl Action {
    /// The action's persisted name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Wave => "wave",
            Self::TapLeft => "tap_left",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The character's mood. Curious and happy moods let the reaching arm
/// follow the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mood {
    /// No particular mood.
    #[default]
    Neutral,
    /// Paying attention to the cursor.
    Curious,
    /// Just played with the cursor.
    Happy,
    /// A mood name this version does not know.
    Other(String),
}

impl Mood {
    /// Parse a persisted mood name. Unknown names are kept as [`Mood::Other`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "neutral" | "" => Self::Neutral,
            "curious" => Self::Curious,
            "happy" => Self::Happy,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Whether this mood makes the reaching arm track the cursor.
    pub fn is_engaged(&self) -> bool {
        matches!(self, Self::Curious | Self::Happy)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => f.write_str("neutral"),
            Self::Curious => f.write_str("curious"),
            Self::Happy => f.write_str("happy"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Physical and behavioral state of the character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    /// Top-left origin of the character frame.
    pub position: Point,
    /// Horizontal velocity in pixels per tick.
    pub vx: f32,
    /// Vertical velocity in pixels per tick.
    pub vy: f32,
    /// Current action.
    pub action: Action,
    /// Ticks since start; drives the walk cycle.
    pub frame: u64,
    /// Epoch seconds when the action was last redrawn.
    pub last_action_change: f64,
    /// Current mood.
    pub mood: Mood,
    /// Screen position of the reaching arm's tip as of the last render.
    pub arm_tip: Point,
    /// Whether the user is dragging the character.
    pub dragging: bool,
    /// Cursor offset from the origin captured when the drag started.
    pub drag_offset: Point,
}

impl CharacterState {
    /// A resting character at `position`.
    pub fn at(position: Point, mood: Mood, now: f64) -> Self {
        Self {
            position,
            vx: 0.0,
            vy: 0.0,
            action: Action::Idle,
            frame: 0,
            last_action_change: now,
            mood,
            arm_tip: Point::default(),
            dragging: false,
            drag_offset: Point::default(),
        }
    }
}
