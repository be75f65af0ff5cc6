use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::observations::ObservationCounts;
use crate::sites::site_from_title;

/// Personality traits steering the companion's behavior. Each is in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personality {
    /// Chance per tick of paying attention to a nearby cursor.
    pub curiosity: f64,
    /// General restlessness.
    pub activity: f64,
    /// Tendency to stay with one window.
    pub focus: f64,
    /// Keys this version does not know about, kept for the next save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            curiosity: 0.5,
            activity: 0.5,
            focus: 0.5,
            extra: Map::new(),
        }
    }
}

impl Personality {
    /// Clamp every trait into `0.0..=1.0`. Non-finite values reset to the default.
    pub fn clamp(&mut self) {
        for value in [&mut self.curiosity, &mut self.activity, &mut self.focus] {
            *value = if value.is_finite() {
                (*value).clamp(0.0, 1.0)
            } else {
                0.5
            };
        }
    }
}

/// Everything the companion remembers between sessions.
///
/// Field names match the on-disk JSON keys. Missing keys deserialize to
/// their defaults; unknown top-level keys land in [`MemoryRecord::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryRecord {
    /// Total synthetic clicks performed.
    pub clicks: u64,
    /// Observation count per window title.
    pub windows_seen: ObservationCounts,
    /// Observation count per browser page.
    pub websites_seen: ObservationCounts,
    /// Most observed window titles.
    pub favorites: Vec<String>,
    /// Most observed browser pages.
    pub fav_sites: Vec<String>,
    /// Mood at the last save.
    pub last_mood: String,
    /// Behavioral traits.
    pub personality: Personality,
    /// Free-form notes.
    pub thoughts: Vec<String>,
    /// Epoch seconds of the last save, if any.
    pub last_saved: Option<f64>,
    /// Epoch seconds of the last favorites refresh.
    #[serde(rename = "_fav_updated", deserialize_with = "zero_if_null")]
    pub fav_updated: f64,
    /// Epoch seconds of the last favorite-sites refresh.
    #[serde(rename = "_fav_sites_updated", deserialize_with = "zero_if_null")]
    pub fav_sites_updated: f64,
    /// Top-level keys this version does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for MemoryRecord {
    fn default() -> Self {
        Self {
            clicks: 0,
            windows_seen: ObservationCounts::new(),
            websites_seen: ObservationCounts::new(),
            favorites: Vec::new(),
            fav_sites: Vec::new(),
            last_mood: "neutral".to_string(),
            personality: Personality::default(),
            thoughts: Vec::new(),
            last_saved: None,
            fav_updated: 0.0,
            fav_sites_updated: 0.0,
            extra: Map::new(),
        }
    }
}

fn zero_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Option::<f64>::deserialize(deserializer).map(|v| v.unwrap_or(0.0))
}

impl MemoryRecord {
    /// Parse a record from JSON text, back-filling missing keys.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let mut record: Self = serde_json::from_str(text)?;
        record.personality.clamp();
        Ok(record)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Record one sighting of a window title. Browser pages are also
    /// counted per site.
    pub fn observe_window(&mut self, title: &str) {
        if title.is_empty() {
            return;
        }
        self.windows_seen.observe(title);
        if let Some(site) = site_from_title(title) {
            self.websites_seen.observe(site);
        }
    }

    /// Recompute `favorites` and `fav_sites` when at least `interval`
    /// seconds have passed since their last refresh.
    ///
    /// Returns `true` if the window favorites were recomputed.
    pub fn refresh_favorites(&mut self, now: f64, interval: f64, count: usize) -> bool {
        let mut refreshed = false;
        if now - self.fav_updated >= interval {
            self.favorites = self.windows_seen.top(count);
            self.fav_updated = now;
            refreshed = true;
        }
        if now - self.fav_sites_updated >= interval {
            self.fav_sites = self.websites_seen.top(count);
            self.fav_sites_updated = now;
        }
        refreshed
    }

    /// Count one synthetic click.
    pub fn record_click(&mut self) {
        self.clicks += 1;
    }
}
