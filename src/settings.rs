//! Audio preferences for the current page session
//!
//! Held in memory only; the high score is the one thing the game persists.

/// Volume and mute preferences
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence everything
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,
        }
    }
}

impl Settings {
    /// Volume the mixer should use right now
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Copy of these settings with audio silenced, for while the page is unfocused
    pub fn blurred(&self) -> Self {
        Self {
            muted: self.muted || self.mute_on_blur,
            ..self.clone()
        }
    }
}
