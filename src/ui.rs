//! HUD and end-screen text
//!
//! The exact strings are part of what players see, so they are built here in
//! one place and the host only copies them into the page.

use serde::Serialize;

use crate::consts::HEALTH_BAR_SCALE;
use crate::sim::{GamePhase, GameSession};

pub const GAME_OVER_TITLE: &str = "You died! :(";
pub const START_LABEL: &str = "Start Game";

/// Health counter text, e.g. `93 HP`
pub fn health_label(health: u32) -> String {
    format!("{} HP", health)
}

/// Width of the red health bar in pixels
pub fn health_bar_width(health: u32) -> f32 {
    health as f32 * HEALTH_BAR_SCALE
}

/// End-screen score line
pub fn end_summary(score: u64) -> String {
    format!("You managed to collect {} coins! Nice job!", score)
}

/// End-screen best line
pub fn high_score_line(high_score: u64) -> String {
    format!("Your highest ever is {}", high_score)
}

/// Everything the HUD shows for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub phase: &'static str,
    pub score: String,
    pub health: String,
    pub health_bar_width: f32,
    /// Present once the run has ended
    pub summary: Option<String>,
    pub best: Option<String>,
}

impl Hud {
    pub fn from_session(session: &GameSession) -> Self {
        let health = session.player.health;
        let ended = session.phase == GamePhase::End;
        Self {
            phase: match session.phase {
                GamePhase::Menu => "menu",
                GamePhase::Playing => "playing",
                GamePhase::End => "end",
            },
            score: session.score.to_string(),
            health: health_label(health),
            health_bar_width: health_bar_width(health),
            summary: ended.then(|| end_summary(session.score)),
            best: session
                .high_score
                .filter(|_| ended)
                .map(high_score_line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_labels() {
        assert_eq!(health_label(93), "93 HP");
        assert_eq!(health_bar_width(100), 200.0);
        assert_eq!(health_bar_width(0), 0.0);
        assert_eq!(end_summary(12), "You managed to collect 12 coins! Nice job!");
        assert_eq!(high_score_line(40), "Your highest ever is 40");
    }

    #[test]
    fn test_hud_end_lines_only_after_death() {
        let mut store = MemoryStore::new();
        let mut session = GameSession::new(1);
        session.start();

        let hud = Hud::from_session(&session);
        assert_eq!(hud.phase, "playing");
        assert_eq!(hud.health, "100 HP");
        assert!(hud.summary.is_none() && hud.best.is_none());

        session.score = 7;
        session.player.health = 0;
        session.end_game(&mut store);
        let hud = Hud::from_session(&session);
        assert_eq!(hud.health, "0 HP");
        assert_eq!(hud.summary.as_deref(), Some("You managed to collect 7 coins! Nice job!"));
        assert_eq!(hud.best.as_deref(), Some("Your highest ever is 7"));
    }
}
