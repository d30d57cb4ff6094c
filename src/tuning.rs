//! Data-driven game balance
//!
//! Defaults reproduce the classic arena. Overrides load from JSON; any field
//! left out keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name} range is empty ({min} > {max})")]
    EmptyRange { name: &'static str, min: u32, max: u32 },
    #[error("cooldown interval must be positive, got {0}")]
    CooldownInterval(f32),
    #[error("{name} must be a finite non-negative number, got {value}")]
    Speed { name: &'static str, value: f32 },
    #[error("enemy damage must stay within {lo}..={hi}, got {min}..={max}")]
    DamageOutOfRange { min: u32, max: u32, lo: u32, hi: u32 },
}

/// Bounds on a skeleton's rolled attack damage
pub const DAMAGE_BOUNDS: (u32, u32) = (1, 10);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Skeletons spawned per session
    pub enemy_count: u32,
    /// Max speed per axis for a wandering skeleton (units/tick)
    pub enemy_speed: f32,
    /// Attack damage is rolled once per skeleton in this range
    pub enemy_damage_min: u32,
    pub enemy_damage_max: u32,
    /// Ticks a skeleton waits after landing a hit
    pub attack_cooldown_ticks: u32,
    /// Elapsed time between cooldown decrements
    pub cooldown_interval: f32,
    /// Coins per batch, rolled once per batch
    pub coin_batch_min: u32,
    pub coin_batch_max: u32,
    /// Player walk speed (units/tick)
    pub player_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_count: 15,
            enemy_speed: 1.0,
            enemy_damage_min: 1,
            enemy_damage_max: 10,
            attack_cooldown_ticks: 300,
            cooldown_interval: 1.0,
            coin_batch_min: 10,
            coin_batch_max: 40,
            player_speed: 2.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("enemy speed", self.enemy_speed),
            ("player speed", self.player_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Speed { name, value });
            }
        }
        let (lo, hi) = DAMAGE_BOUNDS;
        if self.enemy_damage_min < lo || self.enemy_damage_max > hi {
            return Err(TuningError::DamageOutOfRange {
                min: self.enemy_damage_min,
                max: self.enemy_damage_max,
                lo,
                hi,
            });
        }
        if self.enemy_damage_min > self.enemy_damage_max {
            return Err(TuningError::EmptyRange {
                name: "enemy damage",
                min: self.enemy_damage_min,
                max: self.enemy_damage_max,
            });
        }
        if self.coin_batch_min > self.coin_batch_max || self.coin_batch_min == 0 {
            return Err(TuningError::EmptyRange {
                name: "coin batch",
                min: self.coin_batch_min,
                max: self.coin_batch_max,
            });
        }
        if self.cooldown_interval <= 0.0 || !self.cooldown_interval.is_finite() {
            return Err(TuningError::CooldownInterval(self.cooldown_interval));
        }
        Ok(())
    }
}
