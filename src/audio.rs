//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Skeleton landed a hit (the trumpet "doot")
    Doot,
    /// Coin picked up
    CoinPickup,
    /// Player died
    GameOver,
}

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PlayerHit { .. } => Some(SoundEffect::Doot),
            GameEvent::CoinCollected { .. } => Some(SoundEffect::CoinPickup),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::Started | GameEvent::CoinsRespawned { .. } => None,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_volume(),
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Pick up changed volume/mute settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
    }

    /// Play a sound effect; fire and forget
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Doot => self.play_doot(ctx, vol),
            SoundEffect::CoinPickup => self.play_coin(ctx, vol),
            SoundEffect::GameOver => self.play_game_over(ctx, vol),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Two brassy trumpet blasts
    fn play_doot(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();

        for (offset, freq) in [(0.0, 233.0), (0.18, 233.0)] {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Sawtooth) else {
                return;
            };
            let start = t + offset;
            gain.gain().set_value_at_time(0.01, start).ok();
            gain.gain()
                .linear_ramp_to_value_at_time(vol * 0.35, start + 0.02)
                .ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, start + 0.15)
                .ok();
            // Slight lip bend up into the note
            osc.frequency().set_value_at_time(freq * 0.94, start).ok();
            osc.frequency()
                .linear_ramp_to_value_at_time(freq, start + 0.04)
                .ok();
            osc.start_with_when(start).ok();
            osc.stop_with_when(start + 0.16).ok();
        }
    }

    /// Coin - bright two-step chime
    fn play_coin(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 988.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.15, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.2)
            .ok();
        osc.frequency().set_value_at_time(988.0, t).ok();
        osc.frequency().set_value_at_time(1319.0, t + 0.06).ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.22).ok();
    }

    /// Game over - slow falling tone
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 1.2)
            .ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(60.0, t + 1.2)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 1.25).ok();
    }
}
