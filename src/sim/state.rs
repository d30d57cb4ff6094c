//! Game session and phase machine
//!
//! `GameSession` owns everything a run needs: the phase, score, the player,
//! the skeleton pack, the coin field, the shared cooldown clock, the controls
//! and the seeded RNG. Hosts drive it through `tick` and read it back through
//! accessors and the drained event queue.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ai::{self, CooldownClock};
use super::coins::CoinField;
use super::entity::{Enemy, EntityRef, Player};
use crate::consts::*;
use crate::highscores;
use crate::input::Controls;
use crate::persistence::KeyValueStore;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen, waiting for Start
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Player died; final
    End,
}

/// Something the presentation layer should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Left the menu
    Started,
    /// A skeleton landed a hit (play the damage cue, refresh the health bar)
    PlayerHit {
        enemy_id: u32,
        damage: u32,
        health: u32,
    },
    /// One coin picked up
    CoinCollected { score: u64 },
    /// The field ran dry and was refilled
    CoinsRespawned { count: u32 },
    /// Run ended
    GameOver { score: u64, high_score: u64 },
}

#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Coins collected this run
    pub score: u64,
    /// Best score, known once the run has ended
    pub high_score: Option<u64>,
    /// Playing ticks simulated so far
    pub time_ticks: u64,
    pub player: Player,
    /// Skeletons in spawn order
    pub enemies: Vec<Enemy>,
    pub coins: CoinField,
    pub cooldown_clock: CooldownClock,
    pub controls: Controls,
    pub(crate) events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session in the menu with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a session with custom balance. Tuning that fails validation
    /// is replaced by the defaults.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning ({}), using defaults", e);
                Tuning::default()
            }
        };
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemies = ai::spawn_enemies(&mut rng, &tuning, 1);
        let mut coins = CoinField::new();
        coins.spawn_batch(&mut rng, &tuning);

        Self {
            seed,
            tuning,
            rng,
            phase: GamePhase::Menu,
            score: 0,
            high_score: None,
            time_ticks: 0,
            player: Player::new(Vec2::new(ARENA_MIN_X, ARENA_TOP)),
            enemies,
            coins,
            cooldown_clock: CooldownClock::new(),
            controls: Controls::new(),
            events: Vec::new(),
        }
    }

    /// Menu -> Playing. Returns false from any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        self.phase = GamePhase::Playing;
        self.emit(GameEvent::Started);
        log::info!("Session started (seed {})", self.seed);
        true
    }

    /// Playing -> End, recording the high score. No-op from any other phase.
    pub fn end_game<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        if self.phase != GamePhase::Playing {
            return;
        }

        let high_score = highscores::record(store, self.score);
        self.high_score = Some(high_score);
        self.phase = GamePhase::End;
        self.emit(GameEvent::GameOver {
            score: self.score,
            high_score,
        });
        log::info!(
            "Game over after {} ticks: {} coins (best {})",
            self.time_ticks,
            self.score,
            high_score
        );
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Every entity in draw order: coins, skeletons, player on top
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        self.coins
            .coins()
            .iter()
            .map(EntityRef::Coin)
            .chain(self.enemies.iter().map(EntityRef::Enemy))
            .chain(std::iter::once(EntityRef::Player(&self.player)))
    }
}
