//! Per-frame simulation tick
//!
//! Core game loop that advances the session by one host frame.

use super::ai;
use super::geometry::contain;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::consts::*;
use crate::input::KeyEdge;
use crate::persistence::KeyValueStore;

/// Input commands for a single tick that are not directional keys
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start button pressed on the menu
    pub start: bool,
}

/// Advance the session by one frame.
///
/// `dt` is the host's elapsed time in frame units (1.0 at a steady 60 Hz).
/// The store is only touched when the run ends.
pub fn tick<S: KeyValueStore + ?Sized>(
    session: &mut GameSession,
    input: &TickInput,
    dt: f32,
    store: &mut S,
) {
    match session.phase {
        GamePhase::Menu => {
            if input.start {
                session.start();
            }
            return;
        }
        GamePhase::End => return,
        GamePhase::Playing => {}
    }

    session.time_ticks += 1;

    apply_controls(session);

    // Player walks, then is kept inside the walls
    session.player.pos += session.player.vel;
    contain(
        &mut session.player,
        ARENA_MIN_X,
        ARENA_MAX_X,
        ARENA_BOTTOM,
        ARENA_TOP,
    );

    if session
        .cooldown_clock
        .advance(dt, session.tuning.cooldown_interval)
    {
        ai::decay_cooldowns(&mut session.enemies);
    }

    if step_enemies(session) {
        // Died this pass: end now, nothing else moves
        session.end_game(store);
        return;
    }

    collect_coins(session);

    if !session.controls.any_held() {
        session.player.animating = false;
    }
}

/// Apply queued key edges to the player
fn apply_controls(session: &mut GameSession) {
    let speed = session.tuning.player_speed;
    for (action, edge) in session.controls.drain() {
        match edge {
            KeyEdge::Pressed => session.player.press(action, speed),
            KeyEdge::Released => {
                let opposite_held = session.controls.is_held(action.opposite());
                session.player.release(action, opposite_held);
            }
        }
    }
}

/// Walk, bounce and attack with each skeleton in one pass.
/// Returns true as soon as a hit empties the player's health.
fn step_enemies(session: &mut GameSession) -> bool {
    let speed = session.tuning.enemy_speed;
    let cooldown_ticks = session.tuning.attack_cooldown_ticks;

    for enemy in session.enemies.iter_mut() {
        ai::walk(enemy, &mut session.rng, speed);

        if let Some(attack) = ai::try_attack(enemy, &mut session.player, cooldown_ticks) {
            log::debug!(
                "Skeleton {} hit for {} ({} HP left)",
                attack.enemy_id,
                attack.damage,
                attack.health
            );
            session.events.push(GameEvent::PlayerHit {
                enemy_id: attack.enemy_id,
                damage: attack.damage,
                health: attack.health,
            });
            if attack.is_fatal() {
                return true;
            }
        }
    }
    false
}

fn collect_coins(session: &mut GameSession) {
    let report = session
        .coins
        .collect(&session.player, &mut session.rng, &session.tuning);

    for _ in 0..report.collected {
        session.score += 1;
        session.emit(GameEvent::CoinCollected {
            score: session.score,
        });
    }
    if let Some(count) = report.respawned {
        session.emit(GameEvent::CoinsRespawned { count });
    }
}
