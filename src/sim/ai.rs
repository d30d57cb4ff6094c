//! Skeleton behaviour: wander, bounce off walls, cool down, bite
//!
//! Skeletons walk in a straight line until a wall pushes them back, then pick
//! a fresh random heading. A single shared clock knocks one tick off every
//! skeleton's attack cooldown each time it fills up.

use glam::Vec2;
use rand::Rng;

use super::coins::scatter_position;
use super::entity::{Enemy, Facing, Player};
use super::geometry::{CollisionSide, contain, overlaps};
use crate::consts::*;
use crate::tuning::Tuning;

/// Shared accumulator for cooldown decay
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CooldownClock {
    elapsed: f32,
}

impl CooldownClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt`; returns true (and resets) once `interval` is reached
    pub fn advance(&mut self, dt: f32, interval: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// A landed hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    pub enemy_id: u32,
    pub damage: u32,
    /// Player health after the hit
    pub health: u32,
    fatal: bool,
}

impl Attack {
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }
}

/// Spawn the starting pack of skeletons with ids from `first_id`
pub fn spawn_enemies<R: Rng>(rng: &mut R, tuning: &Tuning, first_id: u32) -> Vec<Enemy> {
    let max = Vec2::new(
        FIELD_WIDTH - WALL_MARGIN - CHARACTER_SIZE.x,
        FIELD_HEIGHT - WALL_MARGIN - CHARACTER_SIZE.y,
    );

    (0..tuning.enemy_count)
        .map(|i| {
            let pos = scatter_position(rng, WALL_MARGIN, max);
            let vel = random_heading(rng, tuning.enemy_speed);
            let damage = rng.random_range(tuning.enemy_damage_min..=tuning.enemy_damage_max);
            Enemy::new(first_id + i, pos, vel, damage)
        })
        .collect()
}

fn random_heading<R: Rng>(rng: &mut R, speed: f32) -> Vec2 {
    Vec2::new(
        rng.random_range(-speed..=speed),
        rng.random_range(-speed..=speed),
    )
}

/// Move one skeleton a tick and bounce it off the arena walls
pub fn walk<R: Rng>(enemy: &mut Enemy, rng: &mut R, speed: f32) -> CollisionSide {
    enemy.pos += enemy.vel;

    let side = contain(enemy, ARENA_MIN_X, ARENA_MAX_X, ARENA_BOTTOM, ARENA_TOP);
    if side.is_hit() {
        enemy.vel = random_heading(rng, speed);
        // Standing still keeps the old facing
        if let Some(facing) = Facing::from_velocity(enemy.vel) {
            enemy.facing = facing;
        }
        enemy.animating = true;
    }
    side
}

/// One tick off every cooldown, floored at zero
pub fn decay_cooldowns(enemies: &mut [Enemy]) {
    for enemy in enemies {
        enemy.attack_cooldown = enemy.attack_cooldown.saturating_sub(1);
    }
}

/// Bite the player if off cooldown and touching
pub fn try_attack(enemy: &mut Enemy, player: &mut Player, cooldown_ticks: u32) -> Option<Attack> {
    if !enemy.can_attack() || !overlaps(&*player, &*enemy) {
        return None;
    }

    let fatal = player.take_damage(enemy.attack_damage);
    enemy.attack_cooldown = cooldown_ticks;

    Some(Attack {
        enemy_id: enemy.id,
        damage: enemy.attack_damage,
        health: player.health,
        fatal,
    })
}
