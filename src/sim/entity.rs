//! Player, enemy and coin records
//!
//! Plain data. Behaviour lives in `ai`, `coins` and `tick`.

use glam::Vec2;

use super::geometry::Body;
use crate::consts::*;
use crate::input::Action;

/// Movement-direction category, drives which walk cycle is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl Facing {
    /// Pick a facing from a velocity, favouring the faster axis.
    ///
    /// A zero velocity matches no direction and returns `None`.
    pub fn from_velocity(vel: Vec2) -> Option<Self> {
        if vel.x.abs() > vel.y.abs() {
            if vel.x < 0.0 {
                Some(Facing::Left)
            } else {
                Some(Facing::Right)
            }
        } else if vel.y < 0.0 {
            Some(Facing::Up)
        } else if vel.y > 0.0 {
            Some(Facing::Down)
        } else {
            None
        }
    }
}

impl From<Action> for Facing {
    fn from(action: Action) -> Self {
        match action {
            Action::MoveLeft => Facing::Left,
            Action::MoveRight => Facing::Right,
            Action::MoveUp => Facing::Up,
            Action::MoveDown => Facing::Down,
        }
    }
}

/// Entity tag for draw ordering and debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy,
    Coin,
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// 0..=100, never negative
    pub health: u32,
    pub facing: Facing,
    /// Walk cycle playing
    pub animating: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: CHARACTER_SIZE,
            health: PLAYER_MAX_HEALTH,
            facing: Facing::Left,
            animating: false,
        }
    }

    /// Key went down: face that way, start walking at `speed`
    pub fn press(&mut self, action: Action, speed: f32) {
        self.facing = action.into();
        self.animating = true;
        match action {
            Action::MoveLeft => self.vel.x = -speed,
            Action::MoveRight => self.vel.x = speed,
            Action::MoveUp => self.vel.y = -speed,
            Action::MoveDown => self.vel.y = speed,
        }
    }

    /// Key came up: stop on that axis unless the opposite key is still held
    pub fn release(&mut self, action: Action, opposite_held: bool) {
        if opposite_held {
            return;
        }
        match action {
            Action::MoveLeft | Action::MoveRight => self.vel.x = 0.0,
            Action::MoveUp | Action::MoveDown => self.vel.y = 0.0,
        }
    }

    /// Subtract damage, flooring at zero. Returns true when health ran out.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        self.health = self.health.saturating_sub(damage);
        self.is_dead()
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

impl Body for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// A wandering skeleton
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Fixed at spawn, 1..=10
    pub attack_damage: u32,
    /// Ticks until the next attack is allowed
    pub attack_cooldown: u32,
    pub facing: Facing,
    pub animating: bool,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, attack_damage: u32) -> Self {
        Self {
            id,
            pos,
            vel,
            size: CHARACTER_SIZE,
            attack_damage,
            attack_cooldown: 0,
            facing: Facing::Left,
            animating: true,
        }
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown == 0
    }
}

impl Body for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// A spinning coin
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub animating: bool,
}

impl Coin {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: COIN_SIZE,
            animating: true,
        }
    }
}

impl Body for Coin {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// Borrowed view of any entity in the session
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    Coin(&'a Coin),
}

impl EntityRef<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Player(_) => EntityKind::Player,
            EntityRef::Enemy(_) => EntityKind::Enemy,
            EntityRef::Coin(_) => EntityKind::Coin,
        }
    }

    pub fn pos(&self) -> Vec2 {
        match self {
            EntityRef::Player(p) => p.pos,
            EntityRef::Enemy(e) => e.pos,
            EntityRef::Coin(c) => c.pos,
        }
    }

    pub fn size(&self) -> Vec2 {
        match self {
            EntityRef::Player(p) => p.size,
            EntityRef::Enemy(e) => e.size,
            EntityRef::Coin(c) => c.size,
        }
    }

    /// Facing, for walkers only
    pub fn facing(&self) -> Option<Facing> {
        match self {
            EntityRef::Player(p) => Some(p.facing),
            EntityRef::Enemy(e) => Some(e.facing),
            EntityRef::Coin(_) => None,
        }
    }
}
