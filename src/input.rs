//! Directional controls
//!
//! Key events arrive whenever the host sees them; the simulation reads them
//! once per tick. `Controls` keeps a held flag per action (level-triggered)
//! and queues press/release edges, which are only recorded on a real
//! transition so key repeat never re-fires a press.

use std::collections::VecDeque;

/// Logical movement action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
    ];

    fn index(self) -> usize {
        match self {
            Action::MoveLeft => 0,
            Action::MoveRight => 1,
            Action::MoveUp => 2,
            Action::MoveDown => 3,
        }
    }

    /// The action on the same axis, pointing the other way
    pub fn opposite(self) -> Action {
        match self {
            Action::MoveLeft => Action::MoveRight,
            Action::MoveRight => Action::MoveLeft,
            Action::MoveUp => Action::MoveDown,
            Action::MoveDown => Action::MoveUp,
        }
    }

    /// Map a DOM `KeyboardEvent.key` value to an action
    pub fn from_key_code(key: &str) -> Option<Action> {
        match key {
            "ArrowLeft" => Some(Action::MoveLeft),
            "ArrowRight" => Some(Action::MoveRight),
            "ArrowUp" => Some(Action::MoveUp),
            "ArrowDown" => Some(Action::MoveDown),
            _ => None,
        }
    }
}

/// A held-state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Default)]
pub struct Controls {
    held: [bool; 4],
    edges: VecDeque<(Action, KeyEdge)>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        let held = &mut self.held[action.index()];
        if !*held {
            *held = true;
            self.edges.push_back((action, KeyEdge::Pressed));
        }
    }

    pub fn release(&mut self, action: Action) {
        let held = &mut self.held[action.index()];
        if *held {
            *held = false;
            self.edges.push_back((action, KeyEdge::Released));
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }

    /// Take all edges recorded since the last drain, oldest first
    pub fn drain(&mut self) -> Vec<(Action, KeyEdge)> {
        self.edges.drain(..).collect()
    }

    /// Release everything still held (focus lost mid-press)
    pub fn release_all(&mut self) {
        for action in Action::ALL {
            self.release(action);
        }
    }
}
