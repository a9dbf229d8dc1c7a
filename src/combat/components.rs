//! Combat domain: health and status components for fighters.

use bevy::prelude::*;

/// Hit points of a fighter
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Subtract damage, returning how much was actually removed.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }
}

/// Stun status. A stunned fighter cannot start abilities.
///
/// Optional on fighters: stuns aimed at an entity without it are dropped.
#[derive(Component, Debug, Default, Clone)]
pub struct Stun {
    pub timer: f32,
}

impl Stun {
    /// Apply a stun; an existing longer stun is not shortened.
    pub fn apply(&mut self, duration: f32) {
        self.timer = self.timer.max(duration);
    }

    pub fn is_stunned(&self) -> bool {
        self.timer > 0.0
    }

    pub fn tick(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }
}
