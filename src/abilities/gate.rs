//! Abilities domain: admission control for starting a dash.

use crate::abilities::components::AbilityState;

/// Everything the gate needs to know about the would-be dasher
#[derive(Debug, Clone, Copy)]
pub struct GateCheck {
    pub alive: bool,
    pub stunned: bool,
    /// Current time in seconds
    pub now: f32,
    /// Minimum seconds between two activation starts
    pub cooldown: f32,
}

/// Whether a dash may start now. A closed gate is not an error, the request is dropped.
pub fn dash_gate_open(state: &AbilityState, check: &GateCheck) -> bool {
    if !check.alive || check.stunned {
        return false;
    }

    if state.is_performing_ability || state.is_dashing {
        return false;
    }

    match state.last_activation {
        Some(last) => check.now - last >= check.cooldown,
        None => true,
    }
}
