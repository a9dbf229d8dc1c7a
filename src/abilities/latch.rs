//! Abilities domain: the set of opponents caught by one dash.

use std::collections::HashSet;
use std::hash::Hash;

/// Insertion-ordered set of latched opponents. Membership only ever grows.
#[derive(Debug, Clone)]
pub struct LatchSet<B> {
    order: Vec<B>,
    members: HashSet<B>,
}

impl<B> Default for LatchSet<B> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            members: HashSet::new(),
        }
    }
}

impl<B: Copy + Eq + Hash> LatchSet<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an opponent; returns false if it was already latched.
    pub fn insert(&mut self, body: B) -> bool {
        if !self.members.insert(body) {
            return false;
        }
        self.order.push(body);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Opponents in first-contact order.
    pub fn into_vec(self) -> Vec<B> {
        self.order
    }
}
