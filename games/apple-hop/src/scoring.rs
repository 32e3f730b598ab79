//! Fruit pickup scoring.
//!
//! `eat_fruit` turns an overlap into a delta; `ScoreBoard` applies deltas
//! without checking for repeats. Filtering out fruit that was already eaten
//! is the job of `Orchard`.

use std::collections::BTreeMap;

use hopper_engine::{EntityId, OverlapPair};

/// Points for one fruit.
pub const FRUIT_REWARD: u32 = 10;

/// The player touched a collectible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub player: EntityId,
    pub collectible: EntityId,
}

impl Overlap {
    /// Orient an engine pair around the player. `None` if the player is not in it.
    pub fn from_pair(pair: OverlapPair, player: EntityId) -> Option<Self> {
        pair.other(player).map(|collectible| Self { player, collectible })
    }
}

/// Result of eating one fruit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    /// Collectible to remove from the world.
    pub consumed: EntityId,
    pub reward: u32,
}

pub fn eat_fruit(overlap: Overlap) -> ScoreDelta {
    ScoreDelta {
        consumed: overlap.collectible,
        reward: FRUIT_REWARD,
    }
}

/// Running score and its label text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    text: String,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            score: 0,
            text: Self::format(0),
        }
    }

    fn format(score: u32) -> String {
        format!("Score: {score}")
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Add the delta's reward and return the refreshed label.
    pub fn apply(&mut self, delta: ScoreDelta) -> &str {
        self.score = self.score.saturating_add(delta.reward);
        self.text = Self::format(self.score);
        log::debug!("score: {} (+{})", self.score, delta.reward);
        &self.text
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumed flags of every collectible in the scene.
#[derive(Debug, Clone, Default)]
pub struct Orchard {
    consumed: BTreeMap<EntityId, bool>,
}

impl Orchard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an uneaten collectible.
    pub fn plant(&mut self, id: EntityId) {
        self.consumed.entry(id).or_insert(false);
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.consumed.contains_key(&id)
    }

    pub fn is_consumed(&self, id: EntityId) -> bool {
        self.consumed.get(&id).copied().unwrap_or(false)
    }

    /// Flip a planted collectible to consumed.
    /// Returns false for unknown or already consumed ids.
    pub fn consume(&mut self, id: EntityId) -> bool {
        match self.consumed.get_mut(&id) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.consumed.values().filter(|eaten| !**eaten).count()
    }

    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }
}
