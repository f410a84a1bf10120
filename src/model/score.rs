use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerScores {
    pub player_name: String,
    pub scores: Vec<i32>,
}

/// Strokes per hole for each player, kept in the order players were added.
///
/// Names are unique. Adding a name that is already present replaces its
/// scores but keeps its original position.
#[derive(Clone, Debug, Default)]
pub struct ScoreTable {
    players: Vec<PlayerScores>,
    index: HashMap<String, usize, RandomState>,
}

impl ScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a player's scores. An empty score list is ignored and
    /// leaves the table unchanged; returns whether the table was updated.
    pub fn insert(&mut self, player_name: impl Into<String>, scores: Vec<i32>) -> bool {
        if scores.is_empty() {
            return false;
        }
        let player_name = player_name.into();
        if let Some(&idx) = self.index.get(&player_name) {
            self.players[idx].scores = scores;
            return true;
        }
        self.index.insert(player_name.clone(), self.players.len());
        self.players.push(PlayerScores {
            player_name,
            scores,
        });
        true
    }

    #[must_use]
    pub fn get(&self, player_name: &str) -> Option<&[i32]> {
        self.index
            .get(player_name)
            .map(|&idx| self.players[idx].scores.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerScores> {
        self.players.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.player_name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Number of holes every player has a score for.
    #[must_use]
    pub fn shared_holes(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.scores.len())
            .min()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn max_holes(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.scores.len())
            .max()
            .unwrap_or(0)
    }
}

impl PartialEq for ScoreTable {
    fn eq(&self, other: &Self) -> bool {
        self.players == other.players
    }
}

impl Eq for ScoreTable {}

impl<S: Into<String>> FromIterator<(S, Vec<i32>)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec<i32>)>>(iter: I) -> Self {
        let mut table = ScoreTable::new();
        for (player_name, scores) in iter {
            table.insert(player_name, scores);
        }
        table
    }
}

impl<'a> IntoIterator for &'a ScoreTable {
    type Item = &'a PlayerScores;
    type IntoIter = std::slice::Iter<'a, PlayerScores>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
