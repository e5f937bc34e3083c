// src/leaderboard.rs

use crate::error::StoreError;
use crate::store::ScoreBoard;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user: String,
    pub score: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Ordena por puntuación descendente; los empates, por nombre.
    pub fn from_scores(scores: Vec<(String, u32)>) -> Self {
        let mut scores = scores;
        scores.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        let entries = scores
            .into_iter()
            .enumerate()
            .map(|(i, (user, score))| LeaderboardEntry {
                rank: i + 1,
                user,
                score,
            })
            .collect();
        Self { entries }
    }

    pub fn load(board: &impl ScoreBoard) -> Result<Self, StoreError> {
        Ok(Self::from_scores(board.all_scores()?))
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn player_count(&self) -> usize {
        self.entries.len()
    }

    pub fn top_score(&self) -> u32 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    pub fn rank_of(&self, user: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.user == user).map(|e| e.rank)
    }
}
