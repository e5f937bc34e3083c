use crate::error::RoundError;
use crate::model::WordEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Submódulos
pub mod actions;
pub mod completion;
pub mod hints;
pub mod queries;

pub use queries::Slot;

pub const LEVEL_REWARD: u32 = 10;
pub const HINT_COST: u32 = 10;

/// Reglas de puntuación. Fijas por partida, no dependen de la dificultad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub level_reward: u32,
    pub hint_cost: u32,
    pub min_score: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            level_reward: LEVEL_REWARD,
            hint_cost: HINT_COST,
            min_score: 0,
        }
    }
}

/// Estado de la ronda activa. Solo el motor lo modifica.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    pub(crate) level_index: usize,
    pub(crate) target: Vec<char>,
    pub(crate) revealed: BTreeSet<usize>,
    pub(crate) input_buffer: Vec<char>,
    pub(crate) wrong_flag: bool,
    pub(crate) score: u32,
    pub(crate) completed: bool,
}

/// Qué pasó en una transición; el shell decide con esto si persiste.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundEvent {
    Ignored,
    LetterPlaced,
    LetterErased,
    WrongGuess,
    LetterRevealed { position: usize, letter: char },
    LevelSolved { solved_level: usize, rewarded: bool },
    CategoryCompleted { rewarded: bool },
    FeedbackCleared,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: RoundState,
    pub event: RoundEvent,
}

impl Transition {
    pub(crate) fn new(state: RoundState, event: RoundEvent) -> Self {
        Self { state, event }
    }

    pub(crate) fn ignored(state: &RoundState) -> Self {
        Self::new(state.clone(), RoundEvent::Ignored)
    }

    /// Cambió el nivel guardable (avance o categoría terminada)
    pub fn advanced_level(&self) -> bool {
        matches!(
            self.event,
            RoundEvent::LevelSolved { .. } | RoundEvent::CategoryCompleted { .. }
        )
    }
}

/// Motor de una (dificultad, categoría): lista de palabras + reglas.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    words: Vec<WordEntry>,
    policy: ScoringPolicy,
}

impl RoundEngine {
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self {
            words,
            policy: ScoringPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Arranca la ronda del nivel `level_index` conservando la puntuación acumulada.
    pub fn start_round(&self, level_index: usize, score: u32) -> Result<RoundState, RoundError> {
        if self.words.is_empty() {
            return Err(RoundError::EmptyWordBank);
        }
        if level_index >= self.words.len() {
            return Err(RoundError::OutOfRangeLevel {
                level: level_index,
                len: self.words.len(),
            });
        }

        Ok(RoundState {
            level_index,
            target: self.target_for(level_index),
            revealed: BTreeSet::new(),
            input_buffer: Vec::new(),
            wrong_flag: false,
            score: score.max(self.policy.min_score),
            completed: false,
        })
    }

    pub(crate) fn target_for(&self, level_index: usize) -> Vec<char> {
        self.words
            .get(level_index)
            .map(|w| w.word.to_uppercase().chars().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) fn test_engine(words: &[&str]) -> RoundEngine {
    let entries = words
        .iter()
        .map(|w| WordEntry::new(w, &format!("pista de {w}")).expect("valid test word"))
        .collect();
    RoundEngine::new(entries)
}
