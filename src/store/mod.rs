use crate::error::StoreError;
use crate::model::Difficulty;
use crate::settings::SettingsSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod memory;
pub mod yaml_file;

pub use memory::MemoryStore;
pub use yaml_file::YamlFileStore;

/// (usuario, dificultad, categoría) -> índice de nivel. Por defecto 0.
pub trait ProgressStore {
    fn get_level(
        &self,
        user: &str,
        difficulty: Difficulty,
        category: &str,
    ) -> Result<usize, StoreError>;
    fn set_level(
        &mut self,
        user: &str,
        difficulty: Difficulty,
        category: &str,
        level: usize,
    ) -> Result<(), StoreError>;
}

/// usuario -> puntuación acumulada. Por defecto 0.
pub trait ScoreStore {
    fn get_score(&self, user: &str) -> Result<u32, StoreError>;
    fn set_score(&mut self, user: &str, score: u32) -> Result<(), StoreError>;
}

/// Lectura de todas las puntuaciones, para la clasificación.
pub trait ScoreBoard {
    fn all_scores(&self) -> Result<Vec<(String, u32)>, StoreError>;
}

/// Mejor puntuación y preferencias del dispositivo.
pub trait ProfileStore {
    fn best_score(&self, user: &str) -> Result<u32, StoreError>;
    fn set_best_score(&mut self, user: &str, score: u32) -> Result<(), StoreError>;
    fn settings(&self) -> Result<SettingsSnapshot, StoreError>;
    fn set_settings(&mut self, settings: SettingsSnapshot) -> Result<(), StoreError>;
}

/// Un usuario válido no es vacío ni contiene '_', el separador de la clave de progreso.
pub fn is_valid_user(user: &str) -> bool {
    !user.trim().is_empty() && !user.contains('_')
}

/// Clave de progreso: `{user}_{difficulty}_{category}_progress`.
pub fn progress_key(user: &str, difficulty: Difficulty, category: &str) -> String {
    format!("{user}_{difficulty}_{category}_progress")
}

/// Documento persistido: pares clave -> entero y las preferencias.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDocument {
    #[serde(default)]
    pub progress: BTreeMap<String, usize>,
    #[serde(default)]
    pub scores: BTreeMap<String, u32>,
    #[serde(default)]
    pub best_scores: BTreeMap<String, u32>,
    #[serde(default)]
    pub settings: SettingsSnapshot,
}

impl GameDocument {
    pub fn level(&self, user: &str, difficulty: Difficulty, category: &str) -> usize {
        self.progress
            .get(&progress_key(user, difficulty, category))
            .copied()
            .unwrap_or(0)
    }

    pub fn set_level(&mut self, user: &str, difficulty: Difficulty, category: &str, level: usize) {
        self.progress
            .insert(progress_key(user, difficulty, category), level);
    }

    pub fn score(&self, user: &str) -> u32 {
        self.scores.get(user).copied().unwrap_or(0)
    }

    pub fn best_score(&self, user: &str) -> u32 {
        self.best_scores.get(user).copied().unwrap_or(0)
    }

    pub fn all_scores(&self) -> Vec<(String, u32)> {
        self.scores
            .iter()
            .map(|(user, score)| (user.clone(), *score))
            .collect()
    }
}
