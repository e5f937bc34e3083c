use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BankError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Difficulty {
    Easy,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Intermediate, Difficulty::Expert];

    /// Nombre estable usado en las claves de persistencia
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "intermediate" | "moderate" | "medium" => Ok(Difficulty::Intermediate),
            "expert" | "hard" => Ok(Difficulty::Expert),
            other => Err(format!("dificultad desconocida: {other}")),
        }
    }
}

/// Palabra a adivinar con su pista. Siempre en mayúsculas.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

impl WordEntry {
    /// Normaliza a mayúsculas y rechaza palabras vacías o con caracteres no alfabéticos.
    pub fn new(word: &str, hint: &str) -> Result<Self, BankError> {
        let word = word.trim().to_uppercase();
        if word.is_empty() {
            return Err(BankError::InvalidWord {
                word,
                reason: "palabra vacía",
            });
        }
        if !word.chars().all(char::is_alphabetic) {
            return Err(BankError::InvalidWord {
                word,
                reason: "solo se admiten letras",
            });
        }
        Ok(Self {
            word,
            hint: hint.trim().to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}
