// src/data.rs

use crate::error::BankError;
use crate::model::{Difficulty, WordEntry};
use serde::Deserialize;
use std::path::Path;

/// Fuente de palabras por (dificultad, categoría). Puede devolver listas vacías.
pub trait WordSource {
    fn fetch_words(&self, difficulty: Difficulty, category: &str) -> Vec<WordEntry>;

    /// Categorías conocidas para una dificultad, en orden de carga.
    fn categories(&self, difficulty: Difficulty) -> Vec<String>;

    /// Nombre con el que se guarda el progreso de una categoría, sin importar
    /// mayúsculas. `None` si la categoría no existe.
    fn canonical_category(&self, difficulty: Difficulty, category: &str) -> Option<String> {
        let wanted = category.trim();
        self.categories(difficulty)
            .into_iter()
            .find(|c| c.eq_ignore_ascii_case(wanted))
    }
}

#[derive(Deserialize)]
struct RawCategory {
    difficulty: Difficulty,
    category: String,
    #[serde(default)]
    words: Vec<RawWord>,
}

#[derive(Deserialize)]
struct RawWord {
    word: String,
    #[serde(default)]
    hint: String,
}

#[derive(Debug, Clone)]
pub struct CategoryWords {
    pub difficulty: Difficulty,
    pub name: String,
    pub words: Vec<WordEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct WordBank {
    categories: Vec<CategoryWords>,
}

impl WordBank {
    /// Parsea un banco YAML. Las entradas inválidas se descartan con un aviso;
    /// solo un YAML mal formado es un error.
    pub fn from_yaml_str(content: &str) -> Result<Self, BankError> {
        let raw: Vec<RawCategory> = serde_yaml::from_str(content)?;
        let mut bank = WordBank::default();

        for cat in raw {
            let mut words = Vec::with_capacity(cat.words.len());
            for w in cat.words {
                match WordEntry::new(&w.word, &w.hint) {
                    Ok(entry) => words.push(entry),
                    Err(e) => log::warn!(
                        "Descartada entrada en {}/{}: {e}",
                        cat.difficulty,
                        cat.category
                    ),
                }
            }
            bank.push_category(cat.difficulty, cat.category.trim(), words);
        }
        Ok(bank)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, BankError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    // Si la categoría se repite, sus palabras se agregan al final
    fn push_category(&mut self, difficulty: Difficulty, name: &str, words: Vec<WordEntry>) {
        if let Some(existing) = self.find_mut(difficulty, name) {
            existing.words.extend(words);
            return;
        }
        self.categories.push(CategoryWords {
            difficulty,
            name: name.to_string(),
            words,
        });
    }

    fn find(&self, difficulty: Difficulty, name: &str) -> Option<&CategoryWords> {
        self.categories
            .iter()
            .find(|c| c.difficulty == difficulty && c.name.eq_ignore_ascii_case(name.trim()))
    }

    fn find_mut(&mut self, difficulty: Difficulty, name: &str) -> Option<&mut CategoryWords> {
        self.categories
            .iter_mut()
            .find(|c| c.difficulty == difficulty && c.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn total_words(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }
}

impl WordSource for WordBank {
    fn fetch_words(&self, difficulty: Difficulty, category: &str) -> Vec<WordEntry> {
        self.find(difficulty, category)
            .map(|c| c.words.clone())
            .unwrap_or_default()
    }

    fn categories(&self, difficulty: Difficulty) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| c.difficulty == difficulty)
            .map(|c| c.name.clone())
            .collect()
    }

    // Respeta las mayúsculas del banco
    fn canonical_category(&self, difficulty: Difficulty, category: &str) -> Option<String> {
        self.find(difficulty, category).map(|c| c.name.clone())
    }
}

/// Carga el banco de palabras desde el YAML embebido
pub fn read_word_bank_embedded() -> Result<WordBank, BankError> {
    let file_content = include_str!("data/word_bank.yaml");
    WordBank::from_yaml_str(file_content)
}

/// Banco externo si hay ruta configurada, si no el embebido.
pub fn read_word_bank(path: Option<&Path>) -> Result<WordBank, BankError> {
    match path {
        Some(p) => WordBank::from_yaml_file(p),
        None => read_word_bank_embedded(),
    }
}
