// src/view_models.rs

use crate::engine::Slot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryStatus {
    NoContent,
    InProgress,
    Completed,
}

#[derive(Clone, Debug)]
pub struct CategoryInfo {
    pub name: String,
    pub current: usize, // nivel guardado, 0-based
    pub total: usize,   // palabras en la categoría
    pub status: CategoryStatus,
}

#[derive(Clone, Debug)]
pub struct RoundView {
    pub level_number: usize, // número "humano" (1,2,3…)
    pub total_levels: usize,
    pub hint: String,
    pub score: u32,
    pub slots: Vec<Slot>,
    pub wrong: bool,
    pub completed: bool,
    pub can_hint: bool,
}

impl CategoryInfo {
    pub fn label(&self) -> String {
        match self.status {
            CategoryStatus::NoContent => format!("{} 📭 (sin palabras)", self.name),
            CategoryStatus::Completed => format!("{} ✅ {}/{}", self.name, self.total, self.total),
            CategoryStatus::InProgress => {
                format!("{} 🔓 {}/{}", self.name, self.current, self.total)
            }
        }
    }
}

impl RoundView {
    /// Casillas como texto: reveladas y escritas con su letra, vacías con `_`.
    pub fn board(&self) -> String {
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Revealed(c) | Slot::Typed(c) => c.to_string(),
                Slot::Empty => "_".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn header(&self) -> String {
        format!(
            "Nivel {}/{} · Puntos: {}",
            self.level_number, self.total_levels, self.score
        )
    }
}
