use super::*;

/// Almacén en memoria. Útil para invitados y para pruebas.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    doc: GameDocument,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(doc: GameDocument) -> Self {
        Self { doc }
    }

    pub fn document(&self) -> &GameDocument {
        &self.doc
    }
}

impl ProgressStore for MemoryStore {
    fn get_level(
        &self,
        user: &str,
        difficulty: Difficulty,
        category: &str,
    ) -> Result<usize, StoreError> {
        Ok(self.doc.level(user, difficulty, category))
    }

    fn set_level(
        &mut self,
        user: &str,
        difficulty: Difficulty,
        category: &str,
        level: usize,
    ) -> Result<(), StoreError> {
        self.doc.set_level(user, difficulty, category, level);
        Ok(())
    }
}

impl ScoreStore for MemoryStore {
    fn get_score(&self, user: &str) -> Result<u32, StoreError> {
        Ok(self.doc.score(user))
    }

    fn set_score(&mut self, user: &str, score: u32) -> Result<(), StoreError> {
        self.doc.scores.insert(user.to_string(), score);
        Ok(())
    }
}

impl ScoreBoard for MemoryStore {
    fn all_scores(&self) -> Result<Vec<(String, u32)>, StoreError> {
        Ok(self.doc.all_scores())
    }
}

impl ProfileStore for MemoryStore {
    fn best_score(&self, user: &str) -> Result<u32, StoreError> {
        Ok(self.doc.best_score(user))
    }

    fn set_best_score(&mut self, user: &str, score: u32) -> Result<(), StoreError> {
        self.doc.best_scores.insert(user.to_string(), score);
        Ok(())
    }

    fn settings(&self) -> Result<SettingsSnapshot, StoreError> {
        Ok(self.doc.settings)
    }

    fn set_settings(&mut self, settings: SettingsSnapshot) -> Result<(), StoreError> {
        self.doc.settings = settings;
        Ok(())
    }
}
