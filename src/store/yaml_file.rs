use super::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Almacén respaldado por un documento YAML en disco. Cada escritura reescribe el fichero.
#[derive(Debug)]
pub struct YamlFileStore {
    path: PathBuf,
    doc: GameDocument,
}

impl YamlFileStore {
    /// Abre el documento; si el fichero no existe empieza vacío.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => GameDocument::default(),
            Ok(content) => serde_yaml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => GameDocument::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &GameDocument {
        &self.doc
    }

    // Escribe en un temporal y renombra para no dejar el documento a medias
    fn flush(&self) -> Result<(), StoreError> {
        let yaml = serde_yaml::to_string(&self.doc)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("yaml.tmp");
        fs::write(&tmp, yaml)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ProgressStore for YamlFileStore {
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
        self.flush()
    }
}

impl ScoreStore for YamlFileStore {
    fn get_score(&self, user: &str) -> Result<u32, StoreError> {
        Ok(self.doc.score(user))
    }

    fn set_score(&mut self, user: &str, score: u32) -> Result<(), StoreError> {
        self.doc.scores.insert(user.to_string(), score);
        self.flush()
    }
}

impl ScoreBoard for YamlFileStore {
    fn all_scores(&self) -> Result<Vec<(String, u32)>, StoreError> {
        Ok(self.doc.all_scores())
    }
}

impl ProfileStore for YamlFileStore {
    fn best_score(&self, user: &str) -> Result<u32, StoreError> {
        Ok(self.doc.best_score(user))
    }

    fn set_best_score(&mut self, user: &str, score: u32) -> Result<(), StoreError> {
        self.doc.best_scores.insert(user.to_string(), score);
        self.flush()
    }

    fn settings(&self) -> Result<SettingsSnapshot, StoreError> {
        Ok(self.doc.settings)
    }

    fn set_settings(&mut self, settings: SettingsSnapshot) -> Result<(), StoreError> {
        self.doc.settings = settings;
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("progress.yaml");
        let store = YamlFileStore::open(&path).expect("open");
        assert_eq!(store.document(), &GameDocument::default());
        assert!(!path.exists());
    }

    #[test]
    fn progress_and_scores_survive_reopen() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("progress.yaml");
        {
            let mut store = YamlFileStore::open(&path).expect("open");
            store
                .set_level("ana", Difficulty::Intermediate, "Nature", 4)
                .expect("write level");
            store.set_score("ana", 70).expect("write score");
            store.set_best_score("ana", 90).expect("write best");
            store
                .set_settings(SettingsSnapshot {
                    music_enabled: false,
                    vibration_enabled: true,
                })
                .expect("write settings");
        }

        let store = YamlFileStore::open(&path).expect("reopen");
        assert_eq!(
            store.get_level("ana", Difficulty::Intermediate, "Nature").ok(),
            Some(4)
        );
        assert_eq!(store.get_score("ana").ok(), Some(70));
        assert_eq!(store.best_score("ana").ok(), Some(90));
        assert_eq!(store.settings().ok().map(|s| s.music_enabled), Some(false));
    }

    #[test]
    fn corrupt_document_is_reported() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("progress.yaml");
        fs::write(&path, "scores: [not, a, map").expect("write corrupt");

        let result = YamlFileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Yaml(_))));
    }
}
