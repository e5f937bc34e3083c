// src/config.rs

use crate::engine::ScoringPolicy;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "word_guess.yaml";
pub const DEFAULT_STORE_FILE: &str = "word_guess_progress.yaml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub user: String,
    pub policy: ScoringPolicy,
    /// Pausa tras un fallo antes de aceptar más letras (ms)
    pub feedback_delay_ms: u64,
    /// Banco externo; sin él se usa el embebido
    pub word_bank: Option<PathBuf>,
    pub store_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            policy: ScoringPolicy::default(),
            feedback_delay_ms: 300,
            word_bank: None,
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = if content.trim().is_empty() {
            GameConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Lee la configuración; si el fichero no existe, valores por defecto.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Sin {}, se usa la configuración por defecto", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user.trim().is_empty() {
            return Err(ConfigError::Invalid("el usuario no puede estar vacío".into()));
        }
        if self.user.contains('_') {
            // el guion bajo separa los campos de la clave de progreso
            return Err(ConfigError::Invalid(format!(
                "el usuario {:?} no puede contener '_'",
                self.user
            )));
        }
        Ok(())
    }
}
