// src/error.rs

use std::fmt;

/// Señales de precondición del motor de rondas. Nunca son fatales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    OutOfRangeLevel { level: usize, len: usize },
    InsufficientScore { score: u32, cost: u32 },
    NothingToReveal,
    EmptyWordBank,
    /// Usuario vacío o con '_', que rompería la clave de progreso.
    InvalidUser(String),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::OutOfRangeLevel { level, len } => {
                write!(f, "nivel {level} fuera de rango (hay {len} palabras)")
            }
            RoundError::InsufficientScore { score, cost } => {
                write!(f, "puntuación insuficiente: tienes {score}, la pista cuesta {cost}")
            }
            RoundError::NothingToReveal => f.write_str("no quedan letras por revelar"),
            RoundError::EmptyWordBank => f.write_str("esta categoría todavía no tiene palabras"),
            RoundError::InvalidUser(user) => {
                write!(f, "usuario {user:?} inválido: no puede estar vacío ni contener '_'")
            }
        }
    }
}

impl std::error::Error for RoundError {}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "error de E/S en el almacén: {e}"),
            StoreError::Yaml(e) => write!(f, "documento de progreso corrupto: {e}"),
            StoreError::Unavailable(msg) => write!(f, "almacén no disponible: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Yaml(e) => Some(e),
            StoreError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_yaml::Error> for StoreError {
    fn from(e: serde_yaml::Error) -> Self {
        StoreError::Yaml(e)
    }
}

#[derive(Debug)]
pub enum BankError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    InvalidWord { word: String, reason: &'static str },
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Io(e) => write!(f, "no se pudo leer el banco de palabras: {e}"),
            BankError::Parse(e) => write!(f, "banco de palabras YAML inválido: {e}"),
            BankError::InvalidWord { word, reason } => {
                write!(f, "palabra inválida {word:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BankError::Io(e) => Some(e),
            BankError::Parse(e) => Some(e),
            BankError::InvalidWord { .. } => None,
        }
    }
}

impl From<std::io::Error> for BankError {
    fn from(e: std::io::Error) -> Self {
        BankError::Io(e)
    }
}

impl From<serde_yaml::Error> for BankError {
    fn from(e: serde_yaml::Error) -> Self {
        BankError::Parse(e)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "no se pudo leer la configuración: {e}"),
            ConfigError::Parse(e) => write!(f, "configuración YAML inválida: {e}"),
            ConfigError::Invalid(msg) => write!(f, "configuración inválida: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Mensaje corto para el usuario, al estilo de los avisos de la app.
pub fn format_round_message(err: &RoundError) -> String {
    match err {
        RoundError::InsufficientScore { cost, .. } => {
            format!("⚠ Necesitas al menos {cost} puntos para pedir una pista.")
        }
        RoundError::NothingToReveal => "⚠ Ya no quedan letras por revelar.".into(),
        RoundError::EmptyWordBank => "📭 Aún no hay palabras en esta categoría.".into(),
        RoundError::OutOfRangeLevel { .. } => "🏁 Ya completaste esta categoría.".into(),
        RoundError::InvalidUser(user) => format!("⚠ El usuario {user:?} no es válido."),
    }
}
