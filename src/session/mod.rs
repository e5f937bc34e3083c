use crate::data::WordSource;
use crate::engine::{RoundEngine, RoundEvent, RoundState, ScoringPolicy};
use crate::error::{RoundError, StoreError};
use crate::model::Difficulty;
use crate::settings::InputFeedback;
use crate::store::{ProfileStore, ProgressStore, ScoreStore, is_valid_user};

// Submódulos
pub mod actions;
pub mod view_models;

pub use view_models::category_infos;

/// Todo lo que la sesión necesita persistir.
pub trait GameStore: ProgressStore + ScoreStore + ProfileStore {}

impl<T: ProgressStore + ScoreStore + ProfileStore> GameStore for T {}

/// Resultado de una pulsación de letra.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    pub event: RoundEvent,
    pub feedback: InputFeedback,
}

/// Ronda activa de un usuario en una (dificultad, categoría). Se descarta al salir;
/// la siguiente se reconstruye desde el almacén.
pub struct GameSession<'s, S: GameStore> {
    store: &'s mut S,
    user: String,
    difficulty: Difficulty,
    category: String,
    engine: RoundEngine,
    state: RoundState,
    best_score: u32,
}

/// Lectura del almacén con el valor por defecto si falla: se registra y se sigue.
pub(crate) fn or_default_logged<T: Default>(result: Result<T, StoreError>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        log::warn!("No se pudo leer {what}, se usa el valor por defecto: {e}");
        T::default()
    })
}

impl<'s, S: GameStore> GameSession<'s, S> {
    /// Entra en una categoría retomando el nivel guardado.
    ///
    /// `EmptyWordBank` si la categoría no tiene palabras; `OutOfRangeLevel` si el
    /// nivel guardado ya está más allá de la última palabra (categoría terminada);
    /// `InvalidUser` si el usuario no sirve para formar la clave de progreso.
    /// La categoría se guarda con el nombre del banco, sin importar mayúsculas.
    pub fn enter(
        store: &'s mut S,
        words: &impl WordSource,
        user: &str,
        difficulty: Difficulty,
        category: &str,
        policy: ScoringPolicy,
    ) -> Result<Self, RoundError> {
        if !is_valid_user(user) {
            return Err(RoundError::InvalidUser(user.to_string()));
        }
        let category = words
            .canonical_category(difficulty, category)
            .unwrap_or_else(|| category.trim().to_string());
        let engine =
            RoundEngine::new(words.fetch_words(difficulty, &category)).with_policy(policy);

        let level = or_default_logged(store.get_level(user, difficulty, &category), "el nivel");
        let score = or_default_logged(store.get_score(user), "la puntuación");
        // la mejor nunca por debajo de la actual, aunque falte en el almacén
        let best_score =
            or_default_logged(store.best_score(user), "la mejor puntuación").max(score);

        let state = engine.start_round(level, score)?;
        log::debug!(
            "{user} entra en {difficulty}/{category} en el nivel {} con {score} puntos",
            level + 1
        );

        Ok(Self {
            store,
            user: user.to_string(),
            difficulty,
            category,
            engine,
            state,
            best_score,
        })
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}

/// Vuelve una categoría al primer nivel ("Reiniciar"). La puntuación no cambia.
pub fn reset_category(
    store: &mut impl ProgressStore,
    user: &str,
    difficulty: Difficulty,
    category: &str,
) -> Result<(), StoreError> {
    log::info!("{user} reinicia {difficulty}/{category}");
    store.set_level(user, difficulty, category, 0)
}
