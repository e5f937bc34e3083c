pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod leaderboard;
pub mod model;
pub mod session;
pub mod settings;
pub mod store;
pub mod view_models;

pub use engine::{RoundEngine, RoundEvent, RoundState, ScoringPolicy, Transition};
pub use error::RoundError;
pub use model::{Difficulty, WordEntry};
pub use session::GameSession;
