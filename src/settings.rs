// src/settings.rs

use crate::engine::RoundEvent;
use serde::{Deserialize, Serialize};

/// Preferencias de audio y vibración. Se pasan explícitamente a quien las necesite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSnapshot {
    pub music_enabled: bool,
    pub vibration_enabled: bool,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            music_enabled: true,
            vibration_enabled: true,
        }
    }
}

/// Lo que el shell debe reproducir tras una pulsación.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFeedback {
    pub vibrate: bool,
    pub success_cue: bool,
}

impl SettingsSnapshot {
    pub fn feedback_for(&self, event: &RoundEvent) -> InputFeedback {
        match event {
            RoundEvent::WrongGuess => InputFeedback {
                vibrate: self.vibration_enabled,
                success_cue: false,
            },
            RoundEvent::LevelSolved { .. } | RoundEvent::CategoryCompleted { .. } => {
                InputFeedback {
                    vibrate: false,
                    success_cue: self.music_enabled,
                }
            }
            _ => InputFeedback::default(),
        }
    }
}
