use super::*;

impl RoundEngine {
    /// Palabra resuelta (por acierto o por pistas): avanza de nivel o completa la categoría.
    /// `rewarded` solo informa; la recompensa ya se aplicó (o no) antes de llegar aquí.
    pub(crate) fn finish_level(&self, mut state: RoundState, rewarded: bool) -> Transition {
        let solved_level = state.level_index;
        state.input_buffer.clear();
        state.wrong_flag = false;

        if self.is_last_level(solved_level) {
            state.completed = true;
            log::info!(
                "Categoría completada en el nivel {} con {} puntos",
                solved_level + 1,
                state.score
            );
            return Transition::new(state, RoundEvent::CategoryCompleted { rewarded });
        }

        let next_level = solved_level + 1;
        state.level_index = next_level;
        state.target = self.target_for(next_level);
        state.revealed.clear();
        log::debug!("Nivel {} resuelto, pasa al {}", solved_level + 1, next_level + 1);

        Transition::new(
            state,
            RoundEvent::LevelSolved {
                solved_level,
                rewarded,
            },
        )
    }

    pub fn is_last_level(&self, level_index: usize) -> bool {
        level_index + 1 >= self.words.len()
    }

    /// ¿Un nivel guardado indica categoría terminada?
    pub fn is_category_finished(&self, stored_level: usize) -> bool {
        !self.words.is_empty() && stored_level >= self.words.len()
    }
}
