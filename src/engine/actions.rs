use super::*;

/// Solo letras; las minúsculas se pasan a mayúsculas.
fn normalize_letter(letter: char) -> Option<char> {
    if !letter.is_alphabetic() {
        return None;
    }
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl RoundEngine {
    /// Coloca una letra en el siguiente hueco sin revelar. Si con ella se llenan
    /// todos los huecos, evalúa la palabra completa.
    pub fn apply_guess(&self, state: &RoundState, letter: char) -> Transition {
        if state.completed {
            return Transition::ignored(state);
        }
        let Some(letter) = normalize_letter(letter) else {
            return Transition::ignored(state);
        };

        let open_slots = state.unrevealed_count();
        if state.input_buffer.len() >= open_slots {
            // Ya hay una palabra completa pendiente de evaluar
            return Transition::ignored(state);
        }

        let mut next = state.clone();
        next.input_buffer.push(letter);

        if next.input_buffer.len() < open_slots {
            return Transition::new(next, RoundEvent::LetterPlaced);
        }

        self.evaluate_full_guess(next)
    }

    fn evaluate_full_guess(&self, mut next: RoundState) -> Transition {
        let matches = next
            .candidate_word()
            .map(|candidate| candidate == next.target)
            .unwrap_or(false);

        if matches {
            next.reveal_all();
            next.score = next.score.saturating_add(self.policy.level_reward);
            return self.finish_level(next, true);
        }

        next.wrong_flag = true;
        next.input_buffer.clear();
        Transition::new(next, RoundEvent::WrongGuess)
    }

    /// Borra la última letra escrita. Nunca toca letras reveladas, nivel ni puntos.
    pub fn apply_erase(&self, state: &RoundState) -> Transition {
        if state.input_buffer.is_empty() {
            return Transition::ignored(state);
        }
        let mut next = state.clone();
        next.input_buffer.pop();
        Transition::new(next, RoundEvent::LetterErased)
    }

    /// Cierra la ventana de error tras la animación del shell.
    pub fn clear_wrong_flag(&self, state: &RoundState) -> Transition {
        if !state.wrong_flag {
            return Transition::ignored(state);
        }
        let mut next = state.clone();
        next.wrong_flag = false;
        Transition::new(next, RoundEvent::FeedbackCleared)
    }
}
