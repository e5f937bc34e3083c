use super::*;

/// Contenido de una casilla de la palabra, tal como la pinta el shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Revealed(char),
    Typed(char),
    Empty,
}

impl RoundState {
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn target_word(&self) -> String {
        self.target.iter().collect()
    }

    pub fn revealed_positions(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    pub fn input_buffer(&self) -> &[char] {
        &self.input_buffer
    }

    pub fn is_wrong(&self) -> bool {
        self.wrong_flag
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Nivel a guardar en el ProgressStore: al completar, uno más allá del último.
    pub fn progress_level(&self) -> usize {
        if self.completed {
            self.level_index + 1
        } else {
            self.level_index
        }
    }

    pub fn unrevealed_positions(&self) -> Vec<usize> {
        (0..self.target.len())
            .filter(|i| !self.revealed.contains(i))
            .collect()
    }

    pub fn unrevealed_count(&self) -> usize {
        self.target.len() - self.revealed.len()
    }

    /// Palabra candidata: letras reveladas en su sitio y el buffer rellenando
    /// el resto en orden. `None` mientras el buffer no esté lleno.
    pub fn candidate_word(&self) -> Option<Vec<char>> {
        if self.input_buffer.len() != self.unrevealed_count() {
            return None;
        }
        let mut typed = self.input_buffer.iter();
        (0..self.target.len())
            .map(|i| {
                if self.revealed.contains(&i) {
                    Some(self.target[i])
                } else {
                    typed.next().copied()
                }
            })
            .collect()
    }

    pub fn slots(&self) -> Vec<Slot> {
        let mut typed = self.input_buffer.iter();
        (0..self.target.len())
            .map(|i| {
                if self.revealed.contains(&i) {
                    Slot::Revealed(self.target[i])
                } else {
                    typed.next().map(|&c| Slot::Typed(c)).unwrap_or(Slot::Empty)
                }
            })
            .collect()
    }

    pub(crate) fn reveal_all(&mut self) {
        self.revealed = (0..self.target.len()).collect();
    }

    // Letra correcta para el siguiente hueco a rellenar
    #[cfg(test)]
    pub(crate) fn next_expected_letter(&self) -> Option<char> {
        self.unrevealed_positions()
            .get(self.input_buffer.len())
            .map(|&i| self.target[i])
    }
}

impl RoundEngine {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    pub fn entry(&self, state: &RoundState) -> Option<&WordEntry> {
        self.words.get(state.level_index)
    }

    pub fn hint_text(&self, state: &RoundState) -> &str {
        self.entry(state).map(|e| e.hint.as_str()).unwrap_or("")
    }

    pub fn can_afford_hint(&self, state: &RoundState) -> bool {
        state.score >= self.policy.hint_cost
    }
}
