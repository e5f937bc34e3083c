use super::*;
use rand::Rng;
use rand::seq::SliceRandom;

impl RoundEngine {
    pub fn apply_hint(&self, state: &RoundState) -> Result<Transition, RoundError> {
        self.apply_hint_with(state, &mut rand::thread_rng())
    }

    /// Revela una posición al azar entre las no reveladas y cobra la pista.
    /// Si con ella se revela la palabra entera, el nivel se da por resuelto sin premio.
    /// Las letras escritas y pendientes se descartan: sus huecos cambian al revelar.
    pub fn apply_hint_with<R: Rng + ?Sized>(
        &self,
        state: &RoundState,
        rng: &mut R,
    ) -> Result<Transition, RoundError> {
        let cost = self.policy.hint_cost;
        if state.score < cost {
            return Err(RoundError::InsufficientScore {
                score: state.score,
                cost,
            });
        }

        let open = state.unrevealed_positions();
        let Some(&position) = open.choose(rng) else {
            return Err(RoundError::NothingToReveal);
        };

        let mut next = state.clone();
        next.revealed.insert(position);
        next.score = next.score.saturating_sub(cost).max(self.policy.min_score);
        next.input_buffer.clear();
        next.wrong_flag = false;

        if next.unrevealed_count() == 0 {
            return Ok(self.finish_level(next, false));
        }

        let letter = next.target[position];
        Ok(Transition::new(
            next,
            RoundEvent::LetterRevealed { position, letter },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_engine;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn hint_requires_enough_score() {
        let engine = test_engine(&["CAT"]);
        let state = engine.start_round(0, 9).expect("level exists");
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            engine.apply_hint_with(&state, &mut rng),
            Err(RoundError::InsufficientScore { score: 9, cost: 10 })
        );
    }

    #[test]
    fn hint_reveals_one_letter_and_charges() {
        let engine = test_engine(&["CAT", "DOG"]);
        let state = engine.start_round(0, 25).expect("level exists");
        let mut rng = StdRng::seed_from_u64(2);

        let t = engine.apply_hint_with(&state, &mut rng).expect("hint allowed");
        let RoundEvent::LetterRevealed { position, letter } = t.event else {
            panic!("expected a revealed letter, got {:?}", t.event);
        };
        assert_eq!(t.state.revealed_positions().len(), 1);
        assert!(t.state.revealed_positions().contains(&position));
        assert_eq!(Some(letter), "CAT".chars().nth(position));
        assert_eq!(t.state.score(), 15);
    }

    #[test]
    fn hints_never_repeat_and_finish_within_word_length() {
        let engine = test_engine(&["PLANET", "DOG"]);
        let mut state = engine.start_round(0, 1_000).expect("level exists");
        let mut rng = StdRng::seed_from_u64(3);
        let mut revealed = Vec::new();

        for _ in 0.."PLANET".len() {
            let t = engine.apply_hint_with(&state, &mut rng).expect("hint allowed");
            match t.event {
                RoundEvent::LetterRevealed { position, .. } => {
                    assert!(!revealed.contains(&position), "position {position} revealed twice");
                    revealed.push(position);
                }
                RoundEvent::LevelSolved { solved_level, rewarded } => {
                    assert_eq!(solved_level, 0);
                    assert!(!rewarded);
                    revealed.push(usize::MAX);
                }
                other => panic!("unexpected event {other:?}"),
            }
            state = t.state;
        }

        assert_eq!(revealed.len(), 6);
        assert_eq!(state.level_index(), 1);
        // seis pistas, sin premio por completar con pista
        assert_eq!(state.score(), 1_000 - 60);
    }

    #[test]
    fn hint_completion_on_last_level_completes_without_reward() {
        let engine = test_engine(&["OX"]);
        let state = engine.start_round(0, 20).expect("level exists");
        let mut rng = StdRng::seed_from_u64(4);

        let first = engine.apply_hint_with(&state, &mut rng).expect("hint allowed");
        let second = engine
            .apply_hint_with(&first.state, &mut rng)
            .expect("hint allowed");

        assert_eq!(second.event, RoundEvent::CategoryCompleted { rewarded: false });
        assert!(second.state.is_completed());
        assert_eq!(second.state.score(), 0);

        assert_eq!(
            engine.apply_hint_with(&second.state, &mut rng),
            Err(RoundError::InsufficientScore { score: 0, cost: 10 })
        );
    }

    #[test]
    fn nothing_to_reveal_after_completion() {
        let engine = test_engine(&["OX"]);
        let mut state = engine.start_round(0, 50).expect("level exists");
        for c in "OX".chars() {
            state = engine.apply_guess(&state, c).state;
        }
        assert!(state.is_completed());

        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            engine.apply_hint_with(&state, &mut rng),
            Err(RoundError::NothingToReveal)
        );
    }

    #[test]
    fn score_never_drops_below_zero() {
        let engine = test_engine(&["ELEPHANT"]);
        let mut state = engine.start_round(0, 35).expect("level exists");
        let mut rng = StdRng::seed_from_u64(6);

        while let Ok(t) = engine.apply_hint_with(&state, &mut rng) {
            state = t.state;
        }
        assert_eq!(state.score(), 5);
        assert_eq!(state.revealed_positions().len(), 3);
    }

    #[test]
    fn score_floor_follows_policy() {
        let engine = test_engine(&["ELEPHANT"]).with_policy(ScoringPolicy {
            min_score: 8,
            ..ScoringPolicy::default()
        });
        let state = engine.start_round(0, 12).expect("level exists");
        let mut rng = StdRng::seed_from_u64(8);

        let t = engine.apply_hint_with(&state, &mut rng).expect("hint allowed");
        assert_eq!(t.state.score(), 8);
    }

    #[test]
    fn hint_discards_pending_letters() {
        let engine = test_engine(&["BIRD"]);
        let mut state = engine.start_round(0, 10).expect("level exists");
        state = engine.apply_guess(&state, 'B').state;
        state = engine.apply_guess(&state, 'I').state;
        let mut rng = StdRng::seed_from_u64(9);

        let t = engine.apply_hint_with(&state, &mut rng).expect("hint allowed");
        assert!(t.state.input_buffer().is_empty());
        assert_eq!(t.state.unrevealed_count(), 3);
    }
}
