use super::*;
use crate::engine::Transition;
use crate::settings::SettingsSnapshot;

impl<'s, S: GameStore> GameSession<'s, S> {
    pub fn guess(&mut self, letter: char, settings: &SettingsSnapshot) -> Turn {
        let transition = self.engine.apply_guess(&self.state, letter);
        let event = self.commit(transition);
        Turn {
            event,
            feedback: settings.feedback_for(&event),
        }
    }

    /// Pista: si se rechaza, el estado no cambia y el shell muestra el aviso.
    pub fn hint(&mut self) -> Result<RoundEvent, RoundError> {
        let transition = self.engine.apply_hint(&self.state)?;
        Ok(self.commit(transition))
    }

    pub fn erase(&mut self) -> RoundEvent {
        let transition = self.engine.apply_erase(&self.state);
        self.commit(transition)
    }

    pub fn clear_feedback(&mut self) -> RoundEvent {
        let transition = self.engine.clear_wrong_flag(&self.state);
        self.commit(transition)
    }

    /// Vuelve al primer nivel de la categoría conservando la puntuación.
    pub fn restart(&mut self) -> Result<(), RoundError> {
        self.state = self.engine.start_round(0, self.state.score())?;
        self.persist_level();
        log::info!("{} reinicia {}/{}", self.user, self.difficulty, self.category);
        Ok(())
    }

    // Aplica la transición y guarda nivel/puntuación solo si cambiaron
    pub(crate) fn commit(&mut self, transition: Transition) -> RoundEvent {
        let advanced = transition.advanced_level();
        let Transition { state, event } = transition;
        let score_changed = state.score() != self.state.score();

        log::debug!("{}/{}: {:?}", self.difficulty, self.category, event);
        self.state = state;

        if advanced {
            self.persist_level();
        }
        if score_changed {
            self.persist_score();
        }
        event
    }

    fn persist_level(&mut self) {
        let level = self.state.progress_level();
        if let Err(e) = self
            .store
            .set_level(&self.user, self.difficulty, &self.category, level)
        {
            log::warn!(
                "No se pudo guardar el nivel {} de {}/{}: {e}",
                level,
                self.difficulty,
                self.category
            );
        }
    }

    fn persist_score(&mut self) {
        let score = self.state.score();
        if let Err(e) = self.store.set_score(&self.user, score) {
            log::warn!("No se pudo guardar la puntuación de {}: {e}", self.user);
        }
        if score > self.best_score {
            self.best_score = score;
            if let Err(e) = self.store.set_best_score(&self.user, score) {
                log::warn!("No se pudo guardar la mejor puntuación de {}: {e}", self.user);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::{BrokenStore, bank};
    use crate::store::MemoryStore;

    fn enter(store: &mut MemoryStore) -> GameSession<'_, MemoryStore> {
        GameSession::enter(
            store,
            &bank(),
            "ana",
            Difficulty::Easy,
            "Animals",
            ScoringPolicy::default(),
        )
        .expect("round starts")
    }

    fn type_word<S: GameStore>(session: &mut GameSession<'_, S>, word: &str) -> Turn {
        let settings = SettingsSnapshot::default();
        let mut last = None;
        for c in word.chars() {
            last = Some(session.guess(c, &settings));
        }
        last.expect("word is not empty")
    }

    #[test]
    fn solving_a_level_persists_level_and_score() {
        let mut store = MemoryStore::new();
        {
            let mut session = enter(&mut store);
            let turn = type_word(&mut session, "CAT");
            assert!(turn.feedback.success_cue);
            assert_eq!(session.state().level_index(), 1);
        }
        assert_eq!(
            store.get_level("ana", Difficulty::Easy, "Animals").ok(),
            Some(1)
        );
        assert_eq!(store.get_score("ana").ok(), Some(10));
        assert_eq!(store.best_score("ana").ok(), Some(10));
    }

    #[test]
    fn completing_category_stores_level_past_the_end() {
        let mut store = MemoryStore::new();
        {
            let mut session = enter(&mut store);
            type_word(&mut session, "CAT");
            let turn = type_word(&mut session, "DOG");
            assert_eq!(turn.event, RoundEvent::CategoryCompleted { rewarded: true });
        }
        assert_eq!(
            store.get_level("ana", Difficulty::Easy, "Animals").ok(),
            Some(2)
        );
        assert_eq!(store.get_score("ana").ok(), Some(20));

        // al volver a entrar, la categoría figura como terminada
        let again = GameSession::enter(
            &mut store,
            &bank(),
            "ana",
            Difficulty::Easy,
            "Animals",
            ScoringPolicy::default(),
        );
        assert!(matches!(again, Err(RoundError::OutOfRangeLevel { .. })));
    }

    #[test]
    fn wrong_guess_vibrates_and_persists_nothing() {
        let mut store = MemoryStore::new();
        {
            let mut session = enter(&mut store);
            let turn = type_word(&mut session, "COW");
            assert_eq!(turn.event, RoundEvent::WrongGuess);
            assert!(turn.feedback.vibrate);
            assert!(session.state().is_wrong());
            assert_eq!(session.clear_feedback(), RoundEvent::FeedbackCleared);
            assert!(!session.state().is_wrong());
        }
        assert!(store.document().progress.is_empty());
        assert!(store.document().scores.is_empty());
    }

    #[test]
    fn hint_persists_lower_score_without_touching_best() {
        let mut store = MemoryStore::new();
        store.set_score("ana", 30).expect("memory write");
        store.set_best_score("ana", 30).expect("memory write");
        {
            let mut session = enter(&mut store);
            let event = session.hint().expect("hint allowed");
            assert!(matches!(event, RoundEvent::LetterRevealed { .. }));
        }
        assert_eq!(store.get_score("ana").ok(), Some(20));
        assert_eq!(store.best_score("ana").ok(), Some(30));
    }

    #[test]
    fn refused_hint_leaves_state_untouched() {
        let mut store = MemoryStore::new();
        let mut session = enter(&mut store);
        let before = session.state().clone();
        assert_eq!(
            session.hint(),
            Err(RoundError::InsufficientScore { score: 0, cost: 10 })
        );
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn erase_and_restart() {
        let mut store = MemoryStore::new();
        {
            let mut session = enter(&mut store);
            type_word(&mut session, "CAT");
            session.guess('D', &SettingsSnapshot::default());
            assert_eq!(session.erase(), RoundEvent::LetterErased);
            assert_eq!(session.erase(), RoundEvent::Ignored);

            session.restart().expect("restart");
            assert_eq!(session.state().level_index(), 0);
            assert_eq!(session.state().score(), 10);
        }
        assert_eq!(
            store.get_level("ana", Difficulty::Easy, "Animals").ok(),
            Some(0)
        );
    }

    #[test]
    fn persistence_failures_do_not_break_the_round() {
        let mut store = BrokenStore;
        let mut session = GameSession::enter(
            &mut store,
            &bank(),
            "ana",
            Difficulty::Easy,
            "Animals",
            ScoringPolicy::default(),
        )
        .expect("round starts");

        type_word(&mut session, "CAT");
        assert_eq!(session.state().level_index(), 1);
        assert_eq!(session.state().score(), 10);
        assert_eq!(session.best_score(), 10);
    }
}
