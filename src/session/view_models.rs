use super::*;
use crate::view_models::{CategoryInfo, CategoryStatus, RoundView};

impl<'s, S: GameStore> GameSession<'s, S> {
    pub fn view(&self) -> RoundView {
        RoundView {
            level_number: self.state.level_index() + 1,
            total_levels: self.engine.word_count(),
            hint: self.engine.hint_text(&self.state).to_string(),
            score: self.state.score(),
            slots: self.state.slots(),
            wrong: self.state.is_wrong(),
            completed: self.state.is_completed(),
            can_hint: self.engine.can_afford_hint(&self.state),
        }
    }
}

/// Panel de categorías de una dificultad con el progreso guardado de cada una.
pub fn category_infos(
    words: &impl WordSource,
    store: &impl ProgressStore,
    user: &str,
    difficulty: Difficulty,
) -> Vec<CategoryInfo> {
    words
        .categories(difficulty)
        .into_iter()
        .map(|name| {
            let total = words.fetch_words(difficulty, &name).len();
            let current = or_default_logged(store.get_level(user, difficulty, &name), "el nivel");
            let status = if total == 0 {
                CategoryStatus::NoContent
            } else if current >= total {
                CategoryStatus::Completed
            } else {
                CategoryStatus::InProgress
            };
            CategoryInfo {
                current: current.min(total),
                total,
                status,
                name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Slot;
    use crate::session::test_support::bank;
    use crate::settings::SettingsSnapshot;
    use crate::store::MemoryStore;

    #[test]
    fn view_reflects_round_state() {
        let mut store = MemoryStore::new();
        let mut session = GameSession::enter(
            &mut store,
            &bank(),
            "ana",
            Difficulty::Easy,
            "Animals",
            ScoringPolicy::default(),
        )
        .expect("round starts");
        session.guess('C', &SettingsSnapshot::default());

        let view = session.view();
        assert_eq!(view.level_number, 1);
        assert_eq!(view.total_levels, 2);
        assert_eq!(view.hint, "A small furry pet");
        assert_eq!(view.slots, vec![Slot::Typed('C'), Slot::Empty, Slot::Empty]);
        assert!(!view.can_hint);
        assert_eq!(view.board(), "C _ _");
    }

    #[test]
    fn dashboard_reports_each_category() {
        let mut store = MemoryStore::new();
        store
            .set_level("ana", Difficulty::Easy, "Animals", 2)
            .expect("memory write");

        let infos = category_infos(&bank(), &store, "ana", Difficulty::Easy);
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].name, "Animals");
        assert_eq!(infos[0].status, CategoryStatus::Completed);
        assert_eq!(infos[1].status, CategoryStatus::NoContent);

        let fresh = category_infos(&bank(), &store, "luis", Difficulty::Easy);
        assert_eq!(fresh[0].status, CategoryStatus::InProgress);
        assert_eq!(fresh[0].current, 0);
        assert!(category_infos(&bank(), &store, "ana", Difficulty::Expert).is_empty());
    }
}
