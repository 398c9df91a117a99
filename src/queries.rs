//! Query and mutation surface over the stored snapshot.
//!
//! Reads always hand back fresh, owned collections; callers recompute their
//! views from those rather than patching earlier results.

use crate::models::{default_sports, AppData, FoodEntry, Session, SessionView, Sport};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionFilter<'a> {
    pub owner: Option<&'a str>,
    /// Inclusive lower bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub to: Option<NaiveDate>,
    pub sport: Option<&'a str>,
}

impl SessionFilter<'_> {
    fn matches(&self, session: &Session) -> bool {
        self.owner.is_none_or(|owner| session.user_id == owner)
            && self.from.is_none_or(|from| session.date >= from)
            && self.to.is_none_or(|to| session.date <= to)
            && self.sport.is_none_or(|sport| session.sport_id == sport)
    }
}

impl AppData {
    /// Seeds the default sport catalog when none is stored. Returns whether
    /// anything changed.
    pub fn ensure_catalog(&mut self) -> bool {
        if !self.sports.is_empty() {
            return false;
        }
        self.sports = default_sports();
        true
    }

    pub fn sport(&self, id: &str) -> Option<&Sport> {
        self.sports.iter().find(|sport| sport.id == id)
    }

    /// Matching sessions ordered by date, oldest first.
    pub fn query_sessions(&self, filter: &SessionFilter<'_>) -> Vec<Session> {
        let mut sessions: Vec<Session> = self
            .sessions
            .iter()
            .filter(|session| filter.matches(session))
            .cloned()
            .collect();
        sessions.sort_by(|a, b| a.date.cmp(&b.date));
        sessions
    }

    /// The owner's food entries on or after `since`, newest first.
    pub fn query_food(&self, owner: &str, since: Option<NaiveDate>) -> Vec<FoodEntry> {
        let mut entries: Vec<FoodEntry> = self
            .foods
            .iter()
            .filter(|entry| entry.user == owner)
            .filter(|entry| since.is_none_or(|since| entry.date >= since))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    pub fn insert_session(&mut self, session: Session) {
        self.sessions.push(session);
    }

    /// Replaces the owner's session with the same id. `None` if there is none.
    pub fn update_session(&mut self, owner: &str, updated: Session) -> Option<Session> {
        let slot = self
            .sessions
            .iter_mut()
            .find(|session| session.id == updated.id && session.user_id == owner)?;
        *slot = updated;
        Some(slot.clone())
    }

    pub fn remove_session(&mut self, owner: &str, id: &str) -> Option<Session> {
        let index = self
            .sessions
            .iter()
            .position(|session| session.id == id && session.user_id == owner)?;
        Some(self.sessions.remove(index))
    }

    pub fn insert_food(&mut self, entry: FoodEntry) {
        self.foods.push(entry);
    }
}

/// Attaches display fields from the catalog. Unknown sports get blanks.
pub fn view_session(catalog: &[Sport], session: Session) -> SessionView {
    let sport = catalog.iter().find(|sport| sport.id == session.sport_id);
    SessionView {
        emoji: sport.map(|s| s.emoji.clone()).unwrap_or_default(),
        sport_name: sport.map(|s| s.name.clone()).unwrap_or_default(),
        session,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session(id: &str, on: NaiveDate, sport: &str, owner: &str) -> Session {
        Session {
            id: id.to_string(),
            date: on,
            sport_id: sport.to_string(),
            duration: 30,
            notes: None,
            user_id: owner.to_string(),
        }
    }

    fn sample() -> AppData {
        let mut data = AppData::default();
        data.ensure_catalog();
        data.insert_session(session("3", date(2024, 3, 20), "running", "me"));
        data.insert_session(session("1", date(2024, 2, 29), "running", "me"));
        data.insert_session(session("2", date(2024, 3, 1), "gym", "me"));
        data.insert_session(session("4", date(2024, 3, 5), "running", "other"));
        data
    }

    #[test]
    fn catalog_is_seeded_once() {
        let mut data = AppData::default();
        assert!(data.ensure_catalog());
        assert_eq!(data.sports.len(), 6);
        assert!(!data.ensure_catalog());
        assert_eq!(data.sport("tennis").map(|s| s.name.as_str()), Some("tennis"));
    }

    #[test]
    fn range_query_is_inclusive_and_ordered() {
        let data = sample();
        let filter = SessionFilter {
            owner: Some("me"),
            from: Some(date(2024, 3, 1)),
            to: Some(date(2024, 3, 31)),
            sport: None,
        };
        let ids: Vec<String> = data.query_sessions(&filter).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn sport_query_spans_all_dates() {
        let data = sample();
        let filter = SessionFilter {
            owner: Some("me"),
            sport: Some("running"),
            ..SessionFilter::default()
        };
        let ids: Vec<String> = data.query_sessions(&filter).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn mutations_are_scoped_to_owner() {
        let mut data = sample();
        let mut edited = session("4", date(2024, 3, 6), "gym", "me");
        assert!(data.update_session("me", edited.clone()).is_none());
        edited.user_id = "other".to_string();
        assert_eq!(data.update_session("other", edited.clone()), Some(edited));

        assert!(data.remove_session("me", "4").is_none());
        assert!(data.remove_session("other", "4").is_some());
        assert_eq!(data.sessions.len(), 3);
    }

    #[test]
    fn food_query_filters_owner_and_lower_bound() {
        let mut data = AppData::default();
        for (id, on, owner) in [
            ("a", date(2024, 6, 1), "me"),
            ("b", date(2024, 6, 5), "me"),
            ("c", date(2024, 6, 6), "other"),
        ] {
            data.insert_food(FoodEntry {
                id: id.to_string(),
                date: on,
                value: 1,
                user: owner.to_string(),
            });
        }

        let all: Vec<String> = data.query_food("me", None).into_iter().map(|e| e.id).collect();
        assert_eq!(all, vec!["b", "a"]);
        let recent = data.query_food("me", Some(date(2024, 6, 2)));
        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn unknown_sport_renders_blank() {
        let data = sample();
        let view = view_session(&data.sports, session("x", date(2024, 1, 1), "curling", "me"));
        assert_eq!(view.emoji, "");
        assert_eq!(view.sport_name, "");

        let view = view_session(&data.sports, session("y", date(2024, 1, 1), "gym", "me"));
        assert_eq!(view.sport_name, "gym");
        assert!(!view.emoji.is_empty());
    }
}
