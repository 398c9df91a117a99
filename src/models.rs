use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub date: NaiveDate,
    pub sport_id: String,
    /// Minutes, always > 0 once stored.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sport {
    pub id: String,
    pub name: String,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: String,
    pub date: NaiveDate,
    pub value: i64,
    pub user: String,
}

/// Everything the store persists in one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub sports: Vec<Sport>,
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub foods: Vec<FoodEntry>,
}

pub fn default_sports() -> Vec<Sport> {
    [
        ("running", "\u{1F3C3}"),
        ("cycling", "\u{1F6B4}"),
        ("swimming", "\u{1F3CA}"),
        ("gym", "\u{1F3CB}"),
        ("tennis", "\u{1F3BE}"),
        ("basketball", "\u{1F3C0}"),
    ]
    .into_iter()
    .map(|(name, emoji)| Sport {
        id: name.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
    })
    .collect()
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub date: String,
    pub sport_id: String,
    pub duration: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FoodRequest {
    pub date: String,
    pub value: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub month: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SessionsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub sport: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecapQuery {
    pub sport: Option<String>,
    pub window: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FoodQuery {
    pub timeframe: Option<String>,
}

/// A session as the calendar and recap views show it, with its sport resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub session: Session,
    /// Empty when the sport id is not in the catalog.
    pub emoji: String,
    pub sport_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarDayView {
    pub day: u32,
    pub date: NaiveDate,
    pub sessions: Vec<SessionView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub month: String,
    pub prev: String,
    pub next: String,
    pub leading_blanks: u32,
    pub weekdays: Vec<String>,
    pub days: Vec<CalendarDayView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecapResponse {
    pub sport: Option<Sport>,
    pub window_days: u32,
    pub stats: crate::stats::SessionStats,
    pub recent: Vec<SessionView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FoodResponse {
    pub timeframe: crate::stats::Timeframe,
    pub entries: Vec<FoodEntry>,
    pub series: Vec<crate::stats::TimelinePoint>,
    pub summary: crate::stats::FoodSummary,
    pub max_value: i64,
}
