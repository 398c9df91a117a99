use crate::models::{FoodEntry, Session};
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

pub const DEFAULT_RECENT_WINDOW_DAYS: u32 = 30;
pub const RECENT_SESSIONS_LIMIT: usize = 10;

const WEEK_DAYS: i64 = 7;
const MONTH_DAYS: i64 = 30;
const ALL_LOOKBACK_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub count: u64,
    pub total_duration: u64,
    pub average_duration: f64,
    pub recent_count: u64,
    pub recent_total_duration: u64,
}

impl SessionStats {
    /// Combines stats of two disjoint session sets.
    pub fn merge(self, other: SessionStats) -> SessionStats {
        let count = self.count + other.count;
        let total_duration = self.total_duration + other.total_duration;
        SessionStats {
            count,
            total_duration,
            average_duration: average(total_duration as f64, count),
            recent_count: self.recent_count + other.recent_count,
            recent_total_duration: self.recent_total_duration + other.recent_total_duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Week,
    Month,
    All,
}

impl Timeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::All => "all",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            "all" => Ok(Timeframe::All),
            other => Err(format!("timeframe must be 'week', 'month' or 'all', got '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub value: i64,
    pub has_data: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodSummary {
    pub entry_count: u64,
    pub total_value: i64,
    pub average_value: f64,
}

pub fn session_stats(sessions: &[Session], recent_window_days: u32) -> SessionStats {
    session_stats_at(Local::now().date_naive(), sessions, recent_window_days)
}

pub fn session_stats_at(
    today: NaiveDate,
    sessions: &[Session],
    recent_window_days: u32,
) -> SessionStats {
    // A window reaching past the calendar's range counts every session.
    let cutoff = today
        .checked_sub_signed(Duration::days(i64::from(recent_window_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut stats = SessionStats::default();
    for session in sessions {
        let duration = u64::from(session.duration);
        stats.count += 1;
        stats.total_duration += duration;
        if session.date >= cutoff {
            stats.recent_count += 1;
            stats.recent_total_duration += duration;
        }
    }
    stats.average_duration = average(stats.total_duration as f64, stats.count);
    stats
}

pub fn timeline_series(entries: &[FoodEntry], timeframe: Timeframe) -> Vec<TimelinePoint> {
    timeline_series_at(Local::now().date_naive(), entries, timeframe)
}

/// One point per calendar day from the timeframe's start through `today`,
/// oldest first. Entries sharing a date are summed.
pub fn timeline_series_at(
    today: NaiveDate,
    entries: &[FoodEntry],
    timeframe: Timeframe,
) -> Vec<TimelinePoint> {
    let start = match timeframe {
        Timeframe::Week => today - Duration::days(WEEK_DAYS - 1),
        Timeframe::Month => today - Duration::days(MONTH_DAYS - 1),
        Timeframe::All => match entries.iter().map(|entry| entry.date).min() {
            Some(earliest) => earliest
                .max(today - Duration::days(ALL_LOOKBACK_DAYS))
                .min(today),
            None => today - Duration::days(MONTH_DAYS - 1),
        },
    };

    let mut by_date: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for entry in entries {
        let sum = by_date.entry(entry.date).or_default();
        *sum = sum.saturating_add(entry.value);
    }

    start
        .iter_days()
        .take_while(|date| *date <= today)
        .map(|date| match by_date.get(&date) {
            Some(value) => TimelinePoint {
                date,
                value: *value,
                has_data: true,
            },
            None => TimelinePoint {
                date,
                value: 0,
                has_data: false,
            },
        })
        .collect()
}

/// Date lower bound the food query applies for a timeframe.
pub fn timeframe_lower_bound(timeframe: Timeframe, today: NaiveDate) -> Option<NaiveDate> {
    match timeframe {
        Timeframe::Week => Some(today - Duration::days(WEEK_DAYS)),
        Timeframe::Month => Some(today - Duration::days(MONTH_DAYS)),
        Timeframe::All => None,
    }
}

pub fn food_summary(entries: &[FoodEntry]) -> FoodSummary {
    let entry_count = entries.len() as u64;
    let total_value = entries
        .iter()
        .fold(0i64, |total, entry| total.saturating_add(entry.value));
    FoodSummary {
        entry_count,
        total_value,
        average_value: average(total_value as f64, entry_count),
    }
}

/// Largest value in the series, never below 1 so charts can divide by it.
pub fn max_value(series: &[TimelinePoint]) -> i64 {
    series
        .iter()
        .map(|point| point.value)
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Newest sessions first, at most `limit` of them.
pub fn recent_sessions(sessions: &[Session], limit: usize) -> Vec<Session> {
    let mut recent = sessions.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}

fn average(total: f64, count: u64) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session(id: &str, on: NaiveDate, duration: u32) -> Session {
        Session {
            id: id.to_string(),
            date: on,
            sport_id: "running".to_string(),
            duration,
            notes: None,
            user_id: "u1".to_string(),
        }
    }

    fn food(on: NaiveDate, value: i64) -> FoodEntry {
        FoodEntry {
            id: format!("{on}-{value}"),
            date: on,
            value,
            user: "u1".to_string(),
        }
    }

    #[test]
    fn empty_sessions_yield_zeroed_stats() {
        let stats = session_stats(&[], DEFAULT_RECENT_WINDOW_DAYS);
        assert_eq!(stats, SessionStats::default());
        assert_eq!(stats.average_duration, 0.0);
    }

    #[test]
    fn recent_window_is_inclusive_of_cutoff() {
        let today = date(2024, 6, 30);
        let sessions = vec![
            session("a", today, 30),
            session("b", date(2024, 5, 31), 40),
            session("c", date(2024, 5, 30), 50),
        ];

        let stats = session_stats_at(today, &sessions, 30);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_duration, 120);
        assert_eq!(stats.average_duration, 40.0);
        assert_eq!(stats.recent_count, 2);
        assert_eq!(stats.recent_total_duration, 70);
    }

    #[test]
    fn oversized_window_counts_every_session() {
        let today = date(2024, 6, 30);
        let sessions = vec![session("a", date(1900, 1, 1), 15), session("b", today, 25)];

        let stats = session_stats_at(today, &sessions, u32::MAX);
        assert_eq!(stats.recent_count, 2);
        assert_eq!(stats.recent_total_duration, 40);
        assert_eq!(session_stats(&[], u32::MAX), SessionStats::default());
    }

    #[test]
    fn stats_merge_recomputes_average() {
        let today = date(2024, 6, 30);
        let left = vec![session("a", today, 10)];
        let right = vec![
            session("b", date(2024, 1, 1), 20),
            session("c", date(2024, 1, 2), 60),
        ];
        let both: Vec<Session> = left.iter().chain(right.iter()).cloned().collect();

        let merged = session_stats_at(today, &left, 30).merge(session_stats_at(today, &right, 30));
        assert_eq!(merged, session_stats_at(today, &both, 30));
        assert_eq!(merged.average_duration, 30.0);
    }

    #[test]
    fn week_series_ends_today_with_consecutive_days() {
        let today = date(2024, 3, 3);
        let series = timeline_series_at(today, &[], Timeframe::Week);

        assert_eq!(series.len(), 7);
        assert_eq!(series.last().map(|p| p.date), Some(today));
        assert_eq!(series[0].date, date(2024, 2, 26));
        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert!(series.iter().all(|p| !p.has_data && p.value == 0));
    }

    #[test]
    fn week_series_from_wall_clock_has_seven_points() {
        let series = timeline_series(&[], Timeframe::Week);
        assert_eq!(series.len(), 7);
        assert_eq!(series[6].date, Local::now().date_naive());
    }

    #[test]
    fn same_day_entries_are_summed() {
        let today = date(2024, 6, 3);
        let entries = vec![food(date(2024, 6, 1), 10), food(date(2024, 6, 1), 5)];
        let series = timeline_series_at(today, &entries, Timeframe::Week);

        let point = series
            .iter()
            .find(|p| p.date == date(2024, 6, 1))
            .expect("missing day");
        assert_eq!(point.value, 15);
        assert!(point.has_data);
    }

    #[test]
    fn recorded_zero_still_has_data() {
        let today = date(2024, 6, 3);
        let series = timeline_series_at(today, &[food(today, 0)], Timeframe::Week);
        assert_eq!(series[6].value, 0);
        assert!(series[6].has_data);
        assert!(!series[5].has_data);
    }

    #[test]
    fn month_series_has_thirty_points() {
        let today = date(2024, 3, 31);
        let series = timeline_series_at(today, &[], Timeframe::Month);
        assert_eq!(series.len(), 30);
        assert_eq!(series[0].date, date(2024, 3, 2));
    }

    #[test]
    fn all_series_falls_back_to_thirty_days() {
        let today = date(2024, 6, 30);
        let series = timeline_series_at(today, &[], Timeframe::All);
        assert_eq!(series.len(), 30);
        assert_eq!(series[29].date, today);
    }

    #[test]
    fn all_series_starts_at_earliest_entry() {
        let today = date(2024, 6, 30);
        let entries = vec![food(date(2024, 6, 20), 3), food(date(2024, 6, 25), 4)];
        let series = timeline_series_at(today, &entries, Timeframe::All);
        assert_eq!(series.len(), 11);
        assert_eq!(series[0].date, date(2024, 6, 20));
        assert_eq!(series[0].value, 3);
    }

    #[test]
    fn all_series_caps_lookback_at_ninety_days() {
        let today = date(2024, 6, 30);
        let entries = vec![food(date(2023, 1, 1), 99), food(today, 1)];
        let series = timeline_series_at(today, &entries, Timeframe::All);
        assert_eq!(series.len(), 91);
        assert_eq!(series[0].date, today - Duration::days(90));
        assert!(series.iter().all(|p| p.value != 99));
    }

    #[test]
    fn all_series_ignores_future_only_entries() {
        let today = date(2024, 6, 30);
        let series = timeline_series_at(today, &[food(date(2024, 7, 5), 8)], Timeframe::All);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, today);
    }

    #[test]
    fn series_crosses_daylight_saving_change() {
        // Europe and the US both shift clocks in late March.
        let today = date(2024, 4, 2);
        let series = timeline_series_at(today, &[], Timeframe::Month);
        let dates: Vec<NaiveDate> = series.iter().map(|p| p.date).collect();
        assert!(dates.contains(&date(2024, 3, 31)));
        assert!(dates.contains(&date(2024, 3, 10)));
        assert_eq!(dates.len(), 30);
    }

    #[test]
    fn timeframe_parses_and_bounds() {
        assert_eq!("Week".parse::<Timeframe>(), Ok(Timeframe::Week));
        assert_eq!("all".parse::<Timeframe>(), Ok(Timeframe::All));
        assert!("year".parse::<Timeframe>().is_err());

        let today = date(2024, 6, 30);
        assert_eq!(timeframe_lower_bound(Timeframe::Week, today), Some(date(2024, 6, 23)));
        assert_eq!(timeframe_lower_bound(Timeframe::Month, today), Some(date(2024, 5, 31)));
        assert_eq!(timeframe_lower_bound(Timeframe::All, today), None);
    }

    #[test]
    fn food_summary_guards_empty_input() {
        assert_eq!(food_summary(&[]), FoodSummary::default());

        let summary = food_summary(&[food(date(2024, 1, 1), 10), food(date(2024, 1, 2), 5)]);
        assert_eq!(summary.entry_count, 2);
        assert_eq!(summary.total_value, 15);
        assert_eq!(summary.average_value, 7.5);
    }

    #[test]
    fn huge_food_values_saturate_instead_of_overflowing() {
        let today = date(2024, 6, 3);
        let entries = vec![food(today, i64::MAX), food(today, i64::MAX)];

        assert_eq!(food_summary(&entries).total_value, i64::MAX);
        let series = timeline_series_at(today, &entries, Timeframe::Week);
        assert_eq!(series[6].value, i64::MAX);
        assert_eq!(max_value(&series), i64::MAX);
    }

    #[test]
    fn max_value_never_below_one() {
        assert_eq!(max_value(&[]), 1);
        let today = date(2024, 6, 3);
        let series = timeline_series_at(today, &[food(today, 42)], Timeframe::Week);
        assert_eq!(max_value(&series), 42);
    }

    #[test]
    fn recent_sessions_are_newest_first_and_limited() {
        let sessions: Vec<Session> = (1..=12)
            .map(|day| session(&day.to_string(), date(2024, 5, day), day))
            .collect();
        let recent = recent_sessions(&sessions, RECENT_SESSIONS_LIMIT);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].date, date(2024, 5, 12));
        assert_eq!(recent[9].date, date(2024, 5, 3));
    }
}
