use crate::calendar::{self, WEEKDAY_LABELS};
use crate::errors::AppError;
use crate::models::{
    CalendarDayView, CalendarQuery, CalendarResponse, FoodEntry, FoodQuery, FoodRequest,
    FoodResponse, RecapQuery, RecapResponse, Session, SessionRequest, SessionView, SessionsQuery,
    Sport,
};
use crate::queries::{view_session, SessionFilter};
use crate::state::AppState;
use crate::stats::{self, Timeframe, RECENT_SESSIONS_LIMIT};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;
use uuid::Uuid;

const OWNER_HEADER: &str = "x-owner-id";

pub async fn index() -> Html<String> {
    Html(render_index(&today().to_string()))
}

pub async fn get_sports(State(state): State<AppState>) -> Json<Vec<Sport>> {
    let data = state.data.lock().await;
    Json(data.sports.clone())
}

pub async fn get_calendar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let month_ref = match query.month.as_deref() {
        Some(raw) => calendar::parse_month(raw)
            .ok_or_else(|| AppError::bad_request("month must be formatted as YYYY-MM"))?,
        None => today(),
    };
    let owner = owner_id(&state, &headers);
    let (first, last) = calendar::month_range(month_ref);

    let data = state.data.lock().await;
    let sessions = data.query_sessions(&SessionFilter {
        owner: Some(owner.as_str()),
        from: Some(first),
        to: Some(last),
        sport: None,
    });
    let grid = calendar::layout(month_ref, &sessions);

    let days = grid
        .days
        .into_iter()
        .map(|day| CalendarDayView {
            day: day.day,
            date: day.date,
            sessions: day
                .sessions
                .into_iter()
                .map(|session| view_session(&data.sports, session))
                .collect(),
        })
        .collect();

    Ok(Json(CalendarResponse {
        month: calendar::month_key(first),
        prev: calendar::month_key(calendar::prev_month(first)),
        next: calendar::month_key(calendar::next_month(first)),
        leading_blanks: grid.leading_blanks,
        weekdays: WEEKDAY_LABELS.iter().map(|label| label.to_string()).collect(),
        days,
    }))
}

pub async fn list_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SessionsQuery>,
) -> Result<Json<Vec<SessionView>>, AppError> {
    let from = query.from.as_deref().map(parse_date).transpose()?;
    let to = query.to.as_deref().map(parse_date).transpose()?;
    let owner = owner_id(&state, &headers);

    let data = state.data.lock().await;
    let sessions = data.query_sessions(&SessionFilter {
        owner: Some(owner.as_str()),
        from,
        to,
        sport: query.sport.as_deref(),
    });

    Ok(Json(
        sessions
            .into_iter()
            .map(|session| view_session(&data.sports, session))
            .collect(),
    ))
}

pub async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let Json(payload) = payload?;
    let owner = owner_id(&state, &headers);
    let mut data = state.data.lock().await;
    let session = validate_session(&data.sports, Uuid::new_v4().to_string(), owner, payload)?;

    data.insert_session(session.clone());
    persist_data(&state.data_path, &data).await?;
    info!(id = %session.id, date = %session.date, sport = %session.sport_id, "session created");

    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn update_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Json<Session>, AppError> {
    let Json(payload) = payload?;
    let owner = owner_id(&state, &headers);
    let mut data = state.data.lock().await;
    let session = validate_session(&data.sports, id, owner.clone(), payload)?;

    let updated = data
        .update_session(&owner, session)
        .ok_or_else(|| AppError::not_found("session not found"))?;
    persist_data(&state.data_path, &data).await?;
    info!(id = %updated.id, "session updated");

    Ok(Json(updated))
}

pub async fn delete_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let owner = owner_id(&state, &headers);
    let mut data = state.data.lock().await;

    data.remove_session(&owner, &id)
        .ok_or_else(|| AppError::not_found("session not found"))?;
    persist_data(&state.data_path, &data).await?;
    info!(%id, "session deleted");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_recap(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RecapQuery>,
) -> Result<Json<RecapResponse>, AppError> {
    let owner = owner_id(&state, &headers);
    let window_days = query.window.unwrap_or(state.recent_window_days);

    let data = state.data.lock().await;
    let sport = match query.sport.as_deref() {
        Some(id) => data.sport(id).cloned(),
        None => data.sports.first().cloned(),
    };

    let sessions = match &sport {
        Some(sport) => data.query_sessions(&SessionFilter {
            owner: Some(owner.as_str()),
            sport: Some(sport.id.as_str()),
            ..SessionFilter::default()
        }),
        None => Vec::new(),
    };

    let recent = stats::recent_sessions(&sessions, RECENT_SESSIONS_LIMIT)
        .into_iter()
        .map(|session| view_session(&data.sports, session))
        .collect();

    Ok(Json(RecapResponse {
        stats: stats::session_stats(&sessions, window_days),
        sport,
        window_days,
        recent,
    }))
}

pub async fn get_food(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<FoodQuery>,
) -> Result<Json<FoodResponse>, AppError> {
    let timeframe = match query.timeframe.as_deref() {
        Some(raw) => raw.parse::<Timeframe>().map_err(AppError::bad_request)?,
        None => Timeframe::default(),
    };
    let owner = owner_id(&state, &headers);

    let today = today();

    let data = state.data.lock().await;
    let entries = data.query_food(&owner, stats::timeframe_lower_bound(timeframe, today));
    drop(data);

    let series = stats::timeline_series_at(today, &entries, timeframe);
    Ok(Json(FoodResponse {
        timeframe,
        summary: stats::food_summary(&entries),
        max_value: stats::max_value(&series),
        series,
        entries,
    }))
}

pub async fn create_food(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<FoodRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FoodEntry>), AppError> {
    let Json(payload) = payload?;
    if payload.value < 0 {
        return Err(AppError::bad_request("value must not be negative"));
    }
    let entry = FoodEntry {
        id: Uuid::new_v4().to_string(),
        date: parse_date(&payload.date)?,
        value: payload.value,
        user: owner_id(&state, &headers),
    };

    let mut data = state.data.lock().await;
    data.insert_food(entry.clone());
    persist_data(&state.data_path, &data).await?;
    info!(id = %entry.id, date = %entry.date, value = entry.value, "food entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}

fn validate_session(
    catalog: &[Sport],
    id: String,
    owner: String,
    payload: SessionRequest,
) -> Result<Session, AppError> {
    let date = parse_date(&payload.date)?;
    let duration = u32::try_from(payload.duration)
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or_else(|| AppError::bad_request("duration must be a positive number of minutes"))?;
    if !catalog.iter().any(|sport| sport.id == payload.sport_id) {
        return Err(AppError::bad_request(format!(
            "unknown sport '{}'",
            payload.sport_id
        )));
    }
    let notes = payload
        .notes
        .map(|notes| notes.trim().to_string())
        .filter(|notes| !notes.is_empty());

    Ok(Session {
        id,
        date,
        sport_id: payload.sport_id,
        duration,
        notes,
        user_id: owner,
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}

fn owner_id(state: &AppState, headers: &HeaderMap) -> String {
    headers
        .get(OWNER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| state.owner_id.clone())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
