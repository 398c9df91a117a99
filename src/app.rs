use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/sports", get(handlers::get_sports))
        .route("/api/calendar", get(handlers::get_calendar))
        .route(
            "/api/sessions",
            get(handlers::list_sessions).post(handlers::create_session),
        )
        .route(
            "/api/sessions/:id",
            put(handlers::update_session).delete(handlers::delete_session),
        )
        .route("/api/recap", get(handlers::get_recap))
        .route("/api/food", get(handlers::get_food).post(handlers::create_food))
        .with_state(state)
}
