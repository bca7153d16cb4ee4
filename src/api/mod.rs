mod admin;

use axum::Json;
use axum::extract::Query;
use axum::routing::{post, put};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::error::AppError;
use crate::models::Settings;
use crate::routine::{RoutineFilter, TimetableView};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/timetable", get(timetable))
        .route("/board", get(board))
        .route("/board/filters", put(set_board_filters))
        .route("/settings", get(settings))
        .route("/settings/reload", post(reload_settings))
        .route(
            "/admin/routines",
            get(admin::list_routines)
                .post(admin::create_routine)
                .delete(admin::end_semester),
        )
        .route(
            "/admin/routines/{id}",
            put(admin::update_routine).delete(admin::delete_routine),
        )
        .route(
            "/admin/courses",
            get(admin::list_courses).post(admin::create_course),
        )
        .route(
            "/admin/courses/{id}",
            put(admin::update_course).delete(admin::delete_course),
        )
        .route(
            "/admin/faculties",
            get(admin::list_faculties).post(admin::create_faculty),
        )
        .route(
            "/admin/faculties/{id}",
            put(admin::update_faculty).delete(admin::delete_faculty),
        )
        .route("/admin/settings/semester", put(admin::update_semester))
        .route("/admin/settings/time-ranges", post(admin::add_time_range))
        .route("/admin/dashboard", get(admin::show_dashboard))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn timetable(
    State(state): State<AppState>,
    Query(filter): Query<RoutineFilter>,
) -> Result<Json<TimetableView>, AppError> {
    let settings = state.settings.snapshot().await;
    let routines = state.api.fetch_routines(&filter).await?;
    Ok(Json(TimetableView::build(&routines, &settings)))
}

#[derive(Serialize)]
struct BoardResponse {
    filter: RoutineFilter,
    last_error: Option<String>,
    #[serde(flatten)]
    view: TimetableView,
}

async fn board(State(state): State<AppState>) -> Json<BoardResponse> {
    let settings = state.settings.snapshot().await;
    let snapshot = state.feed.snapshot().await;
    Json(BoardResponse {
        view: TimetableView::build(&snapshot.entries, &settings),
        filter: snapshot.filter,
        last_error: snapshot.last_error,
    })
}

/// Accepts the new filter immediately; the fetch runs in the background and
/// only lands if no newer filter arrives first.
async fn set_board_filters(
    State(state): State<AppState>,
    Json(filter): Json<RoutineFilter>,
) -> StatusCode {
    let feed = state.feed.clone();
    tokio::spawn(async move {
        if let Err(e) = feed.request(filter).await {
            tracing::warn!("board update failed: {}", e);
        }
    });
    StatusCode::ACCEPTED
}

async fn settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.snapshot().await.as_ref().clone())
}

async fn reload_settings(State(state): State<AppState>) -> Result<Json<Settings>, AppError> {
    let settings = state.settings.reload().await?;
    Ok(Json(settings.as_ref().clone()))
}
