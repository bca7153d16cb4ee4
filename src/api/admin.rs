use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, CourseQuery, FacultyCounts, FacultyQuery};
use crate::error::AppError;
use crate::models::{Course, Faculty, RoutineDraft, Semester, Settings};
use crate::routine::{Page, RoutineFilter, RoutineTableView};
use crate::services::{
    CatalogService, DashboardStats, RoutineService, SubmitOutcome, dashboard,
};
use crate::state::AppState;

pub(super) async fn list_routines(
    State(state): State<AppState>,
    Query(filter): Query<RoutineFilter>,
) -> Result<Json<RoutineTableView>, AppError> {
    let settings = state.settings.snapshot().await;
    let routines = state.api.fetch_routines(&RoutineFilter::default()).await?;
    Ok(Json(RoutineTableView::build(&routines, &filter, &settings)))
}

#[derive(Serialize)]
pub(super) struct SubmitResponse {
    outcome: SubmitOutcome,
}

pub(super) async fn create_routine(
    State(state): State<AppState>,
    Json(draft): Json<RoutineDraft>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let outcome = RoutineService::new(state.api.clone()).submit(&draft, None).await?;
    Ok((StatusCode::CREATED, Json(SubmitResponse { outcome })))
}

pub(super) async fn update_routine(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<RoutineDraft>,
) -> Result<Json<SubmitResponse>, AppError> {
    let outcome = RoutineService::new(state.api.clone())
        .submit(&draft, Some(&id))
        .await?;
    Ok(Json(SubmitResponse { outcome }))
}

pub(super) async fn delete_routine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    RoutineService::new(state.api.clone()).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn end_semester(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    RoutineService::new(state.api.clone()).end_semester().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Result<Json<Page<Course>>, AppError> {
    let courses = state.api.fetch_courses().await?;
    Ok(Json(catalog::list_courses(&courses, &query)))
}

pub(super) async fn create_course(
    State(state): State<AppState>,
    Json(course): Json<Course>,
) -> Result<StatusCode, AppError> {
    CatalogService::new(state.api.clone())
        .save_course(None, &course)
        .await?;
    Ok(StatusCode::CREATED)
}

pub(super) async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(course): Json<Course>,
) -> Result<StatusCode, AppError> {
    CatalogService::new(state.api.clone())
        .save_course(Some(&id), &course)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    CatalogService::new(state.api.clone()).delete_course(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
pub(super) struct FacultyList {
    counts: FacultyCounts,
    faculties: Vec<Faculty>,
}

pub(super) async fn list_faculties(
    State(state): State<AppState>,
    Query(query): Query<FacultyQuery>,
) -> Result<Json<FacultyList>, AppError> {
    let faculties = state.api.fetch_faculties().await?;
    Ok(Json(FacultyList {
        counts: catalog::count_faculties(&faculties),
        faculties: catalog::list_faculties(&faculties, &query),
    }))
}

pub(super) async fn show_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    let days = state.settings.snapshot().await.day_order();
    let stats = dashboard::load(state.api.as_ref(), &days).await?;
    Ok(Json(stats))
}

pub(super) async fn create_faculty(
    State(state): State<AppState>,
    Json(faculty): Json<Faculty>,
) -> Result<StatusCode, AppError> {
    CatalogService::new(state.api.clone())
        .save_faculty(None, &faculty)
        .await?;
    Ok(StatusCode::CREATED)
}

pub(super) async fn update_faculty(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(faculty): Json<Faculty>,
) -> Result<StatusCode, AppError> {
    CatalogService::new(state.api.clone())
        .save_faculty(Some(&id), &faculty)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn delete_faculty(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    CatalogService::new(state.api.clone()).delete_faculty(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn update_semester(
    State(state): State<AppState>,
    Json(semester): Json<Semester>,
) -> Result<Json<Settings>, AppError> {
    let settings = state.settings.update_semester(&semester).await?;
    Ok(Json(settings.as_ref().clone()))
}

#[derive(Deserialize)]
pub(super) struct NewTimeRange {
    start: String,
    end: String,
}

pub(super) async fn add_time_range(
    State(state): State<AppState>,
    Json(range): Json<NewTimeRange>,
) -> Result<Json<Settings>, AppError> {
    let settings = state.settings.add_time_range(&range.start, &range.end).await?;
    Ok(Json(settings.as_ref().clone()))
}
