mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use common::{StubApi, entry, settings, valid_draft};
use routine_board::api::router;
use routine_board::models::{Course, Faculty, FacultyType, SettingsScope};
use routine_board::services::{RoutineFeed, SettingsStore};
use routine_board::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app_with(api: Arc<StubApi>) -> axum::Router {
    let settings = Arc::new(SettingsStore::with_snapshot(
        api.clone(),
        SettingsScope::Public,
        settings(),
    ));
    let feed = Arc::new(RoutineFeed::new(api.clone(), Duration::ZERO));
    router(AppState {
        api,
        settings,
        feed,
    })
}

fn stub() -> StubApi {
    StubApi {
        routines: vec![
            entry("Monday", "10:15-11:45", "301", "X"),
            entry("Sunday", "08:30-10:00", "302", "Y"),
        ],
        settings: settings(),
        ..Default::default()
    }
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app_with(Arc::new(stub()));

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_timetable_groups_day_room_time() {
    let app = app_with(Arc::new(stub()));

    let response = app.oneshot(get("/timetable")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["total"], json!(2));
    assert_eq!(body["empty"], json!(false));
    assert_eq!(body["days"][0]["day"], json!("Sunday"));
    assert_eq!(body["days"][0]["rooms"][0]["room"], json!("302"));
    assert_eq!(
        body["days"][0]["rooms"][0]["slots"][0]["time_range"],
        json!("08:30-10:00")
    );
    assert_eq!(
        body["days"][0]["rooms"][0]["slots"][0]["entries"][0]["batch"],
        json!("Y")
    );
    assert_eq!(body["days"][1]["day"], json!("Monday"));
    assert_eq!(body["days"][1]["rooms"][0]["room"], json!("301"));

    assert_eq!(body["columns"][0]["time_range"], json!("08:30-10:00"));
    assert_eq!(body["columns"][0]["label"], json!("08:30 AM - 10:00 AM"));
    assert_eq!(body["legend"][1]["batch"], json!("Y"));
    assert_eq!(
        body["header"]["university_name"],
        json!("Noakhali Science and Technology University")
    );
}

#[tokio::test]
async fn test_timetable_passes_filters_and_reports_empty() {
    let app = app_with(Arc::new(stub()));

    let response = app
        .oneshot(get("/timetable?day=Tuesday&faculty=&batch=X"))
        .await
        .unwrap();
    let body = body_json(response).await;

    assert_eq!(body["empty"], json!(true));
    assert_eq!(body["days"], json!([]));
}

#[tokio::test]
async fn test_admin_routines_filters_locally() {
    let api = Arc::new(stub());
    let app = app_with(api.clone());

    let response = app
        .oneshot(get("/admin/routines?batch=All&q=302"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["total"], json!(1));
    assert_eq!(body["rows"][0]["day"], json!("Sunday"));
    assert_eq!(body["rows"][0]["time_label"], json!("08:30 AM - 10:00 AM"));
    assert_eq!(body["options"]["days"], json!(["Sunday", "Monday"]));
    assert_eq!(api.calls(), ["fetch_routines"]);
}

#[tokio::test]
async fn test_create_routine_validates_before_backend() {
    let api = Arc::new(stub());
    let app = app_with(api.clone());

    let mut draft = serde_json::to_value(valid_draft()).unwrap();
    draft["room"] = json!("");

    let response = app
        .oneshot(json_request("POST", "/admin/routines", draft))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Please fill in the \"room\" field."));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_create_routine_reports_backend_conflict() {
    let api = Arc::new(StubApi {
        conflict: Some("Room 301 is already booked at 08:30-10:00".to_string()),
        ..stub()
    });
    let app = app_with(api.clone());

    let draft = serde_json::to_value(valid_draft()).unwrap();
    let response = app
        .oneshot(json_request("POST", "/admin/routines", draft))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        json!("Room 301 is already booked at 08:30-10:00")
    );
    assert_eq!(api.calls(), ["check_conflict:"]);
}

#[tokio::test]
async fn test_create_and_update_routine() {
    let api = Arc::new(stub());

    let draft = serde_json::to_value(valid_draft()).unwrap();
    let created = app_with(api.clone())
        .oneshot(json_request("POST", "/admin/routines", draft.clone()))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(body_json(created).await["outcome"], json!("created"));

    let updated = app_with(api.clone())
        .oneshot(json_request("PUT", "/admin/routines/abc123", draft))
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(body_json(updated).await["outcome"], json!("updated"));

    assert_eq!(
        api.calls(),
        [
            "check_conflict:",
            "create:ICE-2101",
            "check_conflict:abc123",
            "update:abc123"
        ]
    );
}

#[tokio::test]
async fn test_delete_and_end_semester() {
    let api = Arc::new(stub());

    let deleted = app_with(api.clone())
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/admin/routines/abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let cleared = app_with(api.clone())
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/admin/routines")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::NO_CONTENT);

    assert_eq!(api.calls(), ["delete:abc123", "clear"]);
}

#[tokio::test]
async fn test_dashboard_counts_per_day() {
    let api = Arc::new(StubApi {
        faculties: vec![Faculty {
            name: "Kabir Hossain".to_string(),
            designation: "Lecturer".to_string(),
            faculty_type: FacultyType::Internal,
            ..Default::default()
        }],
        courses: vec![Course::default(), Course::default()],
        ..stub()
    });
    let app = app_with(api);

    let response = app.oneshot(get("/admin/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["total_routines"], json!(2));
    assert_eq!(body["total_faculties"], json!(1));
    assert_eq!(body["total_courses"], json!(2));
    assert_eq!(body["total_rooms"], json!(3));
    assert_eq!(body["total_batches"], json!(2));
    assert_eq!(body["per_day"][0], json!({ "day": "Sunday", "count": 1 }));
    assert_eq!(body["per_day"][2], json!({ "day": "Tuesday", "count": 0 }));
    assert_eq!(body["max_per_day"], json!(1));
}

#[tokio::test]
async fn test_board_shows_latest_feed_snapshot() {
    let api = Arc::new(stub());
    let settings = Arc::new(SettingsStore::with_snapshot(
        api.clone(),
        SettingsScope::Public,
        settings(),
    ));
    let feed = Arc::new(RoutineFeed::new(api.clone(), Duration::ZERO));
    let app = router(AppState {
        api: api.clone(),
        settings,
        feed: feed.clone(),
    });

    let accepted = app
        .clone()
        .oneshot(json_request("PUT", "/board/filters", json!({ "day": "Monday" })))
        .await
        .unwrap();
    assert_eq!(accepted.status(), StatusCode::ACCEPTED);

    for _ in 0..100 {
        if feed.snapshot().await.ticket > 0 {
            break;
        }
        tokio::task::yield_now().await;
    }

    let body = body_json(app.oneshot(get("/board")).await.unwrap()).await;
    assert_eq!(body["filter"]["day"], json!("Monday"));
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["days"][0]["day"], json!("Monday"));
}

#[tokio::test]
async fn test_settings_reload_replaces_snapshot() {
    let api = Arc::new(StubApi {
        settings: routine_board::models::Settings {
            batches: vec!["Z".to_string()],
            ..Default::default()
        },
        ..stub()
    });
    let app = app_with(api);

    let before = body_json(app.clone().oneshot(get("/settings")).await.unwrap()).await;
    assert_eq!(before["batches"], json!(["X", "Y"]));

    let reloaded = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/settings/reload")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(reloaded.status(), StatusCode::OK);

    let after = body_json(app.oneshot(get("/settings")).await.unwrap()).await;
    assert_eq!(after["batches"], json!(["Z"]));
}

#[tokio::test]
async fn test_course_listing_endpoint_pages() {
    let courses = (1..=12)
        .map(|i| Course {
            id: i.to_string(),
            course_code: format!("ICE-{}", 1100 + i),
            course_title: format!("Course {}", i),
            credit_hour: Some(3.0),
            is_lab: i % 2 == 0,
        })
        .collect();
    let app = app_with(Arc::new(StubApi { courses, ..stub() }));

    let body = body_json(
        app.oneshot(get("/admin/courses?kind=Lab&page=1&limit=4"))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(body["total"], json!(6));
    assert_eq!(body["total_pages"], json!(2));
    assert_eq!(body["items"][0]["course_code"], json!("ICE-1102"));
}

#[tokio::test]
async fn test_routine_search_takes_one_query_name() {
    let app = app_with(Arc::new(stub()));

    let by_faculty = app
        .clone()
        .oneshot(get("/admin/routines?faculty=302"))
        .await
        .unwrap();
    assert_eq!(by_faculty.status(), StatusCode::OK);
    assert_eq!(body_json(by_faculty).await["total"], json!(1));

    let both = app
        .oneshot(get("/admin/routines?faculty=302&q=301"))
        .await
        .unwrap();
    assert_eq!(both.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_course_create_update_delete() {
    let api = Arc::new(stub());
    let course = json!({
        "course_code": "ICE-3105",
        "course_title": "Digital Signal Processing",
        "credit_hour": "3",
        "is_lab": false
    });

    let created = app_with(api.clone())
        .oneshot(json_request("POST", "/admin/courses", course.clone()))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let updated = app_with(api.clone())
        .oneshot(json_request("PUT", "/admin/courses/c1", course))
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::NO_CONTENT);

    let deleted = app_with(api.clone())
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/admin/courses/c1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    assert_eq!(
        api.calls(),
        [
            "save_course:new:ICE-3105",
            "save_course:c1:ICE-3105",
            "delete_course:c1"
        ]
    );
}

#[tokio::test]
async fn test_invalid_course_is_not_sent() {
    let api = Arc::new(stub());

    let response = app_with(api.clone())
        .oneshot(json_request(
            "POST",
            "/admin/courses",
            json!({ "course_code": "ICE-3105", "course_title": "DSP", "credit_hour": 0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Valid credit hour required"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_faculty_create_update_delete() {
    let api = Arc::new(stub());
    let faculty = json!({
        "name": "Nusrat Jahan",
        "designation": "Assistant Professor",
        "type": "External",
        "department": "CSE"
    });

    let created = app_with(api.clone())
        .oneshot(json_request("POST", "/admin/faculties", faculty.clone()))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let updated = app_with(api.clone())
        .oneshot(json_request("PUT", "/admin/faculties/f9", faculty))
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::NO_CONTENT);

    let rejected = app_with(api.clone())
        .oneshot(json_request(
            "POST",
            "/admin/faculties",
            json!({ "name": "Nusrat Jahan", "designation": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let deleted = app_with(api.clone())
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/admin/faculties/f9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    assert_eq!(
        api.calls(),
        [
            "save_faculty:new:Nusrat Jahan",
            "save_faculty:f9:Nusrat Jahan",
            "delete_faculty:f9"
        ]
    );
}

#[tokio::test]
async fn test_semester_update_validates_months() {
    let api = Arc::new(stub());
    let app = app_with(api.clone());

    let rejected = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/admin/settings/semester",
            json!({ "start_month": "Smarch", "end_month": "June" }),
        ))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(api.calls().is_empty());

    let accepted = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/admin/settings/semester",
            json!({
                "start_month": "January",
                "start_year": "2025",
                "end_month": "June",
                "end_year": 2025
            }),
        ))
        .await
        .unwrap();
    assert_eq!(accepted.status(), StatusCode::OK);
    assert_eq!(
        body_json(accepted).await["semester"]["end_month"],
        json!("June")
    );

    let current = body_json(app.oneshot(get("/settings")).await.unwrap()).await;
    assert_eq!(current["semester"]["start_month"], json!("January"));
    assert_eq!(api.calls(), ["update_semester", "fetch_settings"]);
}

#[tokio::test]
async fn test_add_time_range_extends_settings() {
    let api = Arc::new(stub());
    let app = app_with(api.clone());

    let added = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/admin/settings/time-ranges",
            json!({ "start": "15:15", "end": "16:45" }),
        ))
        .await
        .unwrap();
    assert_eq!(added.status(), StatusCode::OK);
    let body = body_json(added).await;
    assert_eq!(body["time_ranges"].as_array().unwrap().len(), 4);
    assert_eq!(body["time_ranges"][3], json!("15:15-16:45"));

    let existing = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/admin/settings/time-ranges",
            json!({ "start": "08:30", "end": "10:00" }),
        ))
        .await
        .unwrap();
    assert_eq!(existing.status(), StatusCode::OK);

    let invalid = app
        .oneshot(json_request(
            "POST",
            "/admin/settings/time-ranges",
            json!({ "start": "16:45", "end": "15:15" }),
        ))
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(api.calls(), ["add_time_range:15:15-16:45", "fetch_settings"]);
}
