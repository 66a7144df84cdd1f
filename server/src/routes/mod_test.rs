use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

const SMALL_PLAN: &str = "start_time=09%3A00&end_time=11%3A00\
    &available_days=Monday&available_days=Tuesday\
    &projects%5B0%5D%5Bname%5D=Deep+work\
    &projects%5B0%5D%5Bblocks_per_week%5D=2\
    &projects%5B0%5D%5Bhours_per_block%5D=1\
    &project_count=1&constraint_count=0";

fn router() -> Router {
    api_routes(AppState::default(), &ServerConfig::default())
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================
// /healthz
// =============================================================

#[tokio::test]
async fn healthz_is_ok() {
    let response = router()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================
// /api/schedule
// =============================================================

#[tokio::test]
async fn schedule_returns_outcome_json() {
    let response = router().oneshot(form_post("/api/schedule", SMALL_PLAN)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "optimal");
    assert_eq!(json["stats"][0]["project_name"], "Deep work");
    assert_eq!(json["stats"][0]["assigned"], "100%");
    assert_eq!(json["timetable"]["slots"][0], "09:00");
}

#[tokio::test]
async fn schedule_rejects_missing_window_with_bad_request() {
    let response = router().oneshot(form_post("/api/schedule", "end_time=17%3A00")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(json["error"].as_str().unwrap().contains("start_time"));
}

#[tokio::test]
async fn schedule_rejects_unplaceable_constraint_with_unprocessable() {
    let body = "start_time=09%3A00&end_time=17%3A00&available_days=Monday\
        &constraints%5B0%5D%5Bday%5D=Sunday\
        &constraints%5B0%5D%5Bstart_time%5D=10%3A00\
        &constraints%5B0%5D%5Bend_time%5D=11%3A00\
        &constraints%5B0%5D%5Bname%5D=Brunch\
        &constraint_count=1";
    let response = router().oneshot(form_post("/api/schedule", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn schedule_rejects_absurd_block_length_with_bad_request() {
    let body = "start_time=09%3A00&end_time=17%3A00&available_days=Monday\
        &projects%5B0%5D%5Bname%5D=Gym\
        &projects%5B0%5D%5Bblocks_per_week%5D=3\
        &projects%5B0%5D%5Bhours_per_block%5D=1e300\
        &project_count=1";
    let response = router().oneshot(form_post("/api/schedule", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let config = ServerConfig { max_body_bytes: 16, ..ServerConfig::default() };
    let response = api_routes(AppState::default(), &config)
        .oneshot(form_post("/api/schedule", SMALL_PLAN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================
// /generate
// =============================================================

#[tokio::test]
async fn generate_renders_results_page() {
    let response = router().oneshot(form_post("/generate", SMALL_PLAN)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Assignment Statistics"));
    assert!(html.contains("Deep work"));
}

#[tokio::test]
async fn generate_shows_errors_inside_the_page() {
    let response = router()
        .oneshot(form_post("/generate", "start_time=nine&end_time=17%3A00"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Error: invalid submission"));
}

#[test]
fn planning_error_to_status_maps_variants() {
    use crate::services::planning::PlanningError;
    use planner::{SolveError, SubmissionError, Weekday};

    let err = PlanningError::Submission(SubmissionError::MissingField("start_time"));
    assert_eq!(plan::planning_error_to_status(&err), StatusCode::BAD_REQUEST);
    let err = PlanningError::Solve(SolveError::DayUnavailable { name: "Brunch".into(), day: Weekday::Sunday });
    assert_eq!(plan::planning_error_to_status(&err), StatusCode::UNPROCESSABLE_ENTITY);
}
