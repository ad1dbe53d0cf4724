//! Integration tests for the Principal Lecturer review and monitoring API.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json, register_student, submit_report};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Report listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn attendance_rate_is_reported_as_percentage(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let report_id = submit_report(&app, "DIWA2110", 30, 40).await;

    let json = body_json(get(app, "/api/prl/reports").await).await;
    let report = json
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == report_id)
        .unwrap();

    assert_eq!(report["attendance_rate"], 75.0);
    assert_eq!(report["total_ratings"], 0);
    assert!(report["avg_rating"].is_null());
    assert_eq!(report["lecturer_name"], "Dr. John Smith");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reports_filter_by_status(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let reviewed = submit_report(&app, "DIWA2110", 30, 40).await;
    let pending = submit_report(&app, "DBS2110", 10, 20).await;

    let response = put_json(
        app.clone(),
        &format!("/api/prl/reports/{reviewed}/feedback"),
        json!({ "feedback": "Good session" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let submitted = body_json(get(app.clone(), "/api/prl/reports?status=submitted").await).await;
    assert_eq!(submitted.as_array().unwrap().len(), 1);
    assert_eq!(submitted[0]["id"], pending);

    let by_path = body_json(get(app.clone(), "/api/prl/reports/status/reviewed").await).await;
    assert_eq!(by_path.as_array().unwrap().len(), 1);
    assert_eq!(by_path[0]["id"], reviewed);

    let bogus = get(app, "/api/prl/reports?status=archived").await;
    assert_eq!(bogus.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn feedback_is_stored_verbatim_and_marks_reviewed(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let report_id = submit_report(&app, "DIWA2110", 30, 40).await;
    let text = "  Cover indexes next week.\nWell paced.  ";

    let response = put_json(
        app.clone(),
        &format!("/api/prl/reports/{report_id}/feedback"),
        json!({ "feedback": text }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["reportId"], report_id);

    let reports = body_json(get(app, "/api/reports").await).await;
    assert_eq!(reports[0]["status"], "reviewed");
    assert_eq!(reports[0]["prl_feedback"], text);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn feedback_on_missing_report_is_404(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let report_id = submit_report(&app, "DIWA2110", 30, 40).await;

    let response = put_json(
        app.clone(),
        "/api/prl/reports/99999/feedback",
        json!({ "feedback": "Nobody reads this" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let reports = body_json(get(app, "/api/reports").await).await;
    assert_eq!(reports[0]["id"], report_id);
    assert_eq!(reports[0]["status"], "submitted");
    assert!(reports[0]["prl_feedback"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn feedback_cannot_reopen_report(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let report_id = submit_report(&app, "DIWA2110", 30, 40).await;

    let response = put_json(
        app,
        &format!("/api/prl/reports/{report_id}/feedback"),
        json!({ "feedback": "Redo", "status": "submitted" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_feedback_is_400(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let report_id = submit_report(&app, "DIWA2110", 30, 40).await;

    let response = put_json(
        app,
        &format!("/api/prl/reports/{report_id}/feedback"),
        json!({ "feedback": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Courses & classes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_overview_counts_reports_and_classes(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    submit_report(&app, "DIWA2110", 30, 40).await;

    let json = body_json(get(app.clone(), "/api/prl/courses").await).await;
    let diwa = json
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["course_code"] == "DIWA2110")
        .unwrap();
    assert_eq!(diwa["total_reports"], 1);
    assert_eq!(diwa["total_classes"], 2);
    assert_eq!(diwa["main_lecturer"], "Dr. John Smith");

    let lectures =
        body_json(get(app, "/api/prl/courses/DIWA2110/lectures").await).await;
    assert_eq!(lectures.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn class_detail_includes_reports(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    submit_report(&app, "DIWA2110", 30, 40).await;

    let classes = body_json(get(app.clone(), "/api/prl/classes").await).await;
    assert_eq!(classes.as_array().unwrap().len(), 4);

    let json = body_json(get(app, "/api/prl/classes/IT2A").await).await;
    assert_eq!(json["classInfo"]["class_name"], "IT2A");
    assert_eq!(json["classInfo"]["total_reports"], 1);
    assert_eq!(json["classInfo"]["avg_attendance"], 75.0);
    assert_eq!(json["reports"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_class_is_404(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let response = get(app, "/api/prl/classes/NOPE").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Monitoring & ratings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn monitoring_reports_null_attendance_for_unreported_course(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    submit_report(&app, "DIWA2110", 30, 40).await;

    let json = body_json(get(app, "/api/prl/monitoring").await).await;
    assert_eq!(json["summary"]["total_reports"], 1);
    assert_eq!(json["summary"]["pending_reports"], 1);
    assert_eq!(json["recentReports"].as_array().unwrap().len(), 1);

    let stats = json["courseStats"].as_array().unwrap();
    let pro = stats
        .iter()
        .find(|s| s["course_code"] == "PRO2110")
        .unwrap();
    assert_eq!(pro["report_count"], 0);
    assert!(pro["avg_attendance"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ratings_page_shows_course_stats_and_recent_ratings(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let report_id = submit_report(&app, "NET2110", 18, 20).await;
    let student_id = register_student(&app, "rater@test.com").await;
    let response = post_json(
        app.clone(),
        "/api/students/ratings",
        json!({ "report_id": report_id, "student_id": student_id, "rating_value": 4 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(app, "/api/prl/ratings").await).await;
    let net = json["ratingStats"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["course_code"] == "NET2110")
        .unwrap();
    assert_eq!(net["total_ratings"], 1);
    assert_eq!(net["average_rating"], 4.0);

    let recent = json["recentRatings"].as_array().unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0]["student_name"], "Test Student");
}
