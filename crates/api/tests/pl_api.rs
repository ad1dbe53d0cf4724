//! Integration tests for the Program Leader catalog and analytics API.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json, register_student, submit_report};
use serde_json::{json, Value};
use sqlx::SqlitePool;

fn module_body(code: &str) -> Value {
    json!({
        "module_code": code,
        "module_name": "Web Application Development",
        "program": "Web Development",
        "semester": 3
    })
}

async fn lecturer_id(app: &axum::Router) -> i64 {
    let lecturers = body_json(get(app.clone(), "/api/pl/lecturers").await).await;
    lecturers[0]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Module catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_module_applies_defaults(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let response = post_json(app.clone(), "/api/pl/courses", module_body("DIWA2110")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let module_id = body_json(response).await["moduleId"].as_i64().unwrap();

    let modules = body_json(get(app, "/api/pl/courses").await).await;
    let module = modules
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == module_id)
        .unwrap();
    assert_eq!(module["credits"], 3);
    assert_eq!(module["semester"], 3);
    assert_eq!(module["status"], "active");
    assert!(module["lecturer_name"].is_null());
    assert_eq!(module["total_lectures"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_module_code_is_409(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;

    let first = post_json(app.clone(), "/api/pl/courses", module_body("SE500")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/api/pl/courses", module_body("SE500")).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("SE500"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn module_with_out_of_range_credits_is_400(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let mut body = module_body("SE501");
    body["credits"] = json!(0);

    let response = post_json(app, "/api/pl/courses", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn module_overview_aggregates_matching_reports(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let lecturer = lecturer_id(&app).await;
    let mut body = module_body("DIWA2110");
    body["lecturer_id"] = json!(lecturer);
    let response = post_json(app.clone(), "/api/pl/courses", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    submit_report(&app, "DIWA2110", 30, 40).await;
    submit_report(&app, "DIWA2110", 20, 40).await;

    let modules = body_json(get(app, "/api/pl/courses").await).await;
    let module = modules
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["module_code"] == "DIWA2110")
        .unwrap();
    assert_eq!(module["lecturer_name"], "Dr. John Smith");
    assert_eq!(module["total_lectures"], 2);
    assert_eq!(module["avg_attendance"], 62.5);
}

// ---------------------------------------------------------------------------
// Lecturer assignment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_and_clear_lecturer(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let response = post_json(app.clone(), "/api/pl/courses", module_body("SE502")).await;
    let module_id = body_json(response).await["moduleId"].as_i64().unwrap();
    let lecturer = lecturer_id(&app).await;
    let uri = format!("/api/pl/courses/{module_id}/assign");

    let assigned = put_json(app.clone(), &uri, json!({ "lecturer_id": lecturer })).await;
    assert_eq!(assigned.status(), StatusCode::OK);
    assert_eq!(body_json(assigned).await["success"], true);

    let modules = body_json(get(app.clone(), "/api/pl/courses").await).await;
    let module = modules
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == module_id)
        .unwrap();
    assert_eq!(module["lecturer_id"], lecturer);

    let cleared = put_json(app.clone(), &uri, json!({ "lecturer_id": null })).await;
    assert_eq!(cleared.status(), StatusCode::OK);

    let modules = body_json(get(app, "/api/pl/courses").await).await;
    let module = modules
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == module_id)
        .unwrap();
    assert!(module["lecturer_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_accepts_form_string_ids(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let response = post_json(app.clone(), "/api/pl/courses", module_body("SE504")).await;
    let module_id = body_json(response).await["moduleId"].as_i64().unwrap();
    let lecturer = lecturer_id(&app).await;
    let uri = format!("/api/pl/courses/{module_id}/assign");

    let body = json!({ "lecturer_id": lecturer.to_string() });
    let assigned = put_json(app.clone(), &uri, body).await;
    assert_eq!(assigned.status(), StatusCode::OK);

    let modules = body_json(get(app.clone(), "/api/pl/courses").await).await;
    let module = modules
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == module_id)
        .unwrap();
    assert_eq!(module["lecturer_id"], lecturer);
    assert_eq!(module["lecturer_name"], "Dr. John Smith");

    let cleared = put_json(app.clone(), &uri, json!({ "lecturer_id": "" })).await;
    assert_eq!(cleared.status(), StatusCode::OK);

    let modules = body_json(get(app, "/api/pl/courses").await).await;
    let module = modules
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == module_id)
        .unwrap();
    assert!(module["lecturer_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn module_form_with_unselected_lecturer_is_unassigned(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let body = json!({
        "module_code": "SE505",
        "module_name": "Software Engineering",
        "program": "Software Engineering",
        "credits": "4",
        "semester": "2",
        "lecturer_id": ""
    });

    let response = post_json(app.clone(), "/api/pl/courses", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let module_id = body_json(response).await["moduleId"].as_i64().unwrap();

    let modules = body_json(get(app, "/api/pl/courses").await).await;
    let module = modules
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == module_id)
        .unwrap();
    assert_eq!(module["credits"], 4);
    assert_eq!(module["semester"], 2);
    assert!(module["lecturer_id"].is_null());
    assert!(module["lecturer_name"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_to_missing_module_is_404(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let lecturer = lecturer_id(&app).await;

    let response = put_json(
        app,
        "/api/pl/courses/9999/assign",
        json!({ "lecturer_id": lecturer }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assigning_a_student_is_400(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let response = post_json(app.clone(), "/api/pl/courses", module_body("SE503")).await;
    let module_id = body_json(response).await["moduleId"].as_i64().unwrap();
    let student = register_student(&app, "not-a-lecturer@test.com").await;

    let response = put_json(
        app,
        &format!("/api/pl/courses/{module_id}/assign"),
        json!({ "lecturer_id": student }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_groups_reports_by_program_prefix(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    submit_report(&app, "DIWA2110", 30, 40).await;
    submit_report(&app, "DBS2110", 10, 10).await;

    let json = body_json(get(app, "/api/pl/dashboard").await).await;
    assert_eq!(json["summary"]["total_reports"], 2);
    assert_eq!(json["summary"]["total_courses"], 4);
    assert_eq!(json["summary"]["total_lecturers"], 1);
    assert_eq!(json["summary"]["pending_reviews"], 2);
    assert_eq!(json["recentActivity"].as_array().unwrap().len(), 2);

    let stats = json["programStats"].as_array().unwrap();
    assert_eq!(stats.len(), 3);
    let web = stats.iter().find(|s| s["program"] == "Web Development").unwrap();
    assert_eq!(web["reports_count"], 1);
    assert_eq!(web["attendance_rate"], 75.0);
    let net = stats.iter().find(|s| s["program"] == "Networking").unwrap();
    assert_eq!(net["reports_count"], 0);
    assert!(net["attendance_rate"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reviewed_reports_only_include_commented_ones(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let reviewed = submit_report(&app, "DIWA2110", 30, 40).await;
    submit_report(&app, "DBS2110", 10, 10).await;

    let response = put_json(
        app.clone(),
        &format!("/api/prl/reports/{reviewed}/feedback"),
        json!({ "feedback": "Solid" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/pl/reports").await).await;
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["id"], reviewed);
    assert_eq!(reports[0]["prl_feedback"], "Solid");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn monitoring_reports_weekly_and_lecturer_progress(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    submit_report(&app, "DIWA2110", 30, 40).await;

    let json = body_json(get(app, "/api/pl/monitoring").await).await;

    let weeks = json["weeklyProgress"].as_array().unwrap();
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0]["week_of_reporting"], 3);
    assert_eq!(weeks[0]["avg_attendance"], 75.0);

    let lecturers = json["lecturerPerformance"].as_array().unwrap();
    assert_eq!(lecturers.len(), 1);
    assert_eq!(lecturers[0]["reports_submitted"], 1);
    assert_eq!(lecturers[0]["modules_assigned"], 4);

    assert_eq!(json["programPerformance"].as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ratings_distribution_counts_each_value(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let report_id = submit_report(&app, "DIWA2110", 30, 40).await;
    for (email, value) in [("a@test.com", 5), ("b@test.com", 5), ("c@test.com", 3)] {
        let student = register_student(&app, email).await;
        let response = post_json(
            app.clone(),
            "/api/students/ratings",
            json!({ "report_id": report_id, "student_id": student, "rating_value": value }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app, "/api/pl/ratings").await).await;
    assert_eq!(
        json["ratingDistribution"],
        json!([
            { "rating_value": 5, "count": 2 },
            { "rating_value": 3, "count": 1 }
        ])
    );
    let programs = json["programRatings"].as_array().unwrap();
    assert_eq!(programs.len(), 1);
    assert_eq!(programs[0]["total_ratings"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn classes_and_lectures_are_tagged_with_program(pool: SqlitePool) {
    let app = common::build_seeded_app(pool).await;
    let response = post_json(app.clone(), "/api/pl/courses", module_body("DIWA2110")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    submit_report(&app, "DIWA2110", 30, 40).await;

    let classes = body_json(get(app.clone(), "/api/pl/classes").await).await;
    let it2a = classes
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["class_name"] == "IT2A")
        .unwrap();
    assert_eq!(it2a["program"], "Web Development");

    let lectures = body_json(get(app, "/api/pl/lectures").await).await;
    assert_eq!(lectures.as_array().unwrap().len(), 1);
    assert_eq!(lectures[0]["program"], "Web Development");
    assert_eq!(lectures[0]["attendance_rate"], 75.0);
}
