use axum::{
    Json,
    body::to_bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use gradewise::{
    GradingCriterion, LetterGrade, ProjectDefinition, Submission,
    server::{self, AppState, GradeRequest},
};
use serde_json::Value;

fn request(submission: Submission) -> GradeRequest {
    GradeRequest {
        project: ProjectDefinition::builder()
            .criteria([GradingCriterion::builder()
                .id("resp")
                .category("Responsiveness")
                .max_points(15)
                .build()])
            .build(),
        submission,
    }
}

fn page() -> Submission {
    Submission::new([
        (
            "index.html",
            "<!DOCTYPE html>\n<html>\n  <head>\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n  </head>\n</html>\n",
        ),
        (
            "css/style.css",
            "main {\n  width: 90%;\n}\n\n@media (min-width: 48rem) {\n  main { width: 60%; }\n}\n",
        ),
        (
            "js/main.js",
            "// menu toggle\ndocument.querySelector('nav').classList.toggle('open');\n",
        ),
    ])
}

async fn error_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn grade_returns_the_result() {
    let Json(result) = server::grade(State(AppState::default()), Json(request(page())))
        .await
        .expect("graded");

    assert_eq!(result.max_score, 15);
    assert_eq!(result.total_score, 15);
    assert_eq!(result.overall_grade, LetterGrade::APlus);
}

#[tokio::test]
async fn rejected_submissions_are_unprocessable() {
    let response = server::grade(
        State(AppState::default()),
        Json(request(Submission::default())),
    )
    .await
    .unwrap_err()
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = error_body(response).await;
    assert!(body["error"].as_str().is_some_and(|e| e.contains("No files")));
}

#[tokio::test]
async fn bad_repository_links_are_unprocessable() {
    let response = server::grade(
        State(AppState::default()),
        Json(request(page().with_repository_url("https://example.com/repo"))),
    )
    .await
    .unwrap_err()
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_is_ok() {
    assert_eq!(server::health().await, "ok");
}

#[tokio::test]
async fn categories_list_builtin_scorers() {
    let Json(listing) = server::categories(State(AppState::default())).await;

    assert_eq!(listing.len(), 7);
    let design = listing
        .iter()
        .find(|entry| entry.scorer == "Design & UI")
        .expect("design listed");
    assert!(design.categories.contains(&"ui/ux".to_string()));
}

#[test]
fn grade_request_parses_from_json() {
    let request: GradeRequest = serde_json::from_str(
        r#"{
            "project": { "criteria": [ { "id": "a", "category": "API", "maxPoints": 10 } ] },
            "submission": { "files": { "server.js": "app.get('/', h)" } }
        }"#,
    )
    .expect("parse request");

    assert_eq!(request.project.max_points(), 10);
    assert_eq!(request.submission.len(), 1);
}
