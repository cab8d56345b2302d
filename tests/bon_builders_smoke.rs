use gradewise::{
    GradingCriterion, ProjectDefinition, Stack, Submission,
    grade::{FeedbackItem, grade_project},
};
use serde_json::{Value, json};

#[test]
fn criterion_builder_takes_iterables() {
    let criterion = GradingCriterion::builder()
        .id("design")
        .category("Design & UI")
        .max_points(25)
        .requirements(["Responsive layout", "Consistent palette"])
        .build();

    assert_eq!(criterion.requirements.len(), 2);
    assert!(criterion.description.is_empty());
}

#[test]
fn project_builder_from_iter() {
    let project = ProjectDefinition::builder()
        .title("Notes API".to_string())
        .stack(Stack::Backend)
        .technologies(["Node.js", "Express"])
        .criteria([GradingCriterion::builder()
            .id("api")
            .category("API Integration")
            .max_points(30)
            .build()])
        .build();

    assert_eq!(project.title.as_deref(), Some("Notes API"));
    assert!(project.uses("EXPRESS"));
    assert_eq!(project.max_points(), 30);
}

#[test]
fn feedback_item_serializes_camel_case() {
    let item = FeedbackItem::builder()
        .category("Security")
        .score(7.5)
        .max_score(15.0)
        .feedback("Basic protections are in place.")
        .suggestions(["Add rate limiting"])
        .build();

    let value: Value = serde_json::to_value(&item).expect("serialize feedback item");
    assert_eq!(value["maxScore"], json!(15.0));
    assert!(value["suggestions"].is_array());
    assert!(value.get("max_score").is_none());
}

#[test]
fn result_json_shape() {
    let project = ProjectDefinition::builder()
        .criteria([GradingCriterion::builder()
            .id("quality")
            .category("Code Quality")
            .max_points(20)
            .build()])
        .build();
    let submission = Submission::new([(
        "index.html",
        "<!DOCTYPE html>\n<html>\n  <body>\n    <!-- hello -->\n  </body>\n</html>\n",
    )]);

    let result = grade_project(&project, &submission).expect("grade");
    let value: Value = serde_json::to_value(&result).expect("serialize result");

    assert!(value["totalScore"].is_u64());
    assert_eq!(value["maxScore"], json!(20));
    assert!(value["overallGrade"].is_string());
    assert_eq!(value["feedback"][0]["category"], json!("Code Quality"));
}

#[test]
fn submission_json_round_trips_links() {
    let submission: Submission = serde_json::from_value(json!({
        "files": { "index.html": "<html></html>" },
        "repositoryUrl": "https://github.com/student/site"
    }))
    .expect("parse submission");

    assert_eq!(submission.len(), 1);
    assert!(submission.deployed_url.is_none());

    let value = serde_json::to_value(&submission).expect("serialize submission");
    assert!(value.get("deployedUrl").is_none());
    assert_eq!(value["repositoryUrl"], json!("https://github.com/student/site"));
}
