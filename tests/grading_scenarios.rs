use std::path::PathBuf;

use gradewise::{
    GradingCriterion, GradingError, LetterGrade, ProjectDefinition, Stack, Submission,
    grade::{Bundle, check_requirements},
    grade_project, grade_project_async,
};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(path)
}

fn beginner_project() -> ProjectDefinition {
    ProjectDefinition::from_json_file(fixture("projects/frontend-beginner.json"))
        .expect("load beginner project")
}

fn read(path: &str) -> String {
    std::fs::read_to_string(fixture(path)).expect("read fixture file")
}

fn beginner_submission() -> Submission {
    Submission::new([
        ("index.html", read("frontend-basic/index.html")),
        ("css/style.css", read("frontend-basic/css/style.css")),
        ("js/main.js", read("frontend-basic/js/main.js")),
    ])
}

fn criterion(category: &str, max_points: u32) -> GradingCriterion {
    GradingCriterion::builder()
        .id(category.to_lowercase())
        .category(category)
        .max_points(max_points)
        .build()
}

fn score_of(result: &gradewise::GradingResult, category: &str) -> f64 {
    result
        .feedback
        .iter()
        .find(|item| item.category == category)
        .map(|item| item.score)
        .expect("category present in feedback")
}

#[test]
fn frontend_beginner_scores_well() {
    let result =
        grade_project(&beginner_project(), &beginner_submission()).expect("grade beginner");

    assert_eq!(result.max_score, 100);
    assert_eq!(result.feedback.len(), 5);
    assert!(score_of(&result, "Design & UI") >= 15.0);
    assert!(score_of(&result, "Functionality") >= 15.0);
    assert!(result.overall_grade >= LetterGrade::C, "got {}", result.overall_grade);
}

#[test]
fn feedback_follows_rubric_order() {
    let result =
        grade_project(&beginner_project(), &beginner_submission()).expect("grade beginner");
    let categories: Vec<&str> = result.feedback.iter().map(|i| i.category.as_str()).collect();

    assert_eq!(
        categories,
        ["Design & UI", "Functionality", "Code Quality", "Responsiveness", "Documentation"]
    );
    assert!(result.feedback.iter().all(|item| (3..=6).contains(&item.suggestions.len())));
}

#[test]
fn near_empty_files_lower_the_total_without_rejecting() {
    let project = beginner_project();
    let full = beginner_submission();
    let mut padded = full.clone();
    padded.files.insert("js/util.js".into(), String::new());
    padded.files.insert("about.html".into(), "  <p>soon</p>  ".into());

    let full_result = grade_project(&project, &full).expect("grade full");
    let padded_result = grade_project(&project, &padded).expect("empty files are not fatal");

    assert!(padded_result.total_score < full_result.total_score);
    let check = check_requirements(&project, &Bundle::new(&padded.files));
    assert_eq!(check.empty_files, ["about.html", "js/util.js"]);
}

#[test]
fn empty_submission_is_rejected() {
    let err = grade_project(&beginner_project(), &Submission::default()).unwrap_err();
    assert_eq!(err, GradingError::InvalidSubmission);
}

#[test]
fn malformed_repository_url_is_rejected() {
    let submission = beginner_submission().with_repository_url("not-a-url");
    let err = grade_project(&beginner_project(), &submission).unwrap_err();

    assert_eq!(err, GradingError::InvalidRepositoryUrl("not-a-url".into()));
    assert!(err.to_string().contains("not-a-url"));
}

#[test]
fn valid_links_are_accepted_and_not_graded() {
    let plain = grade_project(&beginner_project(), &beginner_submission()).expect("plain");
    let linked = grade_project(
        &beginner_project(),
        &beginner_submission()
            .with_repository_url("https://github.com/student/weather-board/")
            .with_deployed_url("https://weather.example.org"),
    )
    .expect("linked");

    assert_eq!(plain, linked);
}

#[test]
fn grading_is_deterministic() {
    let project = beginner_project();
    let submission = beginner_submission();

    let first = grade_project(&project, &submission).expect("first");
    let second = grade_project(&project, &submission).expect("second");
    assert_eq!(first, second);
}

#[test]
fn scores_stay_within_budgets() {
    let project = ProjectDefinition::builder()
        .stack(Stack::Backend)
        .criteria([
            criterion("API", 10),
            criterion("Security", 10),
            criterion("Database", 10),
            criterion("Design", 10),
            criterion("Something Else", 10),
        ])
        .build();
    let bundles = [
        Submission::new([("notes.txt", "x")]),
        beginner_submission(),
        Submission::new([(
            "server.js",
            "const express = require('express');\nconst helmet = require('helmet');\n\
             const jwt = require('jsonwebtoken');\nconst mongoose = require('mongoose');\n\
             const User = mongoose.model('User', new Schema({ name: String }));\n\
             app.get('/users', async (req, res) => res.json(await User.find()));\n\
             app.post('/users', async (req, res) => res.status(201).json(await User.create(req.body)));\n\
             app.delete('/users/:id', async (req, res) => res.status(404).end());\n",
        )]),
    ];

    for submission in bundles {
        let result = grade_project(&project, &submission).expect("grade");
        assert!(result.total_score <= result.max_score);
        for item in &result.feedback {
            assert!(item.score >= 0.0 && item.score <= item.max_score, "{item:?}");
        }
    }
}

#[test]
fn adding_a_signal_never_lowers_a_score() {
    let project = ProjectDefinition::builder()
        .criteria([criterion("Design", 25), criterion("Responsiveness", 15)])
        .build();
    let html = "<!DOCTYPE html>\n<html>\n  <body>\n    <main>Portfolio landing page</main>\n  </body>\n</html>\n";
    let base_css = "body {\n  display: flex;\n  color: #222222;\n  margin: 0 auto;\n}\n";
    let with_media = format!("{base_css}@media (max-width: 40rem) {{\n  body {{ display: block; }}\n}}\n");

    let before = grade_project(
        &project,
        &Submission::new([("index.html", html), ("style.css", base_css)]),
    )
    .expect("before");
    let after = grade_project(
        &project,
        &Submission::new([("index.html", html.to_string()), ("style.css", with_media)]),
    )
    .expect("after");

    for (b, a) in before.feedback.iter().zip(&after.feedback) {
        assert!(a.score >= b.score, "{} dropped from {} to {}", a.category, b.score, a.score);
    }
    assert!(after.total_score >= before.total_score);
}

#[test]
fn backend_without_routes_is_halved() {
    let project = ProjectDefinition::builder()
        .stack(Stack::Backend)
        .criteria([criterion("Database", 20)])
        .build();
    let server = "const mongoose = require('mongoose');\n\
                  const Note = mongoose.model('Note', new Schema({ body: String }));\n\
                  module.exports = async () => Note.find();\n";
    let package = r#"{ "name": "notes-api", "version": "1.0.0", "main": "server.js" }"#;
    let submission = Submission::new([("server.js", server), ("package.json", package)]);

    let check = check_requirements(&project, &Bundle::new(&submission.files));
    assert!(check.missing_files.is_empty());
    assert_eq!(check.structural_penalty, 0.5);

    let result = grade_project(&project, &submission).expect("grade backend");
    // connection + schema + crud = 20 points, halved
    assert_eq!(result.total_score, 10);
}

#[test]
fn fullstack_has_no_structural_penalty() {
    let project = ProjectDefinition::builder()
        .stack(Stack::Fullstack)
        .criteria([criterion("Code Quality", 10)])
        .build();
    let submission = Submission::new([("notes.txt", "a".repeat(80))]);
    let check = check_requirements(&project, &Bundle::new(&submission.files));

    assert_eq!(check.structural_penalty, 1.0);
    assert_eq!(
        check.missing_files,
        ["index.html", "css/style.css", "js/main.js", "server.js"]
    );
    assert_eq!(check.multiplier, 0.5);
}

#[test]
fn similar_file_names_count_as_present() {
    let project = ProjectDefinition::builder()
        .criteria([criterion("Design", 10)])
        .build();
    let body = "<!DOCTYPE html><html><body>A reasonably long page body for testing.</body></html>";
    let submission = Submission::new([
        ("public/index.htm", body.to_string()),
        ("styles/Style.scss", format!("/* theme */ body {{ color: red; }} {}", "x".repeat(40))),
        ("src/main.ts", format!("// entry\nconsole.log('hello world'); {}", "y".repeat(40))),
    ]);

    let check = check_requirements(&project, &Bundle::new(&submission.files));
    assert!(check.missing_files.is_empty(), "{:?}", check.missing_files);
    assert_eq!(check.multiplier, 1.0);
}

#[test]
fn zero_point_rubric_grades_f() {
    let project = ProjectDefinition::builder()
        .criteria([criterion("Design", 0)])
        .build();
    let result = grade_project(&project, &beginner_submission()).expect("grade");

    assert_eq!(result.total_score, 0);
    assert_eq!(result.max_score, 0);
    assert_eq!(result.overall_grade, LetterGrade::F);
}

#[tokio::test]
async fn async_grading_matches_sync() {
    let project = beginner_project();
    let submission = beginner_submission();

    let sync = grade_project(&project, &submission).expect("sync");
    let async_result = grade_project_async(project, submission)
        .await
        .expect("async");
    assert_eq!(sync, async_result);
}

#[tokio::test]
async fn async_grading_surfaces_domain_errors() {
    let err = grade_project_async(beginner_project(), Submission::default())
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<GradingError>(),
        Some(&GradingError::InvalidSubmission)
    );
}

#[test]
fn huge_budgets_do_not_overflow() {
    let project = ProjectDefinition::builder()
        .criteria([
            criterion("Documentation", 3_000_000_000),
            criterion("Testing", 3_000_000_000),
        ])
        .build();

    let result = grade_project(&project, &beginner_submission()).expect("grade");

    assert_eq!(result.max_score, 6_000_000_000);
    assert!(result.total_score <= result.max_score);
    assert!(result.total_score > u64::from(u32::MAX) / 2, "got {}", result.total_score);
}

#[test]
fn blank_lines_only_file_is_graded() {
    let project = ProjectDefinition::builder()
        .criteria([criterion("Documentation", 10)])
        .build();
    let submission = Submission::new([("notes.txt", "\n".repeat(10))]);

    let result = grade_project(&project, &submission).expect("blank file is not fatal");

    assert_eq!(result.total_score, 0);
    assert_eq!(result.max_score, 10);
    assert_eq!(result.overall_grade, LetterGrade::F);
}

#[test]
fn tiny_required_files_are_penalized() {
    let project = ProjectDefinition::builder()
        .criteria([criterion("Code Quality", 20)])
        .build();
    let submission = Submission::new([
        ("index.html", "<p>hi</p>"),
        ("css/style.css", "a{}"),
        ("js/main.js", "x = 1"),
    ]);

    let check = check_requirements(&project, &Bundle::new(&submission.files));
    assert!(check.missing_files.is_empty());
    assert_eq!(check.empty_files.len(), 3);

    let result = grade_project(&project, &submission).expect("tiny files are not fatal");
    let raw: f64 = result.feedback.iter().map(|item| item.score).sum();
    assert!(raw > 0.0);
    assert!((result.total_score as f64) < raw, "{} vs {raw}", result.total_score);
}
