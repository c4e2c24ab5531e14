use anyhow::Result;
use serde_json::json;
use tally_core::case::evaluate;
use tally_core::manifest::parse_manifest;
use tally_core::model::CaseStatus;
use tally_core::submission::Submission;
use tally_fixtures::{
    passing_exercise, reference_submission, GREETING_SYMBOL, PASSING_MANIFEST, PASSING_MODULE,
};

#[test]
fn reference_submission_passes() {
    let report = evaluate(&passing_exercise(), &reference_submission());
    assert_eq!(report.status, CaseStatus::Pass);
    assert_eq!(report.message, "ok");
}

#[test]
fn wrong_greeting_fails_with_mismatch_message() {
    let submission = Submission::builder()
        .module(PASSING_MODULE, |m| {
            m.function0(GREETING_SYMBOL, || Ok(json!("hello world")))
        })
        .build();

    let report = evaluate(&passing_exercise(), &submission);
    assert_eq!(report.status, CaseStatus::Fail);
    assert!(report.message.contains("Hello world!"));
    assert!(report.message.contains("hello world"));
}

#[test]
fn missing_greeting_symbol_reports_error_not_failure() {
    let submission = Submission::builder()
        .module(PASSING_MODULE, |m| m)
        .build();

    let report = evaluate(&passing_exercise(), &submission);
    assert_eq!(report.status, CaseStatus::Error);
    assert!(report.message.contains("symbol not found"));
    assert!(report.message.contains(GREETING_SYMBOL));
}

#[test]
fn missing_module_reports_error() {
    let report = evaluate(&passing_exercise(), &Submission::default());
    assert_eq!(report.status, CaseStatus::Error);
    assert!(report.message.contains("module not found"));
}

#[test]
fn manifest_matches_fixture() -> Result<()> {
    let case = parse_manifest(PASSING_MANIFEST)?.into_case()?;
    assert_eq!(case, passing_exercise());
    Ok(())
}
