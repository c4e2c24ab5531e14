//! Exercise case definitions and single-shot evaluation.
//!
//! Evaluation is a single synchronous pass with no shared state: every
//! failure mode folds into the returned report, so it never panics and
//! never returns `Result`.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::loader;
use crate::model::{CaseReport, ExerciseId};
use crate::submission::Submission;

/// What a case checks against the student submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Invoke a zero-argument callable and compare its return value for
    /// exact equality against a literal.
    ReturnsLiteral {
        module: String,
        symbol: String,
        expected: Value,
    },

    /// Unconditional failure, no comparison performed.
    AlwaysFails {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

/// One test case bound to one exercise identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCase {
    pub id: ExerciseId,
    pub check: Check,
}

/// Evaluate a case against a submission, exactly once.
///
/// Resolution and invocation errors come back as status `Error`; an
/// expected-vs-actual mismatch or an unconditional failure marker comes
/// back as status `Fail`.
pub fn evaluate(case: &ExerciseCase, submission: &Submission) -> CaseReport {
    debug!(exercise = %case.id, "evaluating case");
    let start = Instant::now();
    let report = run_check(case, submission);
    report.with_duration_ms(start.elapsed().as_millis() as u64)
}

fn run_check(case: &ExerciseCase, submission: &Submission) -> CaseReport {
    match &case.check {
        Check::AlwaysFails { reason } => CaseReport::fail(
            case.id.clone(),
            reason
                .clone()
                .unwrap_or_else(|| "failed unconditionally".to_string()),
        ),

        Check::ReturnsLiteral {
            module,
            symbol,
            expected,
        } => {
            let callable = match loader::load(submission, module, symbol) {
                Ok(resolved) => resolved,
                Err(e) => {
                    return CaseReport::error(case.id.clone(), e.to_string()).with_details(json!({
                        "resolve": { "module": module, "symbol": symbol }
                    }));
                }
            };

            let actual = match callable.invoke0() {
                Ok(value) => value,
                Err(e) => return CaseReport::error(case.id.clone(), e.to_string()),
            };

            if actual == *expected {
                CaseReport::pass(case.id.clone())
            } else {
                CaseReport::fail(
                    case.id.clone(),
                    format!("expected {expected}, got {actual}"),
                )
                .with_details(json!({ "expected": expected, "actual": actual }))
            }
        }
    }
}
