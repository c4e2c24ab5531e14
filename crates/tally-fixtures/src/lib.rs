//! Course exercise fixtures consumed by an external grading harness.
//!
//! Two self-contained exercises: one that passes against the reference
//! submission, one defined to always fail. Each is independent; the harness
//! loads, evaluates, and scores them separately.

use serde_json::json;
use tally_core::case::{Check, ExerciseCase};
use tally_core::model::ExerciseId;
use tally_core::points::{PointsError, PointsRegistry};
use tally_core::submission::Submission;

/// Module path the passing exercise resolves against.
pub const PASSING_MODULE: &str = "src.passing_exercise";
/// Symbol the passing exercise invokes.
pub const GREETING_SYMBOL: &str = "hello";
/// Exact greeting the passing exercise expects.
pub const GREETING: &str = "Hello world!";

/// Shipped manifest for the passing exercise.
pub const PASSING_MANIFEST: &str = include_str!("../manifests/passing_exercise.yml");
/// Shipped manifest for the failing exercise.
pub const FAILING_MANIFEST: &str = include_str!("../manifests/failing_exercise.yml");

/// Exercise A: the student's zero-argument `hello` must return exactly
/// `"Hello world!"`.
pub fn passing_exercise() -> ExerciseCase {
    ExerciseCase {
        id: exercise_id("1.passing_exercise"),
        check: Check::ReturnsLiteral {
            module: PASSING_MODULE.to_string(),
            symbol: GREETING_SYMBOL.to_string(),
            expected: json!(GREETING),
        },
    }
}

/// Exercise B: fails regardless of the submission; there is no code path
/// to pass.
pub fn failing_exercise() -> ExerciseCase {
    ExerciseCase {
        id: exercise_id("1.failing_exercise"),
        check: Check::AlwaysFails { reason: None },
    }
}

/// Bind both exercises to their test-case groupings.
pub fn register_points(registry: &PointsRegistry) -> Result<(), PointsError> {
    registry.register("PassingExercise", exercise_id("1.passing_exercise"))?;
    registry.register("FailingExercise", exercise_id("1.failing_exercise"))?;
    Ok(())
}

/// Reference solution for the passing exercise.
pub fn reference_submission() -> Submission {
    Submission::builder()
        .module(PASSING_MODULE, |m| {
            m.function0(GREETING_SYMBOL, || Ok(json!(GREETING)))
        })
        .build()
}

// Fixture identifiers are authoring-time constants.
fn exercise_id(raw: &str) -> ExerciseId {
    ExerciseId::parse(raw).expect("fixture identifiers are valid")
}
