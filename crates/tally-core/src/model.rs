//! Core model types: exercise identifiers, case statuses, outcome reports.

use serde::{Deserialize, Serialize};

/// Invalid exercise identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid exercise identifier: {id} - {reason}")]
pub struct IdError {
    pub id: String,
    pub reason: String,
}

/// Points identifier attributing earned credit to one exercise during
/// aggregation, e.g. `1.passing_exercise`.
///
/// Assigned at authoring time and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseId(String);

impl ExerciseId {
    /// Parse an identifier, validating its shape.
    pub fn parse(raw: &str) -> Result<Self, IdError> {
        let invalid = |reason: &str| IdError {
            id: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("identifier cannot be empty"));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(invalid(
                "identifier may only contain letters, digits, dots, underscores, and hyphens",
            ));
        }
        if raw.split('.').any(str::is_empty) {
            return Err(invalid("identifier cannot have empty dot-separated segments"));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ExerciseId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ExerciseId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ExerciseId> for String {
    fn from(id: ExerciseId) -> Self {
        id.0
    }
}

/// Outcome of a single case evaluation.
///
/// `Fail` is an assertion failure (expected-vs-actual mismatch or an
/// unconditional failure marker); `Error` means the check could not be
/// carried out at all (unresolved symbol, bad invocation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pass,
    Fail,
    Error,
}

/// Per-case outcome handed to the harness's reporting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub exercise: ExerciseId,
    pub status: CaseStatus,
    pub message: String,
    pub details: serde_json::Value,
    pub duration_ms: Option<u64>,
}

impl CaseReport {
    pub fn pass(exercise: ExerciseId) -> Self {
        Self {
            exercise,
            status: CaseStatus::Pass,
            message: "ok".into(),
            details: serde_json::json!({}),
            duration_ms: None,
        }
    }

    pub fn fail(exercise: ExerciseId, message: impl Into<String>) -> Self {
        Self {
            exercise,
            status: CaseStatus::Fail,
            message: message.into(),
            details: serde_json::json!({}),
            duration_ms: None,
        }
    }

    pub fn error(exercise: ExerciseId, message: impl Into<String>) -> Self {
        Self {
            exercise,
            status: CaseStatus::Error,
            message: message.into(),
            details: serde_json::json!({}),
            duration_ms: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Pass
    }
}
