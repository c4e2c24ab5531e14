//! Support library for course-exercise test fixtures.
//!
//! Provides the surface an exercise fixture depends on: a student-submission
//! model with symbol resolution by dotted module path, a points registry
//! binding exercise identifiers to test-case groupings, declarative checks
//! with single-shot evaluation, and YAML exercise manifests. Discovery,
//! scheduling, and result presentation belong to the external grading
//! harness.

pub mod case;
pub mod loader;
pub mod manifest;
pub mod model;
pub mod points;
pub mod submission;

pub use case::{evaluate, Check, ExerciseCase};
pub use loader::{load, ResolveError};
pub use model::{CaseReport, CaseStatus, ExerciseId};
pub use points::{PointsError, PointsRegistry};
pub use submission::{InvokeError, LoadedSymbol, Submission};
