//! Points registration.
//!
//! Associates a test-case grouping with the exercise identifier consumed by
//! grading aggregation. Pure metadata: registration has no runtime behavior
//! beyond recording the binding.

use std::collections::BTreeMap;
use std::sync::Mutex;

use lazy_static::lazy_static;
use tracing::debug;

use crate::model::ExerciseId;

lazy_static! {
    static ref GLOBAL: PointsRegistry = PointsRegistry::new();
}

/// Registration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointsError {
    /// A grouping may carry exactly one exercise identifier.
    #[error("group {group} is already bound to {existing}, cannot rebind to {attempted}")]
    Conflict {
        group: String,
        existing: ExerciseId,
        attempted: ExerciseId,
    },
}

/// Registry of grouping-to-identifier bindings.
#[derive(Debug, Default)]
pub struct PointsRegistry {
    bindings: Mutex<BTreeMap<String, ExerciseId>>,
}

impl PointsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-global registry, for fixtures that register at setup time.
    pub fn global() -> &'static PointsRegistry {
        &GLOBAL
    }

    /// Bind a grouping to an exercise identifier.
    ///
    /// Re-registering an identical pair is a no-op; binding the same group
    /// to a different identifier is rejected.
    pub fn register(&self, group: impl Into<String>, id: ExerciseId) -> Result<(), PointsError> {
        let group = group.into();
        let mut bindings = self.bindings.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = bindings.get(&group) {
            if *existing != id {
                return Err(PointsError::Conflict {
                    group,
                    existing: existing.clone(),
                    attempted: id,
                });
            }
            return Ok(());
        }
        debug!(group = %group, exercise = %id, "registered points");
        bindings.insert(group, id);
        Ok(())
    }

    /// Identifier bound to a grouping, if any.
    pub fn points_for(&self, group: &str) -> Option<ExerciseId> {
        let bindings = self.bindings.lock().unwrap_or_else(|e| e.into_inner());
        bindings.get(group).cloned()
    }

    /// Groupings bound to an identifier.
    pub fn groups_for(&self, id: &ExerciseId) -> Vec<String> {
        let bindings = self.bindings.lock().unwrap_or_else(|e| e.into_inner());
        bindings
            .iter()
            .filter(|(_, bound)| *bound == id)
            .map(|(group, _)| group.clone())
            .collect()
    }

    /// All bindings, sorted by grouping name.
    pub fn entries(&self) -> Vec<(String, ExerciseId)> {
        let bindings = self.bindings.lock().unwrap_or_else(|e| e.into_inner());
        bindings
            .iter()
            .map(|(group, id)| (group.clone(), id.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        let bindings = self.bindings.lock().unwrap_or_else(|e| e.into_inner());
        bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all bindings. Intended for tests that share the global registry.
    pub fn clear(&self) {
        let mut bindings = self.bindings.lock().unwrap_or_else(|e| e.into_inner());
        bindings.clear();
    }
}
