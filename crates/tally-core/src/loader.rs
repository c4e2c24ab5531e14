//! Symbol resolution from student submissions.
//!
//! Resolution is an explicit lookup by dotted module path returning a
//! typed result. Lookup failures are hard errors, surfaced by the
//! evaluator as a test *error* rather than a skipped outcome.

use tracing::debug;

use crate::submission::{LoadedSymbol, Submission};

/// Resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No module at the given dotted path.
    #[error("module not found: {module}")]
    ModuleNotFound { module: String },

    /// The module exists but does not expose the symbol.
    #[error("symbol not found: {module}.{symbol}{hint}", hint = .suggestion
        .as_ref()
        .map(|s| format!(" (closest match: {s})"))
        .unwrap_or_default())]
    SymbolNotFound {
        module: String,
        symbol: String,
        suggestion: Option<String>,
    },
}

/// Resolve `symbol` from the submission module at `module_path`.
pub fn load<'a>(
    submission: &'a Submission,
    module_path: &str,
    symbol: &str,
) -> Result<&'a LoadedSymbol, ResolveError> {
    let module = submission
        .module(module_path)
        .ok_or_else(|| ResolveError::ModuleNotFound {
            module: module_path.to_string(),
        })?;

    match module.symbol(symbol) {
        Some(resolved) => {
            debug!(module = module_path, symbol, "resolved symbol");
            Ok(resolved)
        }
        None => Err(ResolveError::SymbolNotFound {
            module: module_path.to_string(),
            symbol: symbol.to_string(),
            suggestion: closest_symbol(symbol, module.symbol_names()),
        }),
    }
}

// Threshold for suggestion. 0.55 is a reasonable heuristic.
const SUGGESTION_THRESHOLD: f64 = 0.55;

fn closest_symbol<'a>(needle: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut best: Option<(f64, &str)> = None;

    for candidate in candidates {
        let sim = strsim::normalized_levenshtein(needle, candidate);
        if sim >= SUGGESTION_THRESHOLD && best.map_or(true, |(b, _)| sim > b) {
            best = Some((sim, candidate));
        }
    }
    best.map(|(_, name)| name.to_string())
}
