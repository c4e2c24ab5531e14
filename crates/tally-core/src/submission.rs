//! Student submission model.
//!
//! A submission is an immutable set of modules keyed by dotted path
//! (`src.passing_exercise`), each holding named symbols. Symbols are either
//! callables with a declared arity or plain values; case evaluation
//! references them without taking ownership.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::loader::{self, ResolveError};

/// Callable body of a function symbol.
pub type SymbolFn = Arc<dyn Fn(&[Value]) -> Result<Value, InvokeError> + Send + Sync>;

/// Invocation errors. All of these surface as a test *error*, not a plain
/// assertion failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvokeError {
    #[error("{symbol} takes {expected} argument(s), {got} given")]
    WrongArity {
        symbol: String,
        expected: usize,
        got: usize,
    },

    #[error("{symbol} is not callable")]
    NotCallable { symbol: String },

    #[error("{symbol} failed: {message}")]
    Failed { symbol: String, message: String },
}

#[derive(Clone)]
enum SymbolKind {
    Function { arity: usize, body: SymbolFn },
    Value(Value),
}

/// A symbol resolved from a submission module.
#[derive(Clone)]
pub struct LoadedSymbol {
    module: String,
    name: String,
    kind: SymbolKind,
}

impl LoadedSymbol {
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_callable(&self) -> bool {
        matches!(self.kind, SymbolKind::Function { .. })
    }

    /// Declared arity, `None` for plain values.
    pub fn arity(&self) -> Option<usize> {
        match &self.kind {
            SymbolKind::Function { arity, .. } => Some(*arity),
            SymbolKind::Value(_) => None,
        }
    }

    /// The underlying value for non-callable symbols.
    pub fn as_value(&self) -> Option<&Value> {
        match &self.kind {
            SymbolKind::Value(v) => Some(v),
            SymbolKind::Function { .. } => None,
        }
    }

    /// Invoke with the given arguments, checking arity first.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, InvokeError> {
        match &self.kind {
            SymbolKind::Value(_) => Err(InvokeError::NotCallable {
                symbol: self.name.clone(),
            }),
            SymbolKind::Function { arity, body } => {
                if args.len() != *arity {
                    return Err(InvokeError::WrongArity {
                        symbol: self.name.clone(),
                        expected: *arity,
                        got: args.len(),
                    });
                }
                body(args)
            }
        }
    }

    /// Zero-argument invocation.
    pub fn invoke0(&self) -> Result<Value, InvokeError> {
        self.invoke(&[])
    }
}

impl std::fmt::Debug for LoadedSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            SymbolKind::Function { arity, .. } => f
                .debug_struct("LoadedSymbol")
                .field("module", &self.module)
                .field("name", &self.name)
                .field("arity", arity)
                .finish(),
            SymbolKind::Value(v) => f
                .debug_struct("LoadedSymbol")
                .field("module", &self.module)
                .field("name", &self.name)
                .field("value", v)
                .finish(),
        }
    }
}

/// One module of a submission.
#[derive(Debug, Clone, Default)]
pub struct Module {
    symbols: BTreeMap<String, LoadedSymbol>,
}

impl Module {
    pub fn symbol(&self, name: &str) -> Option<&LoadedSymbol> {
        self.symbols.get(name)
    }

    pub fn symbol_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }
}

/// A student submission, frozen after build.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    modules: BTreeMap<String, Module>,
}

impl Submission {
    pub fn builder() -> SubmissionBuilder {
        SubmissionBuilder::default()
    }

    pub fn module(&self, path: &str) -> Option<&Module> {
        self.modules.get(path)
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Resolve a symbol by dotted module path and name.
    pub fn load(&self, module_path: &str, symbol: &str) -> Result<&LoadedSymbol, ResolveError> {
        loader::load(self, module_path, symbol)
    }
}

#[derive(Debug, Default)]
pub struct SubmissionBuilder {
    modules: BTreeMap<String, Module>,
}

impl SubmissionBuilder {
    /// Add (or extend) a module at the given dotted path.
    pub fn module(
        mut self,
        path: impl Into<String>,
        build: impl FnOnce(ModuleBuilder) -> ModuleBuilder,
    ) -> Self {
        let path = path.into();
        let existing = self.modules.remove(&path).unwrap_or_default();
        let built = build(ModuleBuilder {
            path: path.clone(),
            symbols: existing.symbols,
        });
        self.modules.insert(path, Module {
            symbols: built.symbols,
        });
        self
    }

    pub fn build(self) -> Submission {
        Submission {
            modules: self.modules,
        }
    }
}

#[derive(Debug)]
pub struct ModuleBuilder {
    path: String,
    symbols: BTreeMap<String, LoadedSymbol>,
}

impl ModuleBuilder {
    /// Register a zero-argument function.
    pub fn function0<F>(self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> Result<Value, InvokeError> + Send + Sync + 'static,
    {
        self.function(name, 0, move |_args| body())
    }

    /// Register a function with the given arity.
    pub fn function<F>(mut self, name: impl Into<String>, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, InvokeError> + Send + Sync + 'static,
    {
        let name = name.into();
        self.symbols.insert(
            name.clone(),
            LoadedSymbol {
                module: self.path.clone(),
                name,
                kind: SymbolKind::Function {
                    arity,
                    body: Arc::new(body),
                },
            },
        );
        self
    }

    /// Register a plain (non-callable) value.
    pub fn value(mut self, name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        self.symbols.insert(
            name.clone(),
            LoadedSymbol {
                module: self.path.clone(),
                name,
                kind: SymbolKind::Value(value),
            },
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn greeting_submission() -> Submission {
        Submission::builder()
            .module("src.passing_exercise", |m| {
                m.function0("hello", || Ok(json!("Hello world!")))
            })
            .build()
    }

    #[test]
    fn test_invoke0_returns_value() {
        let submission = greeting_submission();
        let hello = submission.load("src.passing_exercise", "hello").unwrap();
        assert_eq!(hello.invoke0().unwrap(), json!("Hello world!"));
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let submission = greeting_submission();
        let hello = submission.load("src.passing_exercise", "hello").unwrap();
        let err = hello.invoke(&[json!(1)]).unwrap_err();
        assert_eq!(
            err,
            InvokeError::WrongArity {
                symbol: "hello".into(),
                expected: 0,
                got: 1,
            }
        );
    }

    #[test]
    fn test_value_symbol_is_not_callable() {
        let submission = Submission::builder()
            .module("src.constants", |m| m.value("answer", json!(42)))
            .build();
        let answer = submission.load("src.constants", "answer").unwrap();
        assert!(!answer.is_callable());
        assert_eq!(answer.as_value(), Some(&json!(42)));
        assert_eq!(
            answer.invoke0().unwrap_err(),
            InvokeError::NotCallable {
                symbol: "answer".into()
            }
        );
    }

    #[test]
    fn test_function_with_arguments() {
        let submission = Submission::builder()
            .module("src.math", |m| {
                m.function("add", 2, |args| {
                    let a = args[0].as_i64().unwrap_or(0);
                    let b = args[1].as_i64().unwrap_or(0);
                    Ok(json!(a + b))
                })
            })
            .build();
        let add = submission.load("src.math", "add").unwrap();
        assert_eq!(add.arity(), Some(2));
        assert_eq!(add.invoke(&[json!(2), json!(3)]).unwrap(), json!(5));
    }

    #[test]
    fn test_module_extends_on_repeat() {
        let submission = Submission::builder()
            .module("src.m", |m| m.value("a", json!(1)))
            .module("src.m", |m| m.value("b", json!(2)))
            .build();
        let module = submission.module("src.m").unwrap();
        assert_eq!(module.symbol_names().count(), 2);
    }

    #[test]
    fn test_failed_invocation_carries_message() {
        let submission = Submission::builder()
            .module("src.broken", |m| {
                m.function0("hello", || {
                    Err(InvokeError::Failed {
                        symbol: "hello".into(),
                        message: "division by zero".into(),
                    })
                })
            })
            .build();
        let hello = submission.load("src.broken", "hello").unwrap();
        let err = hello.invoke0().unwrap_err();
        assert!(err.to_string().contains("division by zero"));
    }
}
