//! Error Types
//!
//! The two ways the todo core can refuse a request.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// A consumer read a channel outside any `TodoProvider`
    #[error("Cannot find TodoProvider (no {0} in context)")]
    ProviderMissing(&'static str),
    /// A raw command named a type the store does not handle, or did not
    /// fit the variant it named
    #[error("Unhandled action type: {action_type} ({reason})")]
    UnhandledCommand { action_type: String, reason: String },
}

pub type TodoResult<T> = Result<T, TodoError>;
