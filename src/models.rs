//! Frontend Models
//!
//! Checklist entries and the list a fresh session starts with.

use serde::{Deserialize, Serialize};

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique for the lifetime of the list, never reused
    pub id: u32,
    /// Set once at creation
    pub text: String,
    pub done: bool,
}

impl Todo {
    /// New, not yet done entry
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }
}

/// Seed list every session starts from when no other seed is given
pub fn initial_todos() -> Vec<Todo> {
    vec![
        Todo { id: 1, text: "Create the project".to_string(), done: true },
        Todo { id: 2, text: "Style the components".to_string(), done: true },
        Todo { id: 3, text: "Build the context".to_string(), done: false },
        Todo { id: 4, text: "Implement the features".to_string(), done: false },
    ]
}
