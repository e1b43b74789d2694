//! Todo Context UI
//!
//! Checklist state shared with display components through Leptos context:
//! - models: todo entity and seed list
//! - store: commands, reducer and reactive state
//! - next_id: id allocator
//! - context: provider and per-channel accessors

pub mod app;
pub mod components;
pub mod context;
pub mod error;
pub mod models;
pub mod next_id;
pub mod store;

pub use context::{
    provide_todo_context, try_use_todo_dispatch, try_use_todo_next_id, try_use_todo_state,
    use_todo_dispatch, use_todo_next_id, use_todo_state, NextTodoId, TodoDispatch, TodoProvider,
    TodoSession, TodoStateReader,
};
pub use error::{TodoError, TodoResult};
pub use models::{initial_todos, Todo};
pub use store::{todo_reducer, TodoAction};
