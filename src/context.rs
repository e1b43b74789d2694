//! Todo Context
//!
//! Shares the todo list with display components via the Leptos Context API.
//!
//! State, dispatch and next-id are provided as three separate contexts so a
//! component that only dispatches never subscribes to the list itself.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{TodoError, TodoResult};
use crate::models::{initial_todos, Todo};
use crate::next_id::IdAllocator;
use crate::store::{
    store_apply, store_remaining, store_todos, store_todos_untracked, TodoAction, TodoState,
    TodoStore,
};

/// Read side of the todo list
#[derive(Clone, Copy)]
pub struct TodoStateReader {
    store: TodoStore,
}

impl TodoStateReader {
    /// Current list; subscribes the calling scope
    pub fn todos(&self) -> Vec<Todo> {
        store_todos(&self.store)
    }

    /// Current list without subscribing
    pub fn todos_untracked(&self) -> Vec<Todo> {
        store_todos_untracked(&self.store)
    }

    /// Number of todos not yet done; subscribes the calling scope
    pub fn remaining(&self) -> usize {
        store_remaining(&self.store)
    }
}

/// Write side of the todo list
#[derive(Clone, Copy)]
pub struct TodoDispatch {
    store: TodoStore,
}

impl TodoDispatch {
    /// Apply a command and publish the new list to state readers
    pub fn dispatch(&self, action: TodoAction) {
        log!("[STORE] {} {:?}", action.action_type(), action);
        store_apply(&self.store, &action);
    }

    /// Decode a command from its JSON wire shape, then dispatch it
    pub fn dispatch_json(&self, raw: &str) -> TodoResult<()> {
        match TodoAction::from_json(raw) {
            Ok(action) => {
                self.dispatch(action);
                Ok(())
            }
            Err(err) => {
                warn!("[STORE] Rejected command {}: {}", raw, err);
                Err(err)
            }
        }
    }
}

/// Id source for new todos
///
/// Backed by a `StoredValue`, so moving the counter notifies nobody.
#[derive(Clone, Copy)]
pub struct NextTodoId {
    allocator: StoredValue<IdAllocator>,
}

impl NextTodoId {
    /// Id the next `take` will return, `None` once ids are exhausted
    pub fn peek(&self) -> Option<u32> {
        self.allocator.with_value(|alloc| alloc.peek())
    }

    /// Read and advance in one step
    pub fn take(&self) -> Option<u32> {
        let mut id = None;
        self.allocator.update_value(|alloc| id = alloc.allocate());
        if id.is_none() {
            warn!("[CONTEXT] Todo ids exhausted");
        }
        id
    }
}

/// All three handles of one session
#[derive(Clone, Copy)]
pub struct TodoSession {
    pub state: TodoStateReader,
    pub dispatch: TodoDispatch,
    pub next_id: NextTodoId,
}

/// Create the store and the id allocator and provide them to the current
/// owner's descendants.
pub fn provide_todo_context(seed: Vec<Todo>) -> TodoSession {
    let allocator = IdAllocator::seeded_from(&seed);
    log!("[CONTEXT] Session with {} todos, next id {:?}", seed.len(), allocator.peek());

    let store = Store::new(TodoState::new(seed));
    let session = TodoSession {
        state: TodoStateReader { store },
        dispatch: TodoDispatch { store },
        next_id: NextTodoId { allocator: StoredValue::new(allocator) },
    };

    provide_context(session.state);
    provide_context(session.dispatch);
    provide_context(session.next_id);
    session
}

pub fn try_use_todo_state() -> TodoResult<TodoStateReader> {
    use_context::<TodoStateReader>().ok_or(TodoError::ProviderMissing("TodoState"))
}

pub fn try_use_todo_dispatch() -> TodoResult<TodoDispatch> {
    use_context::<TodoDispatch>().ok_or(TodoError::ProviderMissing("TodoDispatch"))
}

pub fn try_use_todo_next_id() -> TodoResult<NextTodoId> {
    use_context::<NextTodoId>().ok_or(TodoError::ProviderMissing("TodoNextId"))
}

// Component-facing accessors. A missing provider is a wiring mistake, so
// these panic instead of returning an error.

pub fn use_todo_state() -> TodoStateReader {
    try_use_todo_state().unwrap_or_else(|err| panic!("{err}"))
}

pub fn use_todo_dispatch() -> TodoDispatch {
    try_use_todo_dispatch().unwrap_or_else(|err| panic!("{err}"))
}

pub fn use_todo_next_id() -> NextTodoId {
    try_use_todo_next_id().unwrap_or_else(|err| panic!("{err}"))
}

/// Provides a todo session to its children
#[component]
pub fn TodoProvider(
    /// Starting list; defaults to [`initial_todos`]
    #[prop(optional)]
    seed: Option<Vec<Todo>>,
    children: Children,
) -> impl IntoView {
    provide_todo_context(seed.unwrap_or_else(initial_todos));
    children()
}
