//! Todo Item Component
//!
//! One row: check circle, text and a remove button.

use leptos::prelude::*;

use crate::context::use_todo_dispatch;
use crate::store::TodoAction;

/// A single todo row
///
/// Only dispatches, so it is never re-run by list changes. `TodoList` keys
/// rows on `(id, done)`: text is immutable, so a toggle is the only change a
/// row can see, and it rebuilds that one row with the new `done`.
#[component]
pub fn TodoItem(id: u32, text: String, done: bool) -> impl IntoView {
    let dispatch = use_todo_dispatch();

    view! {
        <div class="todo-item">
            <div
                class={if done { "check-circle done" } else { "check-circle" }}
                on:click=move |_| dispatch.dispatch(TodoAction::Toggle { id })
            >
                {done.then_some("✓")}
            </div>
            <div class={if done { "text done" } else { "text" }}>{text}</div>
            <div class="remove" on:click=move |_| dispatch.dispatch(TodoAction::Remove { id })>
                "×"
            </div>
        </div>
    }
}
