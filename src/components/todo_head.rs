//! Todo Head Component
//!
//! Title plus the number of todos still open.

use leptos::prelude::*;

use crate::context::use_todo_state;

#[component]
pub fn TodoHead() -> impl IntoView {
    let state = use_todo_state();

    view! {
        <div class="todo-head">
            <h1>"Todos"</h1>
            <div class="tasks-left">{move || format!("{} tasks left", state.remaining())}</div>
        </div>
    }
}
