//! Todo List Component
//!
//! Renders every todo in insertion order.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_todo_state;

#[component]
pub fn TodoList() -> impl IntoView {
    let state = use_todo_state();

    view! {
        <div class="todo-list">
            <For
                each=move || state.todos()
                key=|todo| (todo.id, todo.done)
                children=move |todo| {
                    view! { <TodoItem id=todo.id text=todo.text done=todo.done /> }
                }
            />
        </div>
    }
}
