//! Todo App
//!
//! Composition root: every component that touches todos sits inside the
//! provider.

use leptos::prelude::*;

use crate::components::{TodoCreate, TodoHead, TodoList, TodoTemplate};
use crate::context::TodoProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <TodoProvider>
            <TodoTemplate>
                <TodoHead />
                <TodoList />
                <TodoCreate />
            </TodoTemplate>
        </TodoProvider>
    }
}
