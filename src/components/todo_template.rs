//! Todo Template Component
//!
//! Outer card every other todo component renders inside.

use leptos::prelude::*;

#[component]
pub fn TodoTemplate(children: Children) -> impl IntoView {
    view! {
        <div class="todo-template">{children()}</div>
    }
}
