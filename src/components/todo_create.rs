//! Todo Create Component
//!
//! Toggleable form that appends a new todo.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{use_todo_dispatch, use_todo_next_id};
use crate::models::Todo;
use crate::store::TodoAction;

#[component]
pub fn TodoCreate() -> impl IntoView {
    let dispatch = use_todo_dispatch();
    let next_id = use_todo_next_id();

    let (open, set_open) = signal(false);
    let (value, set_value) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = next_id.take() else { return };
        let todo = Todo::new(id, value.get_untracked());
        dispatch.dispatch(TodoAction::Create { todo });
        set_value.set(String::new());
        set_open.set(false);
    };

    view! {
        <Show when=move || open.get()>
            <div class="insert-form-positioner">
                <form class="insert-form" on:submit=create_todo>
                    <input
                        type="text"
                        autofocus=true
                        placeholder="Type a task, then press Enter"
                        prop:value=move || value.get()
                        on:input=move |ev| {
                            if let Some(input) = ev
                                .target()
                                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                set_value.set(input.value());
                            }
                        }
                    />
                </form>
            </div>
        </Show>
        <button
            class=move || if open.get() { "circle-button open" } else { "circle-button" }
            on:click=move |_| set_open.update(|o| *o = !*o)
        >
            "+"
        </button>
    }
}
