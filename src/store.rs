//! Todo State Store
//!
//! The command set, the pure reducer that applies it, and the
//! `reactive_stores` state that holds the current list.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TodoError, TodoResult};
use crate::models::Todo;

/// The only sanctioned ways to change the list
///
/// Serialized with an upper-case `type` tag, e.g.
/// `{"type":"TOGGLE","id":3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append; the id must already come from the allocator
    Create { todo: Todo },
    /// Flip `done` on the matching entry
    Toggle { id: u32 },
    /// Drop the matching entry
    Remove { id: u32 },
}

impl TodoAction {
    pub fn action_type(&self) -> &'static str {
        match self {
            TodoAction::Create { .. } => "CREATE",
            TodoAction::Toggle { .. } => "TOGGLE",
            TodoAction::Remove { .. } => "REMOVE",
        }
    }

    /// Decode a command from its JSON wire shape.
    ///
    /// Anything that does not decode to one of the three variants is
    /// rejected as `UnhandledCommand` with whatever `type` it carried and
    /// the decoder's reason.
    pub fn from_json(raw: &str) -> TodoResult<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|err| TodoError::UnhandledCommand {
            action_type: "<invalid json>".to_string(),
            reason: err.to_string(),
        })?;
        let action_type = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("<missing>")
            .to_string();
        serde_json::from_value(value).map_err(|err| TodoError::UnhandledCommand {
            action_type,
            reason: err.to_string(),
        })
    }
}

/// Apply one command to a list, returning the next list.
///
/// Unknown ids leave the list value-equal to the input. The input is
/// never modified.
pub fn todo_reducer(state: &[Todo], action: &TodoAction) -> Vec<Todo> {
    match action {
        TodoAction::Create { todo } => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.extend_from_slice(state);
            next.push(todo.clone());
            next
        }
        TodoAction::Toggle { id } => state
            .iter()
            .map(|todo| {
                if todo.id == *id {
                    Todo { done: !todo.done, ..todo.clone() }
                } else {
                    todo.clone()
                }
            })
            .collect(),
        TodoAction::Remove { id } => state.iter().filter(|todo| todo.id != *id).cloned().collect(),
    }
}

/// Reactive todo state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Current list, in insertion order
    pub todos: Vec<Todo>,
}

impl TodoState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Run `action` through the reducer and publish the result
pub fn store_apply(store: &TodoStore, action: &TodoAction) {
    let todos = store.todos();
    let next = todos.with_untracked(|current| todo_reducer(current, action));
    *todos.write() = next;
}

/// Tracked read of the whole list
pub fn store_todos(store: &TodoStore) -> Vec<Todo> {
    store.todos().get()
}

/// Untracked read of the whole list
pub fn store_todos_untracked(store: &TodoStore) -> Vec<Todo> {
    store.todos().get_untracked()
}

/// Tracked count of entries not yet done
pub fn store_remaining(store: &TodoStore) -> usize {
    store.todos().with(|todos| todos.iter().filter(|todo| !todo.done).count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::initial_todos;
    use proptest::prelude::*;

    fn arb_todos() -> impl Strategy<Value = Vec<Todo>> {
        prop::collection::btree_map(1u32..500, ("[a-z ]{0,12}", any::<bool>()), 0..16)
            .prop_map(|entries| {
                entries
                    .into_iter()
                    .map(|(id, (text, done))| Todo { id, text, done })
                    .collect::<Vec<_>>()
            })
            .prop_shuffle()
    }

    #[test]
    fn test_seed_scenario() {
        let seed = initial_todos();

        let state = todo_reducer(&seed, &TodoAction::Create { todo: Todo::new(5, "new") });
        assert_eq!(state.len(), 5);
        assert_eq!(state[4], Todo { id: 5, text: "new".to_string(), done: false });

        let state = todo_reducer(&state, &TodoAction::Toggle { id: 3 });
        assert!(state[2].done);
        assert_eq!(state[0], seed[0]);
        assert_eq!(state[1], seed[1]);
        assert_eq!(state[3], seed[3]);

        let state = todo_reducer(&state, &TodoAction::Remove { id: 1 });
        assert_eq!(state.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let seed = initial_todos();
        assert_eq!(todo_reducer(&seed, &TodoAction::Toggle { id: 999 }), seed);
    }

    #[test]
    fn test_reducer_leaves_input_untouched() {
        let seed = initial_todos();
        let before = seed.clone();
        let _ = todo_reducer(&seed, &TodoAction::Toggle { id: 1 });
        let _ = todo_reducer(&seed, &TodoAction::Remove { id: 2 });
        assert_eq!(seed, before);
    }

    #[test]
    fn test_from_json_known_types() {
        assert_eq!(
            TodoAction::from_json(r#"{"type":"TOGGLE","id":3}"#),
            Ok(TodoAction::Toggle { id: 3 })
        );
        assert_eq!(
            TodoAction::from_json(r#"{"type":"REMOVE","id":1}"#),
            Ok(TodoAction::Remove { id: 1 })
        );
        assert_eq!(
            TodoAction::from_json(r#"{"type":"CREATE","todo":{"id":5,"text":"new","done":false}}"#),
            Ok(TodoAction::Create { todo: Todo::new(5, "new") })
        );
    }

    fn unhandled_type(result: TodoResult<TodoAction>) -> Option<String> {
        match result {
            Err(TodoError::UnhandledCommand { action_type, .. }) => Some(action_type),
            _ => None,
        }
    }

    #[test]
    fn test_from_json_unhandled() {
        assert_eq!(
            unhandled_type(TodoAction::from_json(r#"{"type":"RENAME","id":3}"#)),
            Some("RENAME".to_string())
        );
        assert_eq!(
            unhandled_type(TodoAction::from_json(r#"{"id":3}"#)),
            Some("<missing>".to_string())
        );
        assert_eq!(
            unhandled_type(TodoAction::from_json(r#"{"type":"TOGGLE"}"#)),
            Some("TOGGLE".to_string())
        );
        assert_eq!(
            unhandled_type(TodoAction::from_json("not json")),
            Some("<invalid json>".to_string())
        );
    }

    #[test]
    fn test_from_json_keeps_decoder_reason() {
        let err = TodoAction::from_json(r#"{"type":"TOGGLE"}"#).unwrap_err();
        match &err {
            TodoError::UnhandledCommand { reason, .. } => assert!(reason.contains("id"), "{reason}"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().starts_with("Unhandled action type: TOGGLE ("));
    }

    #[test]
    fn test_action_type_matches_wire_tag() {
        let action = TodoAction::Remove { id: 9 };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], action.action_type());
    }

    proptest! {
        #[test]
        fn toggle_twice_restores(todos in arb_todos(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!todos.is_empty());
            let id = todos[pick.index(todos.len())].id;
            let once = todo_reducer(&todos, &TodoAction::Toggle { id });
            let twice = todo_reducer(&once, &TodoAction::Toggle { id });
            prop_assert_ne!(&once, &todos);
            prop_assert_eq!(twice, todos);
        }

        #[test]
        fn unknown_id_is_noop(todos in arb_todos(), id in 500u32..1000) {
            prop_assert_eq!(&todo_reducer(&todos, &TodoAction::Toggle { id }), &todos);
            prop_assert_eq!(&todo_reducer(&todos, &TodoAction::Remove { id }), &todos);
        }

        #[test]
        fn create_appends_last(todos in arb_todos(), id in 500u32..1000, text in "[a-z]{0,8}") {
            let todo = Todo::new(id, text);
            let next = todo_reducer(&todos, &TodoAction::Create { todo: todo.clone() });
            prop_assert_eq!(next.len(), todos.len() + 1);
            prop_assert_eq!(&next[..todos.len()], &todos[..]);
            prop_assert_eq!(next.last(), Some(&todo));
        }

        #[test]
        fn remove_keeps_order(todos in arb_todos(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!todos.is_empty());
            let id = todos[pick.index(todos.len())].id;
            let next = todo_reducer(&todos, &TodoAction::Remove { id });
            let expected: Vec<Todo> = todos.iter().filter(|t| t.id != id).cloned().collect();
            prop_assert_eq!(next, expected);
        }
    }
}
