//! UI Components
//!
//! Display consumers of the todo context.

mod todo_template;
mod todo_head;
mod todo_list;
mod todo_item;
mod todo_create;

pub use todo_template::TodoTemplate;
pub use todo_head::TodoHead;
pub use todo_list::TodoList;
pub use todo_item::TodoItem;
pub use todo_create::TodoCreate;
