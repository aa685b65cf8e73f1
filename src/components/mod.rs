//! UI Components
//!
//! Leptos components for the todo list.

mod draft_input;
mod todo_row;
mod create_row;
mod todo_list;

pub use draft_input::DraftInput;
pub use todo_row::TodoRow;
pub use create_row::CreateRow;
pub use todo_list::TodoList;
