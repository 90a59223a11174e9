//! Todoist task-management integration.

pub mod client;
pub mod types;

pub use client::TodoistClient;
pub use types::{Project, Task, TodoistError};
