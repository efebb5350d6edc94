//! This crate provides an in-memory to-do list.
//!
//! Tasks are stored in a [`TaskList`], which is backed by a [`DynArray`], a growable array that implements the
//! [`OrderedList`](traits::OrderedList) contract. \
//! A `TaskList` can produce views of its completed or incomplete tasks. These views share their tasks with the list
//! they come from, so that marking a task as done through a view is visible everywhere.
//!
//! The [`app`] module provides the interactive, menu-driven session used by the `todo` binary. \
//! Nothing is persisted: tasks only live as long as the session does.

pub mod traits;
pub mod error;
pub use error::{InputError, ListError};

pub mod dyn_array;
pub use dyn_array::DynArray;
pub mod task;
pub use task::{Task, TaskHandle};
pub mod task_list;
pub use task_list::{TaskFilter, TaskList};

pub mod app;
pub mod config;
pub mod utils;
