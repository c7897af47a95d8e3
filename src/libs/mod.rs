//! Core library modules for the todo application.
//!
//! ## Layout
//!
//! - **Model**: [`task`] holds the task record and its field types
//! - **Codec**: [`codec`] turns tasks into stored lines and back
//! - **Engine**: [`todo_list`] applies list operations with write-through
//!   persistence, backed by [`store`] and [`history`]
//! - **Errors**: [`error`] defines the recoverable error taxonomy
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//! - **Presentation**: [`view`] tables and [`export`] files
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_cli::libs::config::Config;
//! use todo_cli::libs::task::NewTask;
//! use todo_cli::libs::todo_list::TodoList;
//!
//! let config = Config::read()?;
//! let mut list = TodoList::open(config.store())?.with_history_depth(config.history_depth);
//! list.add(NewTask::new("buy milk"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod history;
pub mod messages;
pub mod store;
pub mod task;
pub mod todo_list;
pub mod view;
