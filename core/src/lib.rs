//! # Todolist Core
//!
//! In-memory todo lists and a short-circuiting fold.
//!
//! ## Core Concepts
//!
//! - **Todo**: a task record with a title, a description and a done flag
//! - **SharedTodo**: a handle that lets several lists (and the caller) hold
//!   the same todo
//! - **TodoList**: a titled, ordered collection of shared todos with
//!   index-based access, bulk marking, filtering and text rendering
//! - **reduce**: a left fold with an optional seed
//!
//! Everything here is single-threaded and synchronous; `SharedTodo` is not
//! `Send`, so the compiler keeps lists on one thread.
//!
//! ## Example
//!
//! ```
//! use todolist_core::{SharedTodo, Todo, TodoList};
//!
//! # fn main() -> Result<(), todolist_core::ListError> {
//! let milk = SharedTodo::new(Todo::new("Buy milk"));
//!
//! let mut list = TodoList::new("Today's Todos");
//! list.add(milk.clone()).add(Todo::new("Clean room"));
//!
//! list.mark_done_at(-2)?;
//! assert!(milk.is_done());
//! assert_eq!(list.all_not_done().size(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fold;
pub mod item;
pub mod list;

// Re-export commonly used types
pub use config::{ConfigError, RenderConfig};
pub use error::ListError;
pub use fold::{reduce, try_reduce};
pub use item::{SharedTodo, Todo, DONE_MARKER, UNDONE_MARKER};
pub use list::TodoList;
