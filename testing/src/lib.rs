//! # Todolist Testing
//!
//! Testing utilities and helpers for todo lists.
//!
//! This crate provides:
//! - Fixtures for the standard "Today's Todos" scenario
//! - A Given-When-Then builder for list operations
//! - Property-based testing strategies
//! - Assertion helpers for lists and their outcomes
//!
//! ## Example
//!
//! ```
//! use todolist_testing::{assertions, fixtures};
//!
//! let fixture = fixtures::todays_todos();
//! assertions::assert_rendered(&fixture.list, fixtures::TODAYS_RENDER);
//! ```

mod list_test;

pub use list_test::{ListTest, assertions};

/// Fixtures for common test scenarios
pub mod fixtures {
    use todolist_core::{SharedTodo, Todo, TodoList};

    /// Title of the standard fixture list
    pub const TODAYS_TITLE: &str = "Today's Todos";

    /// Titles of the standard fixture todos, in insertion order
    pub const TODAYS_TITLES: [&str; 3] = ["Buy milk", "Clean room", "Go to gym"];

    /// Rendering of the standard fixture while nothing is done
    pub const TODAYS_RENDER: &str =
        "---- Today's Todos ----\n[ ] Buy milk\n[ ] Clean room\n[ ] Go to gym";

    /// A list together with handles to the todos it holds
    #[derive(Debug, Clone)]
    pub struct Fixture {
        /// The list under test
        pub list: TodoList,
        /// The same todos the list holds, in insertion order
        pub todos: Vec<SharedTodo>,
    }

    /// "Today's Todos" with Buy milk, Clean room and Go to gym, none done
    ///
    /// # Example
    ///
    /// ```
    /// use todolist_testing::fixtures::todays_todos;
    ///
    /// let fixture = todays_todos();
    /// fixture.todos[1].mark_done();
    /// assert_eq!(fixture.list.all_done().size(), 1);
    /// ```
    #[must_use]
    pub fn todays_todos() -> Fixture {
        list_of(TODAYS_TITLE, &TODAYS_TITLES)
    }

    /// A list titled `title` holding one fresh todo per entry of `titles`
    #[must_use]
    pub fn list_of(title: &str, titles: &[&str]) -> Fixture {
        let todos: Vec<SharedTodo> = titles
            .iter()
            .map(|title| SharedTodo::new(Todo::new(*title)))
            .collect();

        let mut list = TodoList::new(title);
        list.extend(todos.iter().cloned());

        Fixture { list, todos }
    }
}

/// Property-based testing strategies
///
/// Strategies for todos and lists using proptest.
pub mod properties {
    use proptest::collection::vec;
    use proptest::prelude::*;
    use todolist_core::{Todo, TodoList};

    /// Any todo: short title, optional description, either done state
    pub fn arb_todo() -> impl Strategy<Value = Todo> {
        ("[A-Za-z][A-Za-z ]{0,15}", "[a-z ]{0,24}", any::<bool>()).prop_map(
            |(title, description, done)| {
                let mut todo = Todo::with_description(title, description);
                if done {
                    todo.mark_done();
                }
                todo
            },
        )
    }

    /// Any sequence of up to `max_len` todos
    pub fn arb_todos(max_len: usize) -> impl Strategy<Value = Vec<Todo>> {
        vec(arb_todo(), 0..=max_len)
    }

    /// Any list of up to 12 todos
    pub fn arb_list() -> impl Strategy<Value = TodoList> {
        ("[A-Za-z' ]{1,20}", arb_todos(12)).prop_map(|(title, todos)| {
            let mut list = TodoList::new(title);
            list.extend(todos);
            list
        })
    }
}

/// Tracing setup for tests
pub mod tracing_support {
    use tracing_subscriber::EnvFilter;

    /// Install a test-friendly subscriber honouring `RUST_LOG`
    ///
    /// Safe to call from every test; only the first call installs anything.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todays_todos_shares_handles() {
        let fixture = fixtures::todays_todos();
        assertions::assert_same_todos(&fixture.list.to_vec(), &fixture.todos);
        assertions::assert_rendered(&fixture.list, fixtures::TODAYS_RENDER);
    }

    #[test]
    fn test_list_of() {
        let fixture = fixtures::list_of("Errands", &["Post office"]);
        assert_eq!(fixture.list.title(), "Errands");
        assertions::assert_titles(&fixture.list, &["Post office"]);
    }
}
