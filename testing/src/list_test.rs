//! Ergonomic testing utilities for todo lists
//!
//! This module provides a fluent API for testing list operations with readable
//! Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ListTest is the natural name

use todolist_core::TodoList;

/// Type alias for the operation under test
type Operation<R> = Box<dyn FnOnce(&mut TodoList) -> R>;

/// Type alias for list assertion functions
type ListAssertion = Box<dyn FnOnce(&TodoList)>;

/// Type alias for outcome assertion functions
type OutcomeAssertion<R> = Box<dyn FnOnce(&R)>;

/// Fluent API for testing list operations with Given-When-Then syntax
///
/// `R` is whatever the operation returns, typically a `Result` from an
/// index-based call or an `Option` from a removal.
///
/// # Example
///
/// ```
/// use todolist_testing::{fixtures, ListTest};
///
/// let fixture = fixtures::todays_todos();
/// let milk = fixture.todos[0].clone();
///
/// ListTest::new()
///     .given_list(fixture.list)
///     .when(|list| list.mark_done_at(0))
///     .then_outcome(|result| assert!(result.is_ok()))
///     .then_list(move |list| {
///         assert!(milk.is_done());
///         assert!(!list.is_done());
///     })
///     .run();
/// ```
pub struct ListTest<R> {
    initial_list: Option<TodoList>,
    operation: Option<Operation<R>>,
    list_assertions: Vec<ListAssertion>,
    outcome_assertions: Vec<OutcomeAssertion<R>>,
}

impl<R> ListTest<R> {
    /// Create a new list test
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_list: None,
            operation: None,
            list_assertions: Vec::new(),
            outcome_assertions: Vec::new(),
        }
    }

    /// Set the initial list (Given)
    #[must_use]
    pub fn given_list(mut self, list: TodoList) -> Self {
        self.initial_list = Some(list);
        self
    }

    /// Set the operation to test (When)
    #[must_use]
    pub fn when<F>(mut self, operation: F) -> Self
    where
        F: FnOnce(&mut TodoList) -> R + 'static,
    {
        self.operation = Some(Box::new(operation));
        self
    }

    /// Add an assertion about the resulting list (Then)
    #[must_use]
    pub fn then_list<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&TodoList) + 'static,
    {
        self.list_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the value the operation returned (Then)
    #[must_use]
    pub fn then_outcome<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R) + 'static,
    {
        self.outcome_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if the initial list or the operation is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut list = self
            .initial_list
            .expect("Initial list must be set with given_list()");

        let operation = self.operation.expect("Operation must be set with when()");

        let outcome = operation(&mut list);

        for assertion in self.list_assertions {
            assertion(&list);
        }

        for assertion in self.outcome_assertions {
            assertion(&outcome);
        }
    }
}

impl<R> Default for ListTest<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper assertions for lists and their outcomes
pub mod assertions {
    use std::fmt::Debug;
    use todolist_core::{ListError, SharedTodo, TodoList};

    /// Assert that the list renders to exactly `expected`
    ///
    /// # Panics
    ///
    /// Panics if the rendering differs.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_rendered(list: &TodoList, expected: &str) {
        assert_eq!(
            list.to_string(),
            expected,
            "Rendered list does not match expected output"
        );
    }

    /// Assert that the list holds todos with exactly these titles, in order
    ///
    /// # Panics
    ///
    /// Panics if the titles differ.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_titles(list: &TodoList, expected: &[&str]) {
        let titles: Vec<String> = list.iter().map(SharedTodo::title).collect();
        assert_eq!(titles, expected, "Expected titles {expected:?}, found {titles:?}");
    }

    /// Assert that two sequences hold the very same todos (identity, not value)
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ or any pair is not the same todo.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_same_todos(actual: &[SharedTodo], expected: &[SharedTodo]) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "Expected {} todos, but found {}",
            expected.len(),
            actual.len()
        );
        for (position, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!(
                a.ptr_eq(e),
                "Todo at position {position} is {a} but expected the shared todo {e}"
            );
        }
    }

    /// Assert that an outcome is an index error for `index` on a list of `size`
    ///
    /// # Panics
    ///
    /// Panics if the outcome is anything else.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_index_out_of_range<T: Debug>(
        outcome: &Result<T, ListError>,
        index: isize,
        size: usize,
    ) {
        assert!(
            matches!(
                outcome,
                Err(ListError::IndexOutOfRange { index: i, size: s }) if *i == index && *s == size
            ),
            "Expected IndexOutOfRange {{ index: {index}, size: {size} }}, but found {outcome:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todolist_core::{SharedTodo, Todo};

    fn two_item_list() -> TodoList {
        let mut list = TodoList::new("Chores");
        list.add(Todo::new("Dishes")).add(Todo::new("Laundry"));
        list
    }

    #[test]
    fn test_list_test_remove_last() {
        ListTest::new()
            .given_list(two_item_list())
            .when(TodoList::remove_last)
            .then_list(|list| {
                assertions::assert_titles(list, &["Dishes"]);
            })
            .then_outcome(|removed: &Option<SharedTodo>| {
                assert_eq!(removed.as_ref().map(SharedTodo::title).as_deref(), Some("Laundry"));
            })
            .run();
    }

    #[test]
    fn test_list_test_index_error() {
        ListTest::new()
            .given_list(two_item_list())
            .when(|list| list.remove_at(2))
            .then_outcome(|outcome| assertions::assert_index_out_of_range(outcome, 2, 2))
            .then_list(|list| assert_eq!(list.size(), 2))
            .run();
    }

    #[test]
    fn test_assert_rendered() {
        assertions::assert_rendered(&two_item_list(), "---- Chores ----\n[ ] Dishes\n[ ] Laundry");
    }

    #[test]
    fn test_assert_same_todos() {
        let list = two_item_list();
        assertions::assert_same_todos(&list.to_vec(), &list.to_vec());
    }

    #[test]
    #[should_panic(expected = "Todo at position 0")]
    fn test_assert_same_todos_rejects_copies() {
        let list = two_item_list();
        let copies: Vec<SharedTodo> = list.iter().map(SharedTodo::copy).collect();
        assertions::assert_same_todos(&copies, &list.to_vec());
    }
}
