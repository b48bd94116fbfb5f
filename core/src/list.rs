//! Titled, ordered todo lists
//!
//! A [`TodoList`] keeps [`SharedTodo`] handles in insertion order. Adding a
//! todo shares it rather than copying it, so marking a todo through the list
//! is visible to whoever else holds the handle, and removing it from the list
//! leaves the todo itself untouched.
//!
//! # Indexing
//!
//! Index-based operations take an `isize`. Negative indices count from the
//! end (`-1` is the last todo, `-size` the first). Anything outside
//! `[-size, size)` is a [`ListError::IndexOutOfRange`].
//!
//! # Example
//!
//! ```
//! use todolist_core::{Todo, TodoList};
//!
//! # fn main() -> Result<(), todolist_core::ListError> {
//! let mut list = TodoList::new("Today's Todos");
//! list.add(Todo::new("Buy milk"))
//!     .add(Todo::new("Clean room"))
//!     .add(Todo::new("Go to gym"));
//!
//! list.mark_done_at(0)?;
//! assert_eq!(
//!     list.to_string(),
//!     "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room\n[ ] Go to gym"
//! );
//! assert_eq!(list.item_at(-1)?.title(), "Go to gym");
//! # Ok(())
//! # }
//! ```

use crate::config::{DEFAULT_HEADER_RULE, RenderConfig};
use crate::error::{ListError, Result};
use crate::item::{DONE_MARKER, SharedTodo, Todo, UNDONE_MARKER};
use std::fmt;
use std::ops::Shl;

/// An ordered collection of todos with a title
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoList {
    title: String,
    todos: Vec<SharedTodo>,
}

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Returns the list title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the list title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Appends a todo and returns the list for chaining
    ///
    /// Passing a [`SharedTodo`] shares it with the caller; passing a [`Todo`]
    /// moves it into a fresh handle. `&mut list << todo` is the same
    /// operation.
    pub fn add(&mut self, todo: impl Into<SharedTodo>) -> &mut Self {
        let todo = todo.into();
        tracing::debug!(list = %self.title, todo = %todo.title(), "todo added");
        self.todos.push(todo);
        self
    }

    /// Appends a todo described by a dynamically-typed value
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotATodo`] unless `value` is a JSON object with a
    /// `title` and no keys other than `title`, `description` and `done`.
    pub fn try_add(&mut self, value: serde_json::Value) -> Result<&mut Self> {
        let parsed = if value.is_object() {
            serde_json::from_value::<Todo>(value.clone()).map_err(|error| error.to_string())
        } else {
            Err("not a JSON object".to_string())
        };

        match parsed {
            Ok(todo) => Ok(self.add(todo)),
            Err(reason) => {
                tracing::warn!(list = %self.title, %value, %reason, "rejected non-todo value");
                Err(ListError::NotATodo {
                    found: value.to_string(),
                })
            }
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    /// Same as [`TodoList::size`]
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns whether the list has no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the first todo, if any
    #[must_use]
    pub fn first(&self) -> Option<SharedTodo> {
        self.todos.first().cloned()
    }

    /// Returns the last todo, if any
    #[must_use]
    pub fn last(&self) -> Option<SharedTodo> {
        self.todos.last().cloned()
    }

    /// Returns a new vector holding the same todos in order
    ///
    /// The vector is the caller's; pushing to or removing from it does not
    /// change the list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<SharedTodo> {
        self.todos.clone()
    }

    /// Returns whether every todo is done (true for an empty list)
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(SharedTodo::is_done)
    }

    /// Returns the todo at `index`
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index` is outside
    /// `[-size, size)`.
    pub fn item_at(&self, index: isize) -> Result<SharedTodo> {
        let position = self.resolve(index)?;
        self.todos
            .get(position)
            .cloned()
            .ok_or(ListError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Marks the todo at `index` as done
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index` is out of bounds.
    pub fn mark_done_at(&self, index: isize) -> Result<()> {
        let todo = self.item_at(index)?;
        tracing::trace!(list = %self.title, index, "marking done");
        todo.mark_done();
        Ok(())
    }

    /// Marks the todo at `index` as not done
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index` is out of bounds.
    pub fn mark_undone_at(&self, index: isize) -> Result<()> {
        let todo = self.item_at(index)?;
        tracing::trace!(list = %self.title, index, "marking undone");
        todo.mark_undone();
        Ok(())
    }

    /// Marks every todo as done
    pub fn mark_all_done(&self) {
        for todo in &self.todos {
            todo.mark_done();
        }
    }

    /// Marks every todo as not done
    pub fn mark_all_undone(&self) {
        self.for_each(SharedTodo::mark_undone);
    }

    /// Removes and returns the first todo, if any
    pub fn remove_first(&mut self) -> Option<SharedTodo> {
        if self.todos.is_empty() {
            return None;
        }
        let todo = self.todos.remove(0);
        tracing::debug!(list = %self.title, todo = %todo.title(), "removed first todo");
        Some(todo)
    }

    /// Removes and returns the last todo, if any
    pub fn remove_last(&mut self) -> Option<SharedTodo> {
        let todo = self.todos.pop()?;
        tracing::debug!(list = %self.title, todo = %todo.title(), "removed last todo");
        Some(todo)
    }

    /// Removes and returns the todo at `index`
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index` is out of bounds;
    /// the list is left unchanged.
    pub fn remove_at(&mut self, index: isize) -> Result<SharedTodo> {
        self.item_at(index)?;
        let position = self.resolve(index)?;
        let todo = self.todos.remove(position);
        tracing::debug!(list = %self.title, index, todo = %todo.title(), "removed todo");
        Ok(todo)
    }

    /// Calls `visitor` with each todo in order and returns the list
    ///
    /// Traversal goes through [`TodoList::item_at`], so it visits exactly the
    /// indices that direct access accepts.
    pub fn for_each<F>(&self, mut visitor: F) -> &Self
    where
        F: FnMut(&SharedTodo),
    {
        let mut index = 0;
        while let Ok(todo) = self.item_at(index) {
            visitor(&todo);
            index += 1;
        }
        self
    }

    /// Returns a new list, with the same title, holding the todos that match
    /// `predicate` in their original order
    ///
    /// The todos are shared with this list, not copied.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&SharedTodo) -> bool,
    {
        let mut selection = Self::new(self.title.clone());
        self.for_each(|todo| {
            if predicate(todo) {
                selection.todos.push(todo.clone());
            }
        });
        selection
    }

    /// Returns the first todo whose title equals `title` exactly
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<SharedTodo> {
        self.todos.iter().find(|todo| todo.has_title(title)).cloned()
    }

    /// Returns the done todos
    #[must_use]
    pub fn all_done(&self) -> Self {
        self.filter(SharedTodo::is_done)
    }

    /// Returns the todos that are not done
    #[must_use]
    pub fn all_not_done(&self) -> Self {
        self.filter(|todo| !todo.is_done())
    }

    /// Marks the first todo titled `title` as done
    ///
    /// Returns `false`, changing nothing, if no todo has that title.
    pub fn mark_done_by_title(&self, title: &str) -> bool {
        match self.find_by_title(title) {
            Some(todo) => {
                todo.mark_done();
                true
            }
            None => false,
        }
    }

    /// Iterates over the todos in order
    pub fn iter(&self) -> std::slice::Iter<'_, SharedTodo> {
        self.todos.iter()
    }

    /// Renders the list with the header rule and markers from `config`
    #[must_use]
    pub fn render_with(&self, config: &RenderConfig) -> String {
        self.rendered(&config.header_rule, config.done_marker, config.undone_marker)
            .to_string()
    }

    const fn rendered<'a>(
        &'a self,
        header_rule: &'a str,
        done_marker: char,
        undone_marker: char,
    ) -> Rendered<'a> {
        Rendered {
            list: self,
            header_rule,
            done_marker,
            undone_marker,
        }
    }

    fn resolve(&self, index: isize) -> Result<usize> {
        let size = self.size();
        let out_of_range = ListError::IndexOutOfRange { index, size };
        let len = isize::try_from(size).map_err(|_| out_of_range.clone())?;
        let normalized = if index < 0 { index + len } else { index };
        usize::try_from(normalized)
            .ok()
            .filter(|&position| position < size)
            .ok_or(out_of_range)
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.rendered(DEFAULT_HEADER_RULE, DONE_MARKER, UNDONE_MARKER);
        fmt::Display::fmt(&rendered, f)
    }
}

/// Header line plus one line per todo, shared by `Display` and `render_with`
struct Rendered<'a> {
    list: &'a TodoList,
    header_rule: &'a str,
    done_marker: char,
    undone_marker: char,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = self.header_rule;
        writeln!(f, "{rule} {} {rule}", self.list.title)?;
        for (position, todo) in self.list.todos.iter().enumerate() {
            if position > 0 {
                f.write_str("\n")?;
            }
            let todo = todo.borrow();
            write!(f, "{}", todo.marked(self.done_marker, self.undone_marker))?;
        }
        Ok(())
    }
}

impl<'a, T> Shl<T> for &'a mut TodoList
where
    T: Into<SharedTodo>,
{
    type Output = &'a mut TodoList;

    fn shl(self, todo: T) -> Self::Output {
        self.add(todo)
    }
}

impl<T> Extend<T> for TodoList
where
    T: Into<SharedTodo>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for todo in iter {
            self.add(todo);
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a SharedTodo;
    type IntoIter = std::slice::Iter<'a, SharedTodo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
