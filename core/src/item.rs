//! Todo items
//!
//! A [`Todo`] is a plain value: title, description and a done flag. Lists do
//! not own their todos outright; they hold [`SharedTodo`] handles so the same
//! todo can be watched by the caller and by any number of lists at once.

use crate::config::RenderConfig;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Marker rendered for a done todo
pub const DONE_MARKER: char = 'X';

/// Marker rendered for a todo that is not done
pub const UNDONE_MARKER: char = ' ';

/// A single todo item
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Todo {
    /// Title of the todo
    pub title: String,
    /// Free-form description, empty by default
    #[serde(default)]
    pub description: String,
    /// Whether the todo is done
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    /// Creates a new todo with an empty description
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_description(title, String::new())
    }

    /// Creates a new todo with a description
    #[must_use]
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            done: false,
        }
    }

    /// Marks the todo as done
    pub const fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the todo as not done
    pub const fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Returns whether the todo is done
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns an independent todo with the same title, description and done flag
    #[must_use]
    pub fn copy(&self) -> Self {
        let mut copy = Self::with_description(self.title.clone(), self.description.clone());
        if self.is_done() {
            copy.mark_done();
        }
        copy
    }

    /// Renders the todo with the markers from `config`
    #[must_use]
    pub fn render_with(&self, config: &RenderConfig) -> String {
        self.marked(config.done_marker, config.undone_marker).to_string()
    }

    pub(crate) const fn marked(&self, done_marker: char, undone_marker: char) -> Marked<'_> {
        Marked {
            todo: self,
            done_marker,
            undone_marker,
        }
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.marked(DONE_MARKER, UNDONE_MARKER), f)
    }
}

/// `[marker] title` formatting shared by `Display` and `render_with`
pub(crate) struct Marked<'a> {
    todo: &'a Todo,
    done_marker: char,
    undone_marker: char,
}

impl fmt::Display for Marked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.todo.done {
            self.done_marker
        } else {
            self.undone_marker
        };
        write!(f, "[{marker}] {}", self.todo.title)
    }
}

/// Shared handle to a [`Todo`]
///
/// Cloning the handle shares the todo: a change made through one clone is
/// visible through every other. Use [`SharedTodo::copy`] for an independent
/// todo.
///
/// Equality compares the referenced values; use [`SharedTodo::ptr_eq`] to
/// check identity.
///
/// # Example
///
/// ```
/// use todolist_core::{SharedTodo, Todo};
///
/// let todo = SharedTodo::new(Todo::new("Buy milk"));
/// let alias = todo.clone();
/// alias.mark_done();
/// assert!(todo.is_done());
///
/// let copy = todo.copy();
/// copy.mark_undone();
/// assert!(todo.is_done());
/// assert!(!copy.ptr_eq(&todo));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedTodo(Rc<RefCell<Todo>>);

impl SharedTodo {
    /// Wraps a todo in a new shared handle
    #[must_use]
    pub fn new(todo: Todo) -> Self {
        Self(Rc::new(RefCell::new(todo)))
    }

    /// Immutably borrows the todo
    ///
    /// # Panics
    ///
    /// Panics if the todo is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Todo> {
        self.0.borrow()
    }

    /// Mutably borrows the todo
    ///
    /// # Panics
    ///
    /// Panics if the todo is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, Todo> {
        self.0.borrow_mut()
    }

    /// Returns a clone of the title
    #[must_use]
    pub fn title(&self) -> String {
        self.borrow().title.clone()
    }

    /// Returns whether the title equals `title` exactly
    #[must_use]
    pub fn has_title(&self, title: &str) -> bool {
        self.borrow().title == title
    }

    /// Marks the todo as done
    pub fn mark_done(&self) {
        self.borrow_mut().mark_done();
    }

    /// Marks the todo as not done
    pub fn mark_undone(&self) {
        self.borrow_mut().mark_undone();
    }

    /// Returns whether the todo is done
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.borrow().is_done()
    }

    /// Returns a copy of the current value
    #[must_use]
    pub fn snapshot(&self) -> Todo {
        self.borrow().clone()
    }

    /// Returns a handle to a new, independent todo with the same fields
    #[must_use]
    pub fn copy(&self) -> Self {
        Self::new(self.borrow().copy())
    }

    /// Returns whether both handles point at the same todo
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Renders the todo with the markers from `config`
    #[must_use]
    pub fn render_with(&self, config: &RenderConfig) -> String {
        self.borrow().render_with(config)
    }
}

impl From<Todo> for SharedTodo {
    fn from(todo: Todo) -> Self {
        Self::new(todo)
    }
}

impl PartialEq for SharedTodo {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.borrow() == *other.borrow()
    }
}

impl Eq for SharedTodo {}

impl PartialEq<Todo> for SharedTodo {
    fn eq(&self, other: &Todo) -> bool {
        *self.borrow() == *other
    }
}

impl fmt::Display for SharedTodo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.borrow(), f)
    }
}
