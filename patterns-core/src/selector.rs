//! Selector registry - maps a command line value to a constructor.

use indexmap::IndexMap;
use tracing::debug;

use crate::{Error, Result};

/// An ordered table from selector value to constructor function.
///
/// Insertion order is the order options are listed in error messages and in
/// the catalog.
pub struct Selector<T> {
    argument: &'static str,
    options: IndexMap<&'static str, fn() -> T>,
}

impl<T> Selector<T> {
    /// Create an empty selector for the given flag name (without dashes).
    pub fn new(argument: &'static str) -> Self {
        Self {
            argument,
            options: IndexMap::new(),
        }
    }

    /// Register an option. A later registration with the same name replaces
    /// the constructor but keeps the original position.
    pub fn option(mut self, name: &'static str, build: fn() -> T) -> Self {
        self.options.insert(name, build);
        self
    }

    /// Flag name this selector answers to.
    pub fn argument(&self) -> &'static str {
        self.argument
    }

    /// Option names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.keys().copied()
    }

    /// Construct the value registered under `value`.
    ///
    /// Matching is exact; anything else yields [`Error::InvalidSelector`].
    pub fn select(&self, value: &str) -> Result<T> {
        match self.options.get(value) {
            Some(build) => {
                debug!(argument = self.argument, value, "selected");
                Ok(build())
            }
            None => Err(Error::invalid_selector(
                self.argument,
                value,
                self.names().map(String::from).collect(),
            )),
        }
    }
}
