//! The resolved options handed to a handler.

use crate::state::Opt;

/// Options of the dispatched command, after parsing.
///
/// Holds every option the command owns, present or not, in declaration
/// order. The default route receives the global options.
#[derive(Debug, Clone, Default)]
pub struct Matches<'a> {
    options: Vec<&'a Opt>,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(options: Vec<&'a Opt>) -> Self {
        Self { options }
    }

    /// The present option that has `name` among its aliases.
    ///
    /// Aliases are compared as whole tokens, so `--path` never matches an
    /// option declared as `--path-list`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Opt> {
        self.options
            .iter()
            .copied()
            .find(|opt| opt.is_present() && opt.names().contains(name))
    }

    /// True if the option named `name` was given.
    #[must_use]
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Value of the option named `name`, if it was given.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&'a str> {
        self.get(name).map(Opt::value_str)
    }

    /// All options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Opt> + '_ {
        self.options.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
