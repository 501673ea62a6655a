//! Command declarations.

use std::fmt;

use crate::core::arena::Handle;
use crate::core::names::NameSet;
use crate::handler::Handler;

/// Handle to a declared [`Command`].
pub type CommandId = Handle<Command>;

/// A named, invocable unit.
///
/// A command does not know its options; they point at it through
/// [`crate::Opt::owner`].
pub struct Command {
    names: NameSet,
    help: String,
    handler: Box<dyn Handler>,
}

impl Command {
    pub(crate) fn new(names: &str, handler: Box<dyn Handler>, help: &str) -> Self {
        Self {
            names: NameSet::parse(names),
            help: help.to_string(),
            handler,
        }
    }

    #[must_use]
    pub fn names(&self) -> &NameSet {
        &self.names
    }

    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    pub(crate) fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("names", &self.names.as_str())
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}
