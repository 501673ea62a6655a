//! Entity registry: the arenas holding every declared command and option.
//!
//! An option optionally points at one command. A command's options are
//! found by scanning, not through a maintained index; registries are small
//! and bounded.

use crate::config::Limits;
use crate::core::arena::Arena;
use crate::error::{EntityKind, Error, Result};
use crate::state::{Command, CommandId, Opt, OptionId};

/// Owns the declared commands and options of one application.
#[derive(Debug)]
pub struct Registry {
    commands: Arena<Command>,
    options: Arena<Opt>,
}

impl Registry {
    /// Creates empty registries sized by `limits`.
    #[must_use]
    pub fn new(limits: &Limits) -> Self {
        Self {
            commands: Arena::with_capacity(limits.max_commands, limits.growth()),
            options: Arena::with_capacity(limits.max_options, limits.growth()),
        }
    }

    /// Appends a command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] when the command registry is full.
    pub fn add_command(&mut self, command: Command) -> Result<CommandId> {
        self.commands
            .push(command)
            .map_err(|full| Error::CapacityExceeded {
                kind: EntityKind::Command,
                max: full.capacity,
            })
    }

    /// Appends an option owned by `owner`, or a global option for `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForeignCommand`] if `owner` is not a live command of
    /// this registry, and [`Error::CapacityExceeded`] when the option
    /// registry is full.
    pub fn add_option(&mut self, owner: Option<CommandId>, mut option: Opt) -> Result<OptionId> {
        if let Some(id) = owner {
            if !self.commands.owns(id) {
                return Err(Error::ForeignCommand);
            }
        }

        option.set_owner(owner);
        self.options
            .push(option)
            .map_err(|full| Error::CapacityExceeded {
                kind: EntityKind::Option,
                max: full.capacity,
            })
    }

    /// First command whose alias set contains `token`.
    #[must_use]
    pub fn find_command(&self, token: &str) -> Option<CommandId> {
        self.commands
            .iter()
            .find(|(_, command)| command.names().contains(token))
            .map(|(id, _)| id)
    }

    /// First option, of any owner, whose alias set contains `token`.
    #[must_use]
    pub fn find_option(&self, token: &str) -> Option<OptionId> {
        self.options
            .iter()
            .find(|(_, option)| option.names().contains(token))
            .map(|(id, _)| id)
    }

    /// Options owned by `owner` (global options for `None`), in declaration order.
    #[must_use]
    pub fn options_for(&self, owner: Option<CommandId>) -> Vec<OptionId> {
        self.options
            .iter()
            .filter(|(_, option)| option.owner() == owner)
            .map(|(id, _)| id)
            .collect()
    }

    #[must_use]
    pub fn command(&self, id: CommandId) -> Option<&Command> {
        self.commands.get(id)
    }

    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&Opt> {
        self.options.get(id)
    }

    pub fn option_mut(&mut self, id: OptionId) -> Option<&mut Opt> {
        self.options.get_mut(id)
    }

    /// Every command in declaration order.
    pub fn commands(&self) -> impl Iterator<Item = (CommandId, &Command)> {
        self.commands.iter()
    }

    /// Every option in declaration order.
    pub fn options(&self) -> impl Iterator<Item = (OptionId, &Opt)> {
        self.options.iter()
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Drops every entity. Handles issued before are invalid afterwards.
    pub fn clear(&mut self) {
        self.options.clear();
        self.commands.clear();
    }
}
