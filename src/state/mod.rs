//! Declared entities.
//!
//! Commands and options as the registry stores them.

pub mod command;
pub mod option;

pub use command::{Command, CommandId};
pub use option::{Opt, OptionId, OptionKind};
