//! Command-line application framework.
//!
//! Declare commands, each with named flag or value options, then hand
//! `argv` to [`App::run`]. The first word picks a command by any of its
//! comma-separated aliases, the remaining tokens are matched against that
//! command's options, required options are enforced, and the command's
//! [`Handler`] runs. Its return value is the exit code.
//!
//! ```no_run
//! use clic::{App, Matches, Opt};
//!
//! fn greet(matches: &Matches<'_>) -> i32 {
//!     let name = matches.value_of("--name").unwrap_or("world");
//!     let punct = if matches.is_present("--loud") { "!" } else { "." };
//!     println!("Hello, {name}{punct}");
//!     0
//! }
//!
//! fn main() -> Result<(), clic::Error> {
//!     let mut app = App::new("hello", "1.0.0", "Says hello");
//!     let cmd = app.add_command("greet, g", greet, "Greet someone")?;
//!     app.add_command_option(cmd, Opt::value("-n, --name", "Who to greet").required())?;
//!     app.add_command_option(cmd, Opt::flag("-l, --loud", "Shout"))?;
//!
//!     let code = app.run(std::env::args());
//!     app.destroy();
//!     std::process::exit(code);
//! }
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod handler;
pub mod help;
pub mod matches;
pub mod state;

pub use app::App;
pub use config::{Limits, Settings};
pub use crate::core::arena::{Arena, Growth, Handle};
pub use crate::core::dispatch::{parse_command_args, ParseOutcome};
pub use crate::core::names::NameSet;
pub use crate::core::registry::Registry;
pub use error::{EntityKind, Error, ParseError, Result};
pub use handler::Handler;
pub use matches::Matches;
pub use state::{Command, CommandId, Opt, OptionId, OptionKind};
