//! The application: metadata, registries and the entry points.

use std::fmt;
use std::io::{self, Write};

use crate::config::Limits;
use crate::core::dispatch;
use crate::core::registry::Registry;
use crate::error::Result;
use crate::handler::Handler;
use crate::state::{Command, CommandId, Opt, OptionId};

/// Root object of a command-line application.
///
/// Owns every declared command and option. Handles returned by the
/// declaration calls stay valid until the application is destroyed.
pub struct App {
    pub(crate) name: String,
    pub(crate) version: String,
    pub(crate) description: String,
    pub(crate) default_handler: Option<Box<dyn Handler>>,
    pub(crate) registry: Registry,
    pub(crate) limits: Limits,
}

impl App {
    /// Creates an application with the default limits.
    #[must_use]
    pub fn new(name: &str, version: &str, description: &str) -> Self {
        Self::build(name, version, description, Limits::default())
    }

    /// Creates an application with custom limits.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidLimits`] if `limits` fail validation.
    pub fn with_limits(name: &str, version: &str, description: &str, limits: Limits) -> Result<Self> {
        limits.validate()?;
        Ok(Self::build(name, version, description, limits))
    }

    fn build(name: &str, version: &str, description: &str, limits: Limits) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            description: description.to_string(),
            default_handler: None,
            registry: Registry::new(&limits),
            limits,
        }
    }

    /// Sets the handler run when no command word is recognised.
    #[must_use]
    pub fn default_handler(mut self, handler: impl Handler + 'static) -> Self {
        self.set_default_handler(handler);
        self
    }

    pub fn set_default_handler(&mut self, handler: impl Handler + 'static) {
        self.default_handler = Some(Box::new(handler));
    }

    /// Declares a command.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CapacityExceeded`] when the command registry is full.
    pub fn add_command(
        &mut self,
        names: &str,
        handler: impl Handler + 'static,
        help: &str,
    ) -> Result<CommandId> {
        let id = self
            .registry
            .add_command(Command::new(names, Box::new(handler), help))?;
        tracing::trace!(names, "declared command");
        Ok(id)
    }

    /// Declares a global option, seen only by the default handler.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CapacityExceeded`] when the option registry is full.
    pub fn add_option(&mut self, option: Opt) -> Result<OptionId> {
        self.registry.add_option(None, option)
    }

    /// Declares an option scoped to `command`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ForeignCommand`] if `command` was not declared
    /// on this application, and [`crate::Error::CapacityExceeded`] when the
    /// option registry is full.
    pub fn add_command_option(&mut self, command: CommandId, option: Opt) -> Result<OptionId> {
        self.registry.add_option(Some(command), option)
    }

    /// Parses `args` (program name first) and runs the matching handler.
    ///
    /// Help and version text go to stdout, diagnostics to stderr. Returns
    /// the process exit code.
    pub fn run<I, S>(&mut self, args: I) -> i32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(args, &mut stdout.lock(), &mut stderr.lock())
    }

    /// Same as [`App::run`], writing to the given streams.
    pub fn run_with<I, S>(&mut self, args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        dispatch::run(self, &args, out, err)
    }

    /// `Name`, `Version` and `Description` lines.
    #[must_use]
    pub fn info(&self) -> String {
        format!(
            "Name: {}\nVersion: {}\nDescription: {}\n",
            self.name, self.version, self.description
        )
    }

    /// Releases every command and option.
    pub fn destroy(mut self) {
        self.registry.clear();
        tracing::trace!(app = %self.name, "application destroyed");
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn command(&self, id: CommandId) -> Option<&Command> {
        self.registry.command(id)
    }

    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&Opt> {
        self.registry.option(id)
    }

    #[must_use]
    pub fn has_default_handler(&self) -> bool {
        self.default_handler.is_some()
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("registry", &self.registry)
            .field("default_handler", &self.default_handler.is_some())
            .finish_non_exhaustive()
    }
}
