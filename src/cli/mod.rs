//! Command-line interface of the `filetool` demo.
//!
//! Declares the commands and their options on a [`clic::App`].

pub mod commands;

use clic::{App, Opt, Result, Settings};

/// Program name shown in help and used for the config directory.
pub const APP_NAME: &str = "filetool";
/// Version shown by `--version`.
pub const APP_VERSION: &str = "1.0.0";
/// One-line description shown in app help.
pub const APP_SUMMARY: &str = "A file utility showcasing the clic library";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "FILETOOL_LOG";
/// Filter used when neither the environment nor the settings give one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Builds the application with all commands declared.
///
/// # Errors
///
/// Fails when `settings` limits are invalid or too small for the declarations.
pub fn build(settings: &Settings) -> Result<App> {
    let mut app = App::with_limits(APP_NAME, APP_VERSION, APP_SUMMARY, settings.limits)?;

    // `info` command
    let info = app.add_command(
        "info, i",
        commands::info,
        "Display information about a file or directory",
    )?;
    app.add_command_option(info, Opt::value("-p, --path", "Path to inspect").required())?;
    app.add_command_option(info, Opt::flag("-v, --verbose", "Show extended information"))?;

    // `count` command
    let count = app.add_command(
        "count, c",
        commands::count,
        "Count lines, words, and characters",
    )?;
    app.add_command_option(count, Opt::value("-p, --path", "File to analyze").required())?;
    app.add_command_option(count, Opt::flag("-l, --lines", "Count lines only"))?;
    app.add_command_option(count, Opt::flag("-w, --words", "Count words only"))?;
    app.add_command_option(count, Opt::flag("-c, --chars", "Count characters only"))?;

    Ok(app)
}
