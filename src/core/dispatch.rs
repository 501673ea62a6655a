//! Argument parsing and dispatch.
//!
//! One call to [`run`] walks one argument vector:
//!
//! 1. No command word: run the default handler when the application has no
//!    commands, otherwise print app help and fail.
//! 2. `--help`/`-h` prints app help and succeeds; `--version`/`-v` prints
//!    the version line and succeeds.
//! 3. The first word selects a command by alias. An unknown word goes to the
//!    default handler with the global options, or fails.
//! 4. The rest is parsed against that command's options only, so the same
//!    alias can mean different things under different commands.
//! 5. Required options are checked, then the handler runs and its return
//!    value becomes the exit code.

use std::io::{self, Write};

use crate::app::App;
use crate::constants::{EXIT_SUCCESS, EXIT_USAGE, HELP_TOKENS, OPTION_PREFIX, VERSION_TOKENS};
use crate::core::registry::Registry;
use crate::error::ParseError;
use crate::help;
use crate::matches::Matches;
use crate::state::{CommandId, OptionId};

/// How a command's argument parse ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every token was consumed and required options are present.
    Complete,
    /// A help token was found; the remaining tokens were not examined.
    Help,
}

fn is_option_token(token: &str) -> bool {
    token.starts_with(OPTION_PREFIX)
}

fn is_help_token(token: &str) -> bool {
    HELP_TOKENS.contains(&token)
}

fn is_version_token(token: &str) -> bool {
    VERSION_TOKENS.contains(&token)
}

/// Parses `args` (the tokens after the command word) into `options`.
///
/// Every option in `options` is reset first, so state from an earlier parse
/// never leaks into this one. Flags get the value `"true"`; value options
/// take the next token, which must not look like an option and must be at
/// most `max_value_len` bytes.
///
/// # Errors
///
/// Returns the [`ParseError`] describing the first malformed token, or
/// [`ParseError::MissingRequired`] for the first required option not given.
pub fn parse_command_args<S: AsRef<str>>(
    registry: &mut Registry,
    options: &[OptionId],
    args: &[S],
    max_value_len: usize,
) -> Result<ParseOutcome, ParseError> {
    for &id in options {
        if let Some(opt) = registry.option_mut(id) {
            opt.reset();
        }
    }

    let mut tokens = args.iter().map(AsRef::<str>::as_ref);
    while let Some(token) = tokens.next() {
        if is_help_token(token) {
            return Ok(ParseOutcome::Help);
        }

        if !is_option_token(token) {
            return Err(ParseError::UnexpectedArgument(token.to_string()));
        }

        let Some(id) = options.iter().copied().find(|&id| {
            registry
                .option(id)
                .is_some_and(|opt| opt.names().contains(token))
        }) else {
            return Err(ParseError::UnknownOption(token.to_string()));
        };
        let Some(opt) = registry.option_mut(id) else {
            return Err(ParseError::UnknownOption(token.to_string()));
        };

        if opt.is_flag() {
            opt.mark_flag();
            tracing::trace!(option = token, "flag set");
            continue;
        }

        let Some(value) = tokens.next() else {
            return Err(ParseError::MissingValue(token.to_string()));
        };
        if is_option_token(value) {
            return Err(ParseError::ValueLooksLikeOption {
                option: token.to_string(),
                got: value.to_string(),
            });
        }
        if value.len() > max_value_len {
            return Err(ParseError::ValueTooLong {
                option: token.to_string(),
                max: max_value_len,
            });
        }

        opt.set_value(value);
        tracing::trace!(option = token, value, "value set");
    }

    for &id in options {
        if let Some(opt) = registry.option(id) {
            if opt.is_required() && !opt.is_present() {
                return Err(ParseError::MissingRequired(opt.names().as_str().to_string()));
            }
        }
    }

    Ok(ParseOutcome::Complete)
}

/// Runs one invocation. `args[0]` is the program name.
///
/// A failed write to `out` or `err` ends the invocation with a usage exit code.
pub(crate) fn run(app: &mut App, args: &[String], out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match dispatch(app, args, out, err) {
        Ok(code) => code,
        Err(error) => {
            tracing::warn!(%error, "failed to write output");
            EXIT_USAGE
        }
    }
}

fn dispatch(
    app: &mut App,
    args: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<i32> {
    let Some(first) = args.get(1) else {
        return run_without_command(app, out);
    };

    if is_help_token(first) {
        out.write_all(help::app_help(app).as_bytes())?;
        return Ok(EXIT_SUCCESS);
    }

    if is_version_token(first) {
        writeln!(out, "{} {}", app.name, app.version)?;
        return Ok(EXIT_SUCCESS);
    }

    match app.registry.find_command(first) {
        Some(command) => run_command(app, command, &args[2..], out, err),
        None if app.default_handler.is_some() => {
            tracing::debug!(word = %first, "no command matched, using default handler");
            Ok(run_default(app, true))
        }
        None => {
            report(err, &ParseError::UnknownCommand(first.clone()))?;
            out.write_all(help::app_help(app).as_bytes())?;
            Ok(EXIT_USAGE)
        }
    }
}

fn run_without_command(app: &App, out: &mut dyn Write) -> io::Result<i32> {
    if app.registry.command_count() == 0 && app.default_handler.is_some() {
        tracing::debug!("no arguments, using default handler");
        return Ok(run_default(app, false));
    }

    out.write_all(help::app_help(app).as_bytes())?;
    Ok(EXIT_USAGE)
}

/// Runs the default handler, with the global options or with none.
///
/// Global options are handed over as they are; no tokens are parsed on
/// this route.
fn run_default(app: &App, with_globals: bool) -> i32 {
    let Some(handler) = app.default_handler.as_deref() else {
        return EXIT_USAGE;
    };

    let options = if with_globals {
        app.registry
            .options_for(None)
            .into_iter()
            .filter_map(|id| app.registry.option(id))
            .collect()
    } else {
        Vec::new()
    };

    let code = handler.execute(&Matches::new(options));
    tracing::debug!(code, "default handler finished");
    code
}

fn run_command(
    app: &mut App,
    command: CommandId,
    args: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<i32> {
    let options = app.registry.options_for(Some(command));
    let max_value_len = app.limits.max_value_len();

    match parse_command_args(&mut app.registry, &options, args, max_value_len) {
        Ok(ParseOutcome::Help) => {
            out.write_all(help::command_help(app, command).as_bytes())?;
            Ok(EXIT_SUCCESS)
        }
        Ok(ParseOutcome::Complete) => {
            let Some(cmd) = app.registry.command(command) else {
                return Ok(EXIT_USAGE);
            };
            let resolved = options
                .iter()
                .filter_map(|&id| app.registry.option(id))
                .collect();

            tracing::debug!(command = %cmd.names(), "dispatching");
            let code = cmd.handler().execute(&Matches::new(resolved));
            tracing::debug!(command = %cmd.names(), code, "handler finished");
            Ok(code)
        }
        Err(error) => {
            report(err, &error)?;
            Ok(EXIT_USAGE)
        }
    }
}

fn report(err: &mut dyn Write, error: &ParseError) -> io::Result<()> {
    tracing::debug!(%error, "invocation rejected");
    writeln!(err, "error: {error}")
}
