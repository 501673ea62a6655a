//! Help text rendering.
//!
//! Reads the registry only. Alias columns are padded to the longest alias
//! string in the listing.

use std::fmt::Write as _;

use crate::app::App;
use crate::constants::{
    HELP_COLUMN_GAP, HELP_INDENT, HELP_KIND_FLAG, HELP_KIND_VALUE, HELP_REQUIRED_SUFFIX,
};
use crate::state::{CommandId, Opt};

/// Application-level usage: header, usage line and the command list.
#[must_use]
pub fn app_help(app: &App) -> String {
    let mut text = String::with_capacity(512);

    let _ = writeln!(text, "{} - {}", app.name(), app.version());
    let _ = writeln!(text, "{}\n", app.description());

    let _ = writeln!(text, "USAGE");
    let _ = writeln!(text, "{HELP_INDENT}{} <command> [options]\n", app.name());

    let registry = app.registry();
    if registry.command_count() > 0 {
        let _ = writeln!(text, "COMMANDS");
        let width = registry
            .commands()
            .map(|(_, cmd)| cmd.names().as_str().len())
            .max()
            .unwrap_or(0);

        for (_, cmd) in registry.commands() {
            let _ = writeln!(
                text,
                "{HELP_INDENT}{:<width$}{HELP_COLUMN_GAP}{}",
                cmd.names().as_str(),
                cmd.help()
            );
        }
        text.push('\n');
    }

    let _ = writeln!(
        text,
        "Run '{} <command> --help' for more information on a command.",
        app.name()
    );
    text
}

/// Command-level usage: header and the command's options.
///
/// Returns an empty string for a handle the application does not hold.
#[must_use]
pub fn command_help(app: &App, command: CommandId) -> String {
    let Some(cmd) = app.command(command) else {
        return String::new();
    };

    let mut text = String::with_capacity(256);
    let _ = writeln!(
        text,
        "{} {} - {}\n",
        app.name(),
        cmd.names().as_str(),
        cmd.help()
    );

    let options: Vec<&Opt> = app
        .registry()
        .options_for(Some(command))
        .into_iter()
        .filter_map(|id| app.option(id))
        .collect();

    if !options.is_empty() {
        let _ = writeln!(text, "OPTIONS");
        let width = options
            .iter()
            .map(|opt| opt.names().as_str().len())
            .max()
            .unwrap_or(0);

        for opt in options {
            let kind = if opt.is_flag() {
                HELP_KIND_FLAG
            } else {
                HELP_KIND_VALUE
            };
            let required = if opt.is_required() {
                HELP_REQUIRED_SUFFIX
            } else {
                ""
            };
            let _ = writeln!(
                text,
                "{HELP_INDENT}{:<width$}{HELP_COLUMN_GAP}{kind}{HELP_COLUMN_GAP}{}{required}",
                opt.names().as_str(),
                opt.help()
            );
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::Matches;

    fn noop(_: &Matches<'_>) -> i32 {
        0
    }

    fn filetool() -> (App, CommandId) {
        let mut app = App::new("filetool", "1.0.0", "A file utility");
        app.add_command("info, i", noop, "Display information").unwrap();
        let count = app.add_command("count, c", noop, "Count things").unwrap();
        app.add_command_option(count, Opt::value("-p, --path", "File to analyze").required())
            .unwrap();
        app.add_command_option(count, Opt::flag("-l", "Count lines only"))
            .unwrap();
        (app, count)
    }

    #[test]
    fn test_app_help_layout() {
        let (app, _) = filetool();
        let expected = "\
filetool - 1.0.0
A file utility

USAGE
  filetool <command> [options]

COMMANDS
  info, i     Display information
  count, c    Count things

Run 'filetool <command> --help' for more information on a command.
";
        assert_eq!(app_help(&app), expected);
    }

    #[test]
    fn test_app_help_without_commands() {
        let app = App::new("bare", "0.1.0", "Nothing here");
        let help = app_help(&app);
        assert!(!help.contains("COMMANDS"));
        assert!(help.ends_with("Run 'bare <command> --help' for more information on a command.\n"));
    }

    #[test]
    fn test_command_help_layout() {
        let (app, count) = filetool();
        let expected = "\
filetool count, c - Count things

OPTIONS
  -p, --path    <value>    File to analyze (required)
  -l            <flag>     Count lines only

";
        assert_eq!(command_help(&app, count), expected);
    }

    #[test]
    fn test_command_help_without_options() {
        let (app, _) = filetool();
        let info = app.registry().find_command("info").unwrap();
        assert_eq!(command_help(&app, info), "filetool info, i - Display information\n\n");
    }
}
