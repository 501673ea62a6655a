//! Library-wide constants.
//!
//! Default registry sizing, the reserved tokens the dispatcher intercepts,
//! and the fixed pieces of text used by help output.

// === Library Metadata ===

/// Library name (from Cargo.toml).
pub const LIB_NAME: &str = env!("CARGO_PKG_NAME");
/// Current library version (from Cargo.toml).
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Registry Sizing ===

/// Default maximum number of commands one application can declare.
pub const MAX_COMMAND_COUNT: usize = 64;
/// Default maximum number of options one application can declare.
pub const MAX_OPTION_COUNT: usize = 64;
/// Size of an option's value buffer, terminator slot included.
///
/// A value must be strictly shorter than this many bytes.
pub const VALUE_CAPACITY: usize = 256;

// === Reserved Tokens ===

/// Tokens that request help, at top level or after a command word.
pub const HELP_TOKENS: [&str; 2] = ["--help", "-h"];
/// Tokens that request the version line. Only recognised as the first word.
pub const VERSION_TOKENS: [&str; 2] = ["--version", "-v"];

/// Separator between the tokens of an alias string.
pub const NAME_SEPARATOR: char = ',';
/// Prefix that marks a token as an option.
pub const OPTION_PREFIX: char = '-';

/// Value stored for a flag option that was present.
pub const FLAG_VALUE: &str = "true";

// === Exit Codes ===

/// Exit code for a successful run (also `--help`).
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for usage and parse errors.
pub const EXIT_USAGE: i32 = 1;

// === Help Layout ===

/// Gap between the padded alias column and the next column.
pub const HELP_COLUMN_GAP: &str = "    ";
/// Indent applied to every listed command or option.
pub const HELP_INDENT: &str = "  ";
/// Kind marker shown for flag options.
pub const HELP_KIND_FLAG: &str = "<flag> ";
/// Kind marker shown for value options.
pub const HELP_KIND_VALUE: &str = "<value>";
/// Suffix shown after the help text of a required option.
pub const HELP_REQUIRED_SUFFIX: &str = " (required)";

// === Configuration ===

/// File name looked up inside the per-application config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
