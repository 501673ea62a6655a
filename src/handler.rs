//! Command handler interface.

use crate::matches::Matches;

/// Something a command (or the default route) runs once its options are resolved.
///
/// The returned integer becomes the process exit code unchanged. Any
/// `Fn(&Matches) -> i32` closure or function is a handler.
pub trait Handler {
    /// Runs the command against the resolved options.
    fn execute(&self, matches: &Matches<'_>) -> i32;
}

impl<F> Handler for F
where
    F: Fn(&Matches<'_>) -> i32,
{
    fn execute(&self, matches: &Matches<'_>) -> i32 {
        self(matches)
    }
}
