//! Option declarations and their parse-time state.

use crate::constants::FLAG_VALUE;
use crate::core::arena::Handle;
use crate::core::names::NameSet;
use crate::state::command::CommandId;

/// Handle to a declared [`Opt`].
pub type OptionId = Handle<Opt>;

/// Whether an option stands alone or consumes the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionKind {
    /// Presence alone carries meaning; the value reads `"true"`.
    #[default]
    Flag,
    /// The next token is taken as the value.
    Value,
}

/// A named, parseable argument.
///
/// Built with [`Opt::flag`] or [`Opt::value`] and handed to the application,
/// which records the owning command. `is_present` and `value` are
/// overwritten every time the owning command's arguments are parsed.
#[derive(Debug, Clone)]
pub struct Opt {
    names: NameSet,
    help: String,
    kind: OptionKind,
    required: bool,
    owner: Option<CommandId>,
    present: bool,
    value: String,
}

impl Opt {
    fn new(names: &str, help: &str, kind: OptionKind) -> Self {
        Self {
            names: NameSet::parse(names),
            help: help.to_string(),
            kind,
            required: false,
            owner: None,
            present: false,
            value: String::new(),
        }
    }

    /// Declares a flag option.
    #[must_use]
    pub fn flag(names: &str, help: &str) -> Self {
        Self::new(names, help, OptionKind::Flag)
    }

    /// Declares an option that takes a value.
    #[must_use]
    pub fn value(names: &str, help: &str) -> Self {
        Self::new(names, help, OptionKind::Value)
    }

    /// Marks the option as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The option's aliases.
    #[must_use]
    pub fn names(&self) -> &NameSet {
        &self.names
    }

    /// Help text shown in command help.
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    #[must_use]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    #[must_use]
    pub fn is_flag(&self) -> bool {
        self.kind == OptionKind::Flag
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Owning command, or `None` for a global option.
    #[must_use]
    pub fn owner(&self) -> Option<CommandId> {
        self.owner
    }

    /// Whether the last parse saw this option.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Value from the last parse. Empty when absent, `"true"` for a present flag.
    #[must_use]
    pub fn value_str(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_owner(&mut self, owner: Option<CommandId>) {
        self.owner = owner;
    }

    pub(crate) fn reset(&mut self) {
        self.present = false;
        self.value.clear();
    }

    pub(crate) fn mark_flag(&mut self) {
        self.present = true;
        self.value.clear();
        self.value.push_str(FLAG_VALUE);
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.present = true;
        self.value.clear();
        self.value.push_str(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let path = Opt::value("-p, --path", "Path to inspect").required();
        assert_eq!(path.kind(), OptionKind::Value);
        assert!(path.is_required());
        assert!(!path.is_flag());
        assert!(path.names().contains("--path"));
        assert_eq!(path.owner(), None);

        let verbose = Opt::flag("-v, --verbose", "Show more");
        assert!(verbose.is_flag());
        assert!(!verbose.is_required());
    }

    #[test]
    fn test_state_transitions() {
        let mut opt = Opt::flag("-l", "");
        assert!(!opt.is_present());
        assert_eq!(opt.value_str(), "");

        opt.mark_flag();
        assert!(opt.is_present());
        assert_eq!(opt.value_str(), "true");

        opt.reset();
        assert!(!opt.is_present());
        assert_eq!(opt.value_str(), "");

        opt.set_value("file.txt");
        assert_eq!(opt.value_str(), "file.txt");
    }
}
