//! Command registry - static command registration, lookup, and dispatch.

use anyhow::ensure;

use crate::error::{AtError, NodeResult};
use crate::user::command::{AtCommand, AtContext, OpSet};
use crate::user::commands;

/// Static array of all registered user commands.
///
/// To add a new command:
/// 1. Create a new file in `commands/` directory
/// 2. Implement the `AtCommand` trait
/// 3. Export a static instance
/// 4. Add it to this array
static USER_COMMANDS: &[&dyn AtCommand] = &[
    &commands::DRY,
    &commands::WET,
];

/// All registered commands, in registration order.
pub fn user_commands() -> &'static [&'static dyn AtCommand] {
    USER_COMMANDS
}

/// Number of registered commands, derived from the table itself.
pub fn command_count() -> u8 {
    USER_COMMANDS.len() as u8
}

/// Find a command by exact name.
pub fn find_command(name: &str) -> Option<&'static dyn AtCommand> {
    USER_COMMANDS.iter().copied().find(|cmd| cmd.name() == name)
}

/// Operation the host parser selected for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtOp<'a> {
    /// `AT+CMD?`
    Query,
    /// `AT+CMD=<value>`, carrying the raw argument string.
    Set(&'a str),
    /// Bare `AT+CMD`.
    Execute,
}

impl AtOp<'_> {
    fn required(self) -> OpSet {
        match self {
            AtOp::Query => OpSet::QUERY,
            AtOp::Set(_) => OpSet::SET,
            AtOp::Execute => OpSet::EXECUTE,
        }
    }
}

/// Dispatch one parsed operation.
///
/// This is the contract boundary toward the host AT parser: resolve
/// `name`, check the command's operation mask, run the handler. Unknown
/// names and unsupported operations both report
/// [`AtError::NotSupported`].
pub fn perform(name: &str, op: AtOp, ctx: &mut AtContext) -> Result<(), AtError> {
    let Some(cmd) = find_command(name) else {
        debug!("unknown user AT command: {name}");
        return Err(AtError::NotSupported);
    };
    if !cmd.ops().contains(op.required()) {
        return Err(AtError::NotSupported);
    }
    match op {
        AtOp::Query => cmd.query(ctx),
        AtOp::Set(value) => cmd.set(ctx, value),
        AtOp::Execute => cmd.execute(ctx),
    }
}

/// Check table invariants before publishing it to the host registry.
///
/// Names must be unique and every command must expose at least one
/// operation.
pub fn validate() -> NodeResult<()> {
    for (i, cmd) in USER_COMMANDS.iter().enumerate() {
        ensure!(
            !cmd.ops().is_empty(),
            "command {} exposes no operations",
            cmd.name()
        );
        for other in &USER_COMMANDS[..i] {
            ensure!(
                other.name() != cmd.name(),
                "duplicate command name: {}",
                cmd.name()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_derived_from_the_table() {
        assert_eq!(command_count() as usize, user_commands().len());
    }

    #[test]
    fn table_passes_validation() {
        validate().unwrap();
    }

    #[test]
    fn lookup_is_exact() {
        assert!(find_command("+DRY").is_some());
        assert!(find_command("+WET").is_some());
        assert!(find_command("+dry").is_none());
        assert!(find_command("DRY").is_none());
        assert!(find_command("+DRYX").is_none());
    }

    #[test]
    fn every_command_declares_its_operations() {
        for cmd in user_commands() {
            assert!(!cmd.ops().is_empty(), "{} has no operations", cmd.name());
            assert!(!cmd.help().is_empty());
        }
    }
}
