//! AtCommand trait, operation mask, and execution context.

use bitflags::bitflags;

use crate::calib::Calibration;
use crate::console::FanoutWriter;
use crate::error::AtError;

bitflags! {
    /// Operations a command exposes to the AT parser.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpSet: u8 {
        /// `AT+CMD?`
        const QUERY = 1 << 0;
        /// `AT+CMD=<value>`
        const SET = 1 << 1;
        /// `AT+CMD`
        const EXECUTE = 1 << 2;
    }
}

/// Command execution context.
///
/// Carries the report writer and the calibration seam so handlers stay
/// free of globals and run against stubs in tests.
pub struct AtContext<'a, 'w> {
    /// Fan-out writer for report lines.
    pub out: &'a mut FanoutWriter<'w>,
    /// Host calibration subsystem.
    pub calib: &'a mut dyn Calibration,
}

/// Trait for implementing user AT commands.
///
/// Commands are registered statically and looked up by name. An operation
/// left out of [`ops`](AtCommand::ops) keeps its default body and signals
/// "not supported for this command" to the host registry.
pub trait AtCommand: Sync {
    /// Command name as the parser matches it, e.g. `"+DRY"`.
    fn name(&self) -> &'static str;

    /// One-line help text (shown in the parser's command listing).
    fn help(&self) -> &'static str;

    /// Operations this command supports.
    fn ops(&self) -> OpSet;

    /// Handle `AT+CMD?`.
    fn query(&self, _ctx: &mut AtContext) -> Result<(), AtError> {
        Err(AtError::NotSupported)
    }

    /// Handle `AT+CMD=<value>` with the raw argument string.
    fn set(&self, _ctx: &mut AtContext, _value: &str) -> Result<(), AtError> {
        Err(AtError::NotSupported)
    }

    /// Handle bare `AT+CMD`.
    fn execute(&self, _ctx: &mut AtContext) -> Result<(), AtError> {
        Err(AtError::NotSupported)
    }
}
