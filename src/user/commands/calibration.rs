//! Soil probe calibration commands (`AT+DRY`, `AT+WET`).
//!
//! Both commands share one implementation parameterized by the
//! calibration point. Query reports the stored reference reading, set
//! stores a value in range, and the bare execute form runs a blocking
//! measurement through the host calibration subsystem.

use crate::calib::CalibPoint;
use crate::config::{CALIB_FAILED, CALIB_MAX, CALIB_MIN};
use crate::error::AtError;
use crate::user::command::{AtCommand, AtContext, OpSet};
use crate::utils::parse::parse_long;

/// Dry calibration command instance.
pub static DRY: CalibCommand =
    CalibCommand::new(CalibPoint::Dry, "+DRY", "Get/Set dry calibration value");

/// Wet calibration command instance.
pub static WET: CalibCommand =
    CalibCommand::new(CalibPoint::Wet, "+WET", "Get/Set wet calibration value");

/// Calibration command implementation, shared by `+DRY` and `+WET`.
pub struct CalibCommand {
    point: CalibPoint,
    name: &'static str,
    help: &'static str,
}

impl CalibCommand {
    const fn new(point: CalibPoint, name: &'static str, help: &'static str) -> Self {
        Self { point, name, help }
    }
}

impl AtCommand for CalibCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn help(&self) -> &'static str {
        self.help
    }

    fn ops(&self) -> OpSet {
        OpSet::QUERY | OpSet::SET | OpSet::EXECUTE
    }

    fn query(&self, ctx: &mut AtContext) -> Result<(), AtError> {
        let value = ctx.calib.get(self.point);
        at_print!(ctx.out, "{} Calibration Value: {}", self.point.label(), value);
        Ok(())
    }

    fn set(&self, ctx: &mut AtContext, value: &str) -> Result<(), AtError> {
        // strtol-style parse: unparsable input becomes 0, which is in range
        let parsed = parse_long(value);
        if !(CALIB_MIN..=CALIB_MAX).contains(&parsed) {
            warn!(
                "{} calibration value out of range: {parsed}",
                self.point.label()
            );
            return Err(AtError::ParamValue);
        }
        ctx.calib.set(self.point, parsed as u16);
        Ok(())
    }

    fn execute(&self, ctx: &mut AtContext) -> Result<(), AtError> {
        at_println!(ctx.out, "Start {} Calibration", self.point.label());
        let new_val = ctx.calib.start(self.point);
        if new_val == CALIB_FAILED {
            at_print!(ctx.out, "Calibration failed, please try again");
        } else {
            at_print!(
                ctx.out,
                "New {} Calibration Value: {}",
                self.point.label(),
                new_val
            );
        }
        // A failed run reports through the printed text; the status stays OK
        Ok(())
    }
}
