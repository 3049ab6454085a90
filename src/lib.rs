//! User AT-command extension for a LoRaWAN soil-moisture sensor node.
//!
//! This crate owns the vendor calibration commands (`AT+DRY`, `AT+WET`)
//! that the node's AT parser exposes for tuning the soil probe's dry and
//! wet reference readings. The parser resolves a command name against the
//! table in [`user::registry`] and invokes the matching query, set, or
//! execute handler; responses fan out through [`console::FanoutWriter`] to
//! the serial channel and, while connected, the wireless channel.
//!
//! The AT tokenizer, the calibration measurement itself, and the
//! transports stay in the host firmware, reached through the
//! [`calib::Calibration`] and [`console::LinkState`] seams.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

pub mod config;

pub mod error;

pub mod calib;

#[macro_use]
pub mod console;

pub mod user;
pub mod utils;

pub use calib::{CalibPoint, Calibration};
pub use console::{FanoutWriter, Link, LinkState};
pub use error::{AtError, NodeResult};
pub use user::{AtCommand, AtContext, AtOp, OpSet};
