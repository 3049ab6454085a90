//! User AT-command system - modular command architecture.
//!
//! This module provides the vendor command table the host AT parser
//! consumes, and the framework for defining the commands in it.
//!
//! # Architecture
//!
//! - `command.rs` - Defines the `AtCommand` trait, operation mask, and
//!   execution context
//! - `registry.rs` - Static command registration, lookup, and dispatch
//! - `commands/` - Individual command implementations
//!
//! # Adding a New Command
//!
//! 1. Create a new file in `commands/` (e.g., `commands/mycommand.rs`)
//! 2. Define a struct and implement the `AtCommand` trait
//! 3. Export a static instance: `pub static MYCOMMAND: MyCommand = ...;`
//! 4. Add to `commands/mod.rs`: `pub mod mycommand;` and
//!    `pub use mycommand::MYCOMMAND;`
//! 5. Register in `registry.rs` USER_COMMANDS array: `&commands::MYCOMMAND,`

pub mod command;
pub mod commands;
pub mod registry;

pub use command::{AtCommand, AtContext, OpSet};
pub use registry::{AtOp, perform};
