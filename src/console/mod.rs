//! Console module - fan-out output toward the node's report channels.

#[macro_use]
pub mod print;

pub use print::{FanoutWriter, Link, LinkState};
