//! Fan-out report writer and its print macros.
//!
//! AT responses always go to the primary serial channel and are mirrored
//! to the secondary wireless channel only while that link is up. The
//! connection flag is owned by the transport; this module only reads it.

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicBool, Ordering};

/// Read-only view of a wireless link's connection state.
pub trait LinkState: Sync {
    fn is_connected(&self) -> bool;
}

/// Lets the host hand over its existing connection flag unchanged.
impl LinkState for AtomicBool {
    fn is_connected(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// A secondary output channel gated by its link state.
pub struct Link<'a> {
    channel: &'a mut dyn Write,
    state: &'a dyn LinkState,
}

impl<'a> Link<'a> {
    pub fn new(channel: &'a mut dyn Write, state: &'a dyn LinkState) -> Self {
        Self { channel, state }
    }
}

/// Writer that fans each report out to every connected channel.
///
/// The primary channel is written unconditionally; the secondary channel
/// only while its link reports connected. A disconnected link is skipped
/// silently, never an error. The two writes are not atomic with respect
/// to each other.
pub struct FanoutWriter<'a> {
    primary: &'a mut dyn Write,
    secondary: Option<Link<'a>>,
}

impl<'a> FanoutWriter<'a> {
    /// Writer over the primary channel only.
    pub fn new(primary: &'a mut dyn Write) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Writer that also mirrors to `link` while it is connected.
    pub fn with_secondary(primary: &'a mut dyn Write, link: Link<'a>) -> Self {
        Self {
            primary,
            secondary: Some(link),
        }
    }

    /// Write formatted output to every connected channel.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        // Ignore write errors - reporting must not panic the node
        let _ = self.primary.write_fmt(args);
        if let Some(link) = self.secondary.as_mut() {
            if link.state.is_connected() {
                let _ = link.channel.write_fmt(args);
            }
        }
    }
}

/// Write an AT report through a [`FanoutWriter`].
#[macro_export]
macro_rules! at_print {
    ($out:expr, $($arg:tt)*) => {
        $out.write_fmt(format_args!($($arg)*))
    };
}

/// Write an AT report line with trailing newline.
#[macro_export]
macro_rules! at_println {
    ($out:expr) => ($crate::at_print!($out, "\n"));
    ($out:expr, $($arg:tt)*) => ($crate::at_print!($out, "{}\n", format_args!($($arg)*)));
}
