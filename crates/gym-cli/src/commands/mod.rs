//! Interactive and one-shot commands
//!
//! Every action reports repository failures on the console and returns
//! normally; only console I/O errors propagate.

pub mod list;
pub mod members;
pub mod menu;
pub mod schedules;
pub mod trainers;
pub mod workouts;

use crate::console::Console;
use gym_core::GymError;
use std::io::{self, BufRead, Write};

/// Print a repository failure without ending the session
pub(crate) fn warn<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    context: &str,
    err: &GymError,
) -> io::Result<()> {
    tracing::debug!(context, recoverable = err.is_recoverable(), "action failed");
    console.say(format!("⚠ {}: {}", context, err))
}
