//! Fixed blocks of terminal text: errors, warnings, usage, standings.

use std::io::{self, Write};

use showdown_engine::session::Standing;

use crate::formatters::format_standing;

pub fn write_error(err: &mut dyn Write, msg: &str) -> io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Prefixes `message` with `WARNING:`.
pub fn display_warning(err: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Short usage shown after an argument error.
pub fn write_usage(err: &mut dyn Write, commands: &[&str]) -> io::Result<()> {
    writeln!(err, "Showdown Poker CLI")?;
    writeln!(err, "Usage: showdown <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for command in commands {
        writeln!(err, "  {}", command)?;
    }
    writeln!(err, "\nFor full help, run: showdown --help")
}

pub fn write_standings(out: &mut dyn Write, standings: &[Standing]) -> io::Result<()> {
    writeln!(out, "\n=== FINAL STANDINGS ===")?;
    for standing in standings {
        writeln!(out, "{}", format_standing(standing))?;
    }
    Ok(())
}
