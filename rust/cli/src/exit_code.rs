//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, bad configuration, or an aborted session.
pub const ERROR: i32 = 2;
