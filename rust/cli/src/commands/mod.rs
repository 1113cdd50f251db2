//! Subcommand handlers. Each writes its normal output to `out` and returns
//! a [`crate::CliError`] on failure; `run` turns that into an exit code.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::{HumanIo, handle_play_command};
