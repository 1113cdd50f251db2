//! Configuration command handler.
//!
//! Prints every setting with the layer it came from (`default`, `file` or
//! `env`; flags only exist for `play`).
//!
//! ```json
//! {
//!   "hands": {
//!     "value": 3,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    for (name, value) in config::unknown_env_vars() {
        ui::display_warning(err, &format!("ignoring unknown setting {}={}", name, value))?;
    }

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "models": { "value": config.models, "source": sources.models },
        "hands": { "value": config.hands, "source": sources.hands },
        "elimination_count": {
            "value": config.elimination_count,
            "source": sources.elimination_count,
        },
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "small_blind": { "value": config.small_blind, "source": sources.small_blind },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "min_raise": { "value": config.min_raise, "source": sources.min_raise },
        "seed": { "value": config.seed, "source": sources.seed },
        "timeout_ms": { "value": config.timeout_ms, "source": sources.timeout_ms },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
