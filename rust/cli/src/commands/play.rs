//! # Play Command
//!
//! Runs a session: one seat per configured model (`Player_1`, `Player_2`,
//! ...), plus an interactive `Human` seat at a seeded random position when
//! requested. Every finished hand is printed as it completes (transcript
//! text, or one JSON line with `--json`), followed by the final standings.

use std::io::{BufRead, Write};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde_json::json;
use tracing::info;

use showdown_ai::{ModelAgent, TimeoutSource, create_source};
use showdown_engine::agent::Agent;
use showdown_engine::session::{SessionConfig, simulate};
use showdown_engine::table::HandSummary;

use crate::cli::PlayArgs;
use crate::config::{self, Config, Overrides};
use crate::error::CliError;
use crate::human::HumanAgent;
use crate::ui;

pub const HUMAN_SEAT_NAME: &str = "Human";

/// Terminal used by the human seat, if there is one.
pub struct HumanIo {
    pub input: Box<dyn BufRead>,
    pub output: Box<dyn Write>,
}

pub fn handle_play_command(
    args: &PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    human_io: HumanIo,
) -> Result<(), CliError> {
    let resolved = config::load_with_overrides(&overrides_from(args))?;
    let cfg = resolved.config;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    let roster = build_roster(&cfg, seed, args.human_player.then_some(human_io))?;
    if roster.len() < 2 {
        ui::display_warning(err, "fewer than two seats; no hands will be played")?;
    }

    if !args.json {
        writeln!(
            out,
            "play: seats={} hands={} seed={}",
            roster.len(),
            cfg.hands,
            seed
        )?;
    }
    info!(seats = roster.len(), hands = cfg.hands, seed, "starting session");

    let session_config = SessionConfig {
        seed: Some(seed),
        ..cfg.session_config()
    };

    let mut written: std::io::Result<()> = Ok(());
    let report = simulate(session_config, roster, |summary| {
        if written.is_ok() {
            written = write_hand(out, summary, args.json);
        }
    });
    written?;
    let report = report?;

    if args.json {
        let line = json!({ "report": report });
        writeln!(out, "{}", line)?;
    } else {
        ui::write_standings(out, &report.standings)?;
    }
    Ok(())
}

fn overrides_from(args: &PlayArgs) -> Overrides {
    Overrides {
        models: args.models.clone(),
        hands: args.hands,
        elimination_count: args.elimination_count,
        starting_stack: args.starting_stack,
        small_blind: args.small_blind,
        big_blind: args.big_blind,
        min_raise: args.min_raise,
        seed: args.seed,
        timeout_ms: args.timeout_ms,
    }
}

/// Seats in play order. Model seeds and the human position derive from
/// `seed`, so a seeded run is reproducible.
fn build_roster(
    cfg: &Config,
    seed: u64,
    human_io: Option<HumanIo>,
) -> Result<Vec<(String, Box<dyn Agent>)>, CliError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut roster: Vec<(String, Box<dyn Agent>)> = Vec::with_capacity(cfg.models.len() + 1);

    for (i, model) in cfg.models.iter().enumerate() {
        let source = create_source(model, rng.random())?;
        let agent: Box<dyn Agent> = match cfg.timeout_ms {
            Some(ms) => Box::new(ModelAgent::new(Box::new(TimeoutSource::new(
                source,
                Duration::from_millis(ms),
            )))),
            None => Box::new(ModelAgent::new(source)),
        };
        roster.push((format!("Player_{}", i + 1), agent));
    }

    if let Some(io) = human_io {
        let position = rng.random_range(0..=roster.len());
        let human: Box<dyn Agent> = Box::new(HumanAgent::new(io.input, io.output));
        roster.insert(position, (HUMAN_SEAT_NAME.to_string(), human));
    }
    Ok(roster)
}

fn write_hand(out: &mut dyn Write, summary: &HandSummary, json: bool) -> std::io::Result<()> {
    if json {
        let line = summary.to_json().map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)
    } else {
        writeln!(out, "\n{}", summary.transcript_text().trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_engine::agent::DecisionSource;
    use std::io::Cursor;

    fn no_terminal() -> HumanIo {
        HumanIo {
            input: Box::new(Cursor::new(Vec::new())),
            output: Box::new(std::io::sink()),
        }
    }

    fn config(models: &[&str]) -> Config {
        Config {
            models: models.iter().map(|m| m.to_string()).collect(),
            ..Config::default()
        }
    }

    #[test]
    fn model_seats_are_numbered_in_order() {
        let roster = build_roster(&config(&["baseline", "random"]), 1, None).unwrap();
        let names: Vec<&str> = roster.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Player_1", "Player_2"]);
        assert_eq!(
            roster[1].1.source(),
            DecisionSource::Model("random".into())
        );
    }

    #[test]
    fn human_position_follows_the_seed() {
        let position = |seed| {
            build_roster(&config(&["calling", "calling", "calling"]), seed, Some(no_terminal()))
                .unwrap()
                .iter()
                .position(|(n, _)| n == HUMAN_SEAT_NAME)
                .unwrap()
        };
        assert_eq!(position(11), position(11));
        assert!(position(11) <= 3);
    }

    #[test]
    fn unknown_models_are_rejected() {
        let err = build_roster(&config(&["gpt-4o"]), 1, None).err().unwrap();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}
