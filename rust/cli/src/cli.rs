//! Command-line definition.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Texas Hold'em sessions between models, scripts and humans"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a session and print every hand plus the final standings
    Play(PlayArgs),
    /// Evaluate exactly seven cards, e.g. `eval As Kd Qh Jc 9s 3d 2h`
    Eval {
        #[arg(num_args = 7, required = true, value_name = "CARD")]
        cards: Vec<String>,
        /// Print the comparison key as JSON
        #[arg(long)]
        json: bool,
    },
    /// Deal one seeded sample hand and show every seat's best hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
        seats: u8,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

/// Flags for `play`. Unset flags fall back to env, config file, defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Model identifiers, one seat each (`baseline`, `random`, ...)
    #[arg(short = 'm', long, num_args = 1.., value_delimiter = ',')]
    pub models: Option<Vec<String>>,
    /// Maximum number of hands
    #[arg(short = 'r', long = "rounds", visible_alias = "hands")]
    pub hands: Option<u32>,
    /// Stop once this many seats (or fewer) are still live
    #[arg(short = 'e', long)]
    pub elimination_count: Option<usize>,
    /// Starting stack for every seat
    #[arg(short = 's', long = "stack")]
    pub starting_stack: Option<u32>,
    #[arg(long)]
    pub small_blind: Option<u32>,
    #[arg(long)]
    pub big_blind: Option<u32>,
    #[arg(long)]
    pub min_raise: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Deadline per model decision, in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
    /// Add an interactive seat named "Human"
    #[arg(short = 'H', long)]
    pub human_player: bool,
    /// Print hands and the final report as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ShowdownCli, clap::Error> {
        ShowdownCli::try_parse_from(std::iter::once("showdown").chain(args.iter().copied()))
    }

    #[test]
    fn play_flags_are_optional() {
        let Commands::Play(args) = parse(&["play"]).unwrap().cmd else {
            panic!("expected play");
        };
        assert!(args.models.is_none());
        assert!(args.hands.is_none());
        assert!(!args.human_player);
    }

    #[test]
    fn play_accepts_short_and_long_forms() {
        let cli = parse(&[
            "play", "-m", "baseline", "random", "-r", "5", "-e", "2", "-s", "2000", "--human-player",
        ])
        .unwrap();
        let Commands::Play(args) = cli.cmd else {
            panic!("expected play");
        };
        assert_eq!(
            args.models,
            Some(vec!["baseline".to_string(), "random".to_string()])
        );
        assert_eq!(args.hands, Some(5));
        assert_eq!(args.elimination_count, Some(2));
        assert_eq!(args.starting_stack, Some(2_000));
        assert!(args.human_player);
    }

    #[test]
    fn models_also_split_on_commas() {
        let Commands::Play(args) = parse(&["play", "--models", "calling,folding"]).unwrap().cmd
        else {
            panic!("expected play");
        };
        assert_eq!(args.models.unwrap(), vec!["calling", "folding"]);
    }

    #[test]
    fn eval_needs_seven_cards() {
        assert!(parse(&["eval", "As", "Kd"]).is_err());
        assert!(parse(&["eval", "As", "Kd", "Qh", "Jc", "9s", "3d", "2h"]).is_ok());
    }

    #[test]
    fn deal_seat_count_is_bounded() {
        assert!(parse(&["deal", "--seats", "1"]).is_err());
        assert!(parse(&["deal", "--seats", "10", "--seed", "3"]).is_ok());
    }
}
