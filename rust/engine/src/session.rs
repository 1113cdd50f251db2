use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agent::{Agent, DecisionSource};
use crate::errors::EngineError;
use crate::seat::{Seat, STARTING_STACK};
use crate::table::{HandSummary, Stakes, Table};

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of hands to deal.
    pub hands: u32,
    /// Stop once this many seats (or fewer) are live: not folded and holding chips.
    pub elimination_count: usize,
    pub starting_stack: u32,
    pub stakes: Stakes,
    /// Deck seed; `None` draws one at random.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hands: 3,
            elimination_count: 1,
            starting_stack: STARTING_STACK,
            stakes: Stakes::default(),
            seed: None,
        }
    }
}

/// Why a session stopped dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    HandLimit,
    Eliminated,
}

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based rank.
    pub position: usize,
    pub name: String,
    pub source: DecisionSource,
    pub stack: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub hands_played: u32,
    pub stop_reason: StopReason,
    pub standings: Vec<Standing>,
}

/// Repeats hands over a fixed roster until the hand limit is reached or
/// too few seats are live.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    table: Table,
    seats: Vec<Seat>,
}

impl Session {
    /// Seats every `(name, agent)` pair with the configured starting stack,
    /// in the given order.
    pub fn new(
        config: SessionConfig,
        roster: Vec<(String, Box<dyn Agent>)>,
    ) -> Result<Self, EngineError> {
        let mut names = HashSet::new();
        for (name, _) in &roster {
            if !names.insert(name.clone()) {
                return Err(EngineError::DuplicateSeatName(name.clone()));
            }
        }
        let seats = roster
            .into_iter()
            .map(|(name, agent)| Seat::new(name, config.starting_stack, agent))
            .collect();
        let table = Table::new(config.stakes, config.seed);
        Ok(Self {
            config,
            table,
            seats,
        })
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Seats that are neither folded nor out of chips.
    ///
    /// Fold flags from the last hand played still count here; the next
    /// hand clears them.
    pub fn live_seats(&self) -> usize {
        self.seats.iter().filter(|s| s.can_act()).count()
    }

    /// Plays hands until a stop condition holds, passing every finished
    /// hand to `on_hand`, then ranks the roster.
    ///
    /// An agent error aborts the run and is returned as is.
    pub fn run(
        &mut self,
        mut on_hand: impl FnMut(&HandSummary),
    ) -> Result<SessionReport, EngineError> {
        let mut hands_played = 0u32;
        let stop_reason = loop {
            let live = self.live_seats();
            // a hand needs two live seats, whatever the threshold says
            if live <= self.config.elimination_count || live < 2 {
                break StopReason::Eliminated;
            }
            if hands_played >= self.config.hands {
                break StopReason::HandLimit;
            }

            let summary = self.table.play_hand(&mut self.seats)?;
            hands_played += 1;
            on_hand(&summary);

            for seat in self.seats.iter_mut() {
                if seat.is_busted() && !seat.is_folded() {
                    info!(seat = seat.name(), "seat busted");
                }
                seat.mark_busted();
            }
        };

        info!(hands_played, ?stop_reason, "session finished");
        Ok(SessionReport {
            hands_played,
            stop_reason,
            standings: self.standings(),
        })
    }

    /// Ranking by stack, largest first; ties keep roster order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut order: Vec<&Seat> = self.seats.iter().collect();
        order.sort_by(|a, b| b.stack().cmp(&a.stack()));
        order
            .into_iter()
            .enumerate()
            .map(|(i, s)| Standing {
                position: i + 1,
                name: s.name().to_string(),
                source: s.source().clone(),
                stack: s.stack(),
            })
            .collect()
    }
}

/// Runs a full session over `roster` and returns its report.
pub fn simulate(
    config: SessionConfig,
    roster: Vec<(String, Box<dyn Agent>)>,
    on_hand: impl FnMut(&HandSummary),
) -> Result<SessionReport, EngineError> {
    Session::new(config, roster)?.run(on_hand)
}
