use tracing::debug;

use crate::cards::Card;
use crate::errors::EngineError;
use crate::rules::{resolve_action, ResolvedAction};
use crate::seat::Seat;
use crate::transcript::{HandEvent, Street, Transcript};

/// Mutable state of the hand in progress, shared by the table and the
/// betting rounds it runs.
#[derive(Debug, Default, Clone)]
pub struct HandState {
    /// Chips committed to the pot so far.
    pub pot: u32,
    /// Community cards dealt so far (0 to 5).
    pub board: Vec<Card>,
    /// Bet every street opens at: the big blind actually posted.
    pub opening_bet: u32,
    pub transcript: Transcript,
}

/// Public view of the hand handed to a seat's agent.
pub(crate) struct TableView<'a> {
    pub street: Street,
    pub community_cards: &'a [Card],
    pub pot: u32,
    pub call_amount: u32,
    pub min_raise: u32,
    pub history: &'a str,
}

/// How a betting round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub street: Street,
    /// Highest bet standing when action closed.
    pub highest_bet: u32,
    /// Number of decisions requested from agents.
    pub decisions: u32,
    /// Seats still in the rotation when the round closed.
    pub seats_remaining: usize,
}

/// Runs one street of betting.
///
/// The rotation is every seat, in table order starting at `start_seat`,
/// that is neither folded nor out of chips. Each seat is asked for an action
/// in turn; action closes once as many calls have followed the last raise as
/// there are seats left in the rotation, or when fewer than two remain.
///
/// # Errors
///
/// Only agent failures ([`EngineError::Agent`]) are returned. Seats that
/// cannot afford what they ask for are folded and the round continues.
pub fn run_betting_round(
    hand: &mut HandState,
    seats: &mut [Seat],
    street: Street,
    start_seat: usize,
    min_raise: u32,
) -> Result<RoundSummary, EngineError> {
    let n = seats.len();
    let mut rotation: Vec<usize> = (0..n)
        .map(|i| (start_seat + i) % n)
        .filter(|&s| seats[s].can_act())
        .collect();

    let mut highest_bet = hand.opening_bet;
    let mut calls_since_raise = 0usize;
    let mut decisions = 0u32;
    let mut idx = 0usize;

    while rotation.len() >= 2 {
        let seat_idx = rotation[idx];
        if !seats[seat_idx].can_act() {
            // went all-in on an earlier turn
            rotation.remove(idx);
            if idx >= rotation.len() {
                idx = 0;
            }
            continue;
        }

        let history = format!(
            "{}\n(betting round: {}, seat={})",
            hand.transcript.render_for(seat_idx),
            street,
            seat_idx + 1
        );
        let view = TableView {
            street,
            community_cards: &hand.board,
            pot: hand.pot,
            call_amount: highest_bet,
            min_raise,
            history: &history,
        };
        let action = seats[seat_idx].request_action(seat_idx, &view)?;
        decisions += 1;

        let seat = &mut seats[seat_idx];
        let name = seat.name().to_string();
        let resolved = resolve_action(seat.stack(), highest_bet, min_raise, action);
        debug!(seat = %name, %street, ?action, ?resolved, pot = hand.pot, "seat acted");

        match resolved {
            ResolvedAction::Fold | ResolvedAction::ForcedFold { .. } => {
                seat.fold();
                let event = match resolved {
                    ResolvedAction::ForcedFold { attempted, amount } => HandEvent::ForcedFold {
                        seat: seat_idx,
                        name,
                        street,
                        attempted,
                        amount,
                    },
                    _ => HandEvent::Fold {
                        seat: seat_idx,
                        name,
                        street,
                    },
                };
                hand.transcript.push(event);
                rotation.remove(idx);
                if idx >= rotation.len() {
                    idx = 0;
                }
                continue;
            }
            ResolvedAction::Call(amount) => {
                hand.pot += seat.take_chips(amount);
                hand.transcript.push(HandEvent::Call {
                    seat: seat_idx,
                    name,
                    street,
                    amount,
                });
                calls_since_raise += 1;
            }
            ResolvedAction::Raise(total) => {
                hand.pot += seat.take_chips(total);
                highest_bet = total;
                calls_since_raise = 0;
                hand.transcript.push(HandEvent::Raise {
                    seat: seat_idx,
                    name,
                    street,
                    total,
                });
            }
        }

        idx = (idx + 1) % rotation.len();
        if calls_since_raise >= rotation.len() {
            break;
        }
    }

    Ok(RoundSummary {
        street,
        highest_bet,
        decisions,
        seats_remaining: rotation.len(),
    })
}
