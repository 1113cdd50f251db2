use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::betting::{run_betting_round, HandState};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::{evaluate, HandKey};
use crate::seat::Seat;
use crate::transcript::{Blind, HandEvent, Street, Transcript};

/// Blind sizes and the minimum raise increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakes {
    pub small_blind: u32,
    pub big_blind: u32,
    pub min_raise: u32,
}

impl Default for Stakes {
    fn default() -> Self {
        Self {
            small_blind: 50,
            big_blind: 100,
            min_raise: 500,
        }
    }
}

/// How the pot of a finished hand was settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Everyone else folded.
    Uncontested { seat: usize, pot: u32 },
    /// Best hand(s) at showdown. `odd_chips` went to the first winner after
    /// the button.
    Showdown {
        winners: Vec<usize>,
        hand: HandKey,
        share: u32,
        odd_chips: u32,
    },
    /// Nobody was left in the hand; the pot leaves circulation.
    Unclaimed { pot: u32 },
}

/// Result of [`Table::play_hand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    pub hand_no: u32,
    /// Button seat for this hand (before it moved on).
    pub button: usize,
    pub board: Vec<Card>,
    /// Size of the pot when it was settled.
    pub pot: u32,
    pub resolution: Resolution,
    pub transcript: Transcript,
}

impl HandSummary {
    pub fn winners(&self) -> Vec<usize> {
        match &self.resolution {
            Resolution::Uncontested { seat, .. } => vec![*seat],
            Resolution::Showdown { winners, .. } => winners.clone(),
            Resolution::Unclaimed { .. } => Vec::new(),
        }
    }

    /// Full hand transcript as text.
    pub fn transcript_text(&self) -> String {
        self.transcript.render()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Deals and settles hands for a roster of seats.
///
/// The table owns the deck and the dealer button; the seats are borrowed
/// for the duration of one hand only.
///
/// # Examples
///
/// ```
/// use showdown_engine::agent::{Action, ScriptedAgent};
/// use showdown_engine::seat::Seat;
/// use showdown_engine::table::{Stakes, Table};
///
/// let mut seats = vec![
///     Seat::new("Ann", 1_000, Box::new(ScriptedAgent::repeating("ann", Action::call()))),
///     Seat::new("Bob", 1_000, Box::new(ScriptedAgent::repeating("bob", Action::call()))),
/// ];
/// let mut table = Table::new(Stakes::default(), Some(7));
/// let summary = table.play_hand(&mut seats).unwrap();
///
/// assert_eq!(summary.board.len(), 5);
/// assert_eq!(table.button(), 1);
/// let total: u32 = seats.iter().map(|s| s.stack()).sum();
/// assert_eq!(total, 2_000);
/// ```
#[derive(Debug)]
pub struct Table {
    deck: Deck,
    stakes: Stakes,
    button: usize,
    hands_played: u32,
}

impl Table {
    pub fn new(stakes: Stakes, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            deck: Deck::new_with_seed(seed),
            stakes,
            button: 0,
            hands_played: 0,
        }
    }

    pub fn with_button(mut self, button: usize) -> Self {
        self.button = button;
        self
    }

    pub fn button(&self) -> usize {
        self.button
    }
    pub fn stakes(&self) -> Stakes {
        self.stakes
    }
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    /// Plays one complete hand: blinds, hole cards, up to four betting
    /// rounds, pot resolution, then moves the button one seat along.
    pub fn play_hand(&mut self, seats: &mut [Seat]) -> Result<HandSummary, EngineError> {
        let n = seats.len();
        if n < 2 {
            return Err(EngineError::NotEnoughSeats(n));
        }
        let button = self.button % n;
        self.hands_played += 1;
        let hand_no = self.hands_played;

        self.deck.shuffle();
        for seat in seats.iter_mut() {
            seat.reset_for_new_hand();
        }

        let mut hand = HandState::default();
        hand.transcript
            .push(HandEvent::HandStarted { hand_no, button });

        for (i, seat) in seats.iter_mut().enumerate() {
            if seat.is_busted() {
                continue;
            }
            let cards = self.deck.deal(2)?;
            seat.give_cards(&cards);
            hand.transcript.push(HandEvent::HoleCards {
                seat: i,
                name: seat.name().to_string(),
                cards,
            });
        }

        let sb_seat = (button + 1) % n;
        let bb_seat = (button + 2) % n;
        self.post_blind(&mut hand, seats, sb_seat, Blind::Small);
        hand.opening_bet = self.post_blind(&mut hand, seats, bb_seat, Blind::Big);

        let first_to_act = (bb_seat + 1) % n;
        for street in Street::ALL {
            if street != Street::Preflop {
                if in_hand(seats).len() < 2 {
                    break;
                }
                let cards = self.deck.deal(street.cards_revealed())?;
                hand.board.extend_from_slice(&cards);
                hand.transcript.push(HandEvent::Board { street, cards });
            }
            let round = run_betting_round(
                &mut hand,
                seats,
                street,
                first_to_act,
                self.stakes.min_raise,
            )?;
            debug!(
                hand_no,
                %street,
                highest_bet = round.highest_bet,
                decisions = round.decisions,
                seats_remaining = round.seats_remaining,
                "betting round closed"
            );
        }

        let pot = hand.pot;
        let resolution = settle_pot(&mut hand, seats, button)?;
        info!(hand_no, pot, ?resolution, "hand complete");

        self.button = (button + 1) % n;
        Ok(HandSummary {
            hand_no,
            button,
            board: hand.board,
            pot,
            resolution,
            transcript: hand.transcript,
        })
    }

    /// Posts `min(blind, stack)`; a short blind is still a valid post.
    fn post_blind(&self, hand: &mut HandState, seats: &mut [Seat], seat: usize, blind: Blind) -> u32 {
        let size = match blind {
            Blind::Small => self.stakes.small_blind,
            Blind::Big => self.stakes.big_blind,
        };
        let s = &mut seats[seat];
        let amount = s.take_chips(size.min(s.stack()));
        hand.pot += amount;
        hand.transcript.push(HandEvent::PostBlind {
            seat,
            name: s.name().to_string(),
            blind,
            amount,
        });
        amount
    }
}

/// Seats still in the hand, in table order: not folded and holding chips.
/// A seat that put its last chip in drops out here.
fn in_hand(seats: &[Seat]) -> Vec<usize> {
    (0..seats.len()).filter(|&i| seats[i].can_act()).collect()
}

fn settle_pot(
    hand: &mut HandState,
    seats: &mut [Seat],
    button: usize,
) -> Result<Resolution, EngineError> {
    let pot = hand.pot;
    let contenders = in_hand(seats);

    let resolution = match contenders.as_slice() {
        [] => {
            hand.transcript.push(HandEvent::Unclaimed { pot });
            return Ok(Resolution::Unclaimed { pot });
        }
        [only] => {
            let seat = &mut seats[*only];
            seat.add_chips(pot);
            hand.transcript.push(HandEvent::Uncontested {
                seat: *only,
                name: seat.name().to_string(),
                pot,
            });
            Resolution::Uncontested { seat: *only, pot }
        }
        [first, rest @ ..] => {
            let mut best = showdown_key(hand, seats, *first)?;
            let mut winners = vec![*first];
            for &i in rest {
                let key = showdown_key(hand, seats, i)?;
                match key.cmp(&best) {
                    Ordering::Greater => {
                        best = key;
                        winners = vec![i];
                    }
                    Ordering::Equal => winners.push(i),
                    Ordering::Less => {}
                }
            }

            // earliest position after the button first
            let n = seats.len();
            winners.sort_by_key(|&i| (i + n - button - 1) % n);
            let count = winners.len() as u32;
            let share = pot / count;
            let odd_chips = pot % count;
            for (k, &w) in winners.iter().enumerate() {
                let extra = if k == 0 { odd_chips } else { 0 };
                seats[w].add_chips(share + extra);
            }

            if let [w] = winners.as_slice() {
                hand.transcript.push(HandEvent::ShowdownWin {
                    seat: *w,
                    name: seats[*w].name().to_string(),
                    pot,
                });
            } else {
                hand.transcript.push(HandEvent::SplitPot {
                    names: winners.iter().map(|&w| seats[w].name().to_string()).collect(),
                    share,
                    odd_chips,
                    odd_chip_seat: (odd_chips > 0).then(|| seats[winners[0]].name().to_string()),
                });
            }
            Resolution::Showdown {
                winners,
                hand: best,
                share,
                odd_chips,
            }
        }
    };
    hand.pot = 0;
    Ok(resolution)
}

/// Evaluates a contender's seven cards and reveals them in the transcript.
fn showdown_key(hand: &mut HandState, seats: &[Seat], seat: usize) -> Result<HandKey, EngineError> {
    let hole = seats[seat].hole_cards().to_vec();
    let mut cards = hole.clone();
    cards.extend_from_slice(&hand.board);
    let key = evaluate(&cards)?;
    hand.transcript.push(HandEvent::ShowdownReveal {
        seat,
        name: seats[seat].name().to_string(),
        cards: hole,
        hand: key.clone(),
    });
    Ok(key)
}
