//! Deal command: one seeded sample deal, no betting.
//!
//! Shows each seat's hole cards, the full board, and the best hand each
//! seat would show down with; the winner (or tied winners) are marked.

use std::io::Write;

use showdown_engine::cards::Card;
use showdown_engine::deck::Deck;
use showdown_engine::hand::{HandKey, evaluate};

use crate::error::CliError;
use crate::formatters::format_board;

pub fn handle_deal_command(
    seed: Option<u64>,
    seats: u8,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let holes: Vec<Vec<Card>> = (0..seats)
        .map(|_| deck.deal(2))
        .collect::<Result<_, _>>()?;
    let board = deck.deal(5)?;

    let keys: Vec<HandKey> = holes
        .iter()
        .map(|hole| {
            let mut seven = hole.clone();
            seven.extend_from_slice(&board);
            evaluate(&seven)
        })
        .collect::<Result<_, _>>()?;
    let best = keys.iter().max();

    writeln!(out, "deal: seats={} seed={}", seats, seed)?;
    for (i, (hole, key)) in holes.iter().zip(&keys).enumerate() {
        let marker = if Some(key) == best { "  *" } else { "" };
        writeln!(
            out,
            "Seat {}: {} => {}{}",
            i + 1,
            format_board(hole),
            key,
            marker
        )?;
    }
    writeln!(out, "Board: {}", format_board(&board))?;
    Ok(())
}
