use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{new_deck, Card};
use crate::errors::EngineError;

/// A 52-card deck dealt from the front.
///
/// The deck owns its RNG so that a seeded table replays the same sequence of
/// shuffles hand after hand.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: new_deck(),
            position: 0,
            rng,
        }
    }

    /// Rebuilds the full deck and permutes it uniformly (Fisher–Yates).
    pub fn shuffle(&mut self) {
        self.cards = new_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Removes and returns the next `n` cards.
    ///
    /// Fails without consuming anything when fewer than `n` cards remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(EngineError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Cards still in the deck, next card first.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}
