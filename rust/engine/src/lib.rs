//! # showdown-engine: Texas Hold'em table core
//!
//! Deals and settles multi-seat Texas Hold'em hands whose decisions come
//! from pluggable agents (scripted policies, language models, or a person at
//! a terminal), and repeats them over a session until a stack-based stopping
//! condition is met.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded deck shuffling and dealing with ChaCha20 RNG
//! - [`hand`] - Best 5-of-7 hand evaluation and comparison keys
//! - [`agent`] - The decision-source contract (`Agent`, `Action`, `ActionRequest`)
//! - [`rules`] - Call/raise legality against a seat's stack
//! - [`betting`] - One street of betting
//! - [`table`] - One complete hand: blinds, streets, pot resolution, button
//! - [`session`] - Repeated hands, eliminations and final standings
//! - [`transcript`] - Append-only hand event log
//! - [`seat`] - Seat state (stack, hole cards, folded flag)
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::hand::{evaluate, Category};
//! use showdown_engine::cards::Card;
//!
//! let cards: Vec<Card> = ["As", "Ad", "2s", "5h", "9c", "Jd", "3s"]
//!     .iter()
//!     .map(|c| c.parse().unwrap())
//!     .collect();
//!
//! let key = evaluate(&cards).unwrap();
//! assert_eq!(key.category, Category::OnePair);
//! ```
//!
//! ## Running a session
//!
//! ```rust
//! use showdown_engine::agent::{Action, Agent, ScriptedAgent};
//! use showdown_engine::session::{simulate, SessionConfig};
//!
//! let ann: Box<dyn Agent> = Box::new(ScriptedAgent::repeating("ann", Action::call()));
//! let bob: Box<dyn Agent> = Box::new(ScriptedAgent::repeating("bob", Action::fold()));
//! let roster = vec![("Ann".to_string(), ann), ("Bob".to_string(), bob)];
//! let config = SessionConfig { hands: 2, seed: Some(1), ..SessionConfig::default() };
//! let report = simulate(config, roster, |_| {}).unwrap();
//! // Bob folded the first hand, leaving a single live seat
//! assert_eq!(report.hands_played, 1);
//! ```

pub mod agent;
pub mod betting;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod rules;
pub mod seat;
pub mod session;
pub mod table;
pub mod transcript;
