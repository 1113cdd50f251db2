//! Property tests: no betting sequence may create or destroy chips.

use proptest::prelude::*;
use showdown_engine::agent::{Action, Agent, ScriptedAgent};
use showdown_engine::seat::Seat;
use showdown_engine::session::{Session, SessionConfig};
use showdown_engine::table::{Resolution, Stakes, Table};

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => Just(Action::fold()),
        3 => Just(Action::call()),
        1 => Just(Action::min_raise()),
        1 => (0u32..3_000).prop_map(Action::raise_to),
    ]
}

/// Each seat: a starting stack and the actions it will replay.
fn roster_strategy() -> impl Strategy<Value = Vec<(u32, Vec<Action>)>> {
    prop::collection::vec(
        (0u32..5_000, prop::collection::vec(action_strategy(), 0..12)),
        2..=5,
    )
}

fn seats_from(roster: &[(u32, Vec<Action>)]) -> Vec<Seat> {
    roster
        .iter()
        .enumerate()
        .map(|(i, (stack, actions))| {
            let name = format!("P{}", i);
            let agent = ScriptedAgent::new(name.clone(), actions.clone()).with_fallback(Action::call());
            Seat::new(name, *stack, Box::new(agent))
        })
        .collect()
}

proptest! {
    /// Stacks after a hand plus any unclaimed pot equal stacks before it.
    #[test]
    fn single_hand_conserves_chips(roster in roster_strategy(), seed in any::<u64>()) {
        let mut seats = seats_from(&roster);
        let before: u32 = seats.iter().map(|s| s.stack()).sum();

        let mut table = Table::new(Stakes::default(), Some(seed));
        let summary = table.play_hand(&mut seats).unwrap();

        let unclaimed = match summary.resolution {
            Resolution::Unclaimed { pot } => pot,
            _ => 0,
        };
        let after: u32 = seats.iter().map(|s| s.stack()).sum();
        prop_assert_eq!(after + unclaimed, before);
    }

    /// Showdown winners split the whole pot, odd chips included.
    #[test]
    fn showdown_shares_cover_the_pot(roster in roster_strategy(), seed in any::<u64>()) {
        let mut seats = seats_from(&roster);
        let mut table = Table::new(Stakes::default(), Some(seed));
        let summary = table.play_hand(&mut seats).unwrap();

        if let Resolution::Showdown { winners, share, odd_chips, .. } = &summary.resolution {
            prop_assert!(!winners.is_empty());
            prop_assert!(*odd_chips < winners.len() as u32);
            prop_assert_eq!(share * winners.len() as u32 + odd_chips, summary.pot);
        }
    }

    /// Over several hands, the roster total only drops by unclaimed pots.
    #[test]
    fn session_conserves_chips(actions in prop::collection::vec(action_strategy(), 0..40), seed in any::<u64>()) {
        let roster: Vec<(String, Box<dyn Agent>)> = (0..3)
            .map(|i| {
                let name = format!("P{}", i);
                let agent: Box<dyn Agent> = Box::new(
                    ScriptedAgent::new(name.clone(), actions.iter().copied().skip(i))
                        .with_fallback(Action::call()),
                );
                (name, agent)
            })
            .collect();
        let config = SessionConfig {
            hands: 5,
            starting_stack: 3_000,
            seed: Some(seed),
            ..SessionConfig::default()
        };

        let mut unclaimed = 0;
        let mut session = Session::new(config, roster).unwrap();
        let report = session
            .run(|h| {
                if let Resolution::Unclaimed { pot } = h.resolution {
                    unclaimed += pot;
                }
            })
            .unwrap();
        let total: u32 = report.standings.iter().map(|s| s.stack).sum();
        prop_assert_eq!(total + unclaimed, 9_000);
    }
}
