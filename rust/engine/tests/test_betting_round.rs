use showdown_engine::agent::{Action, ActionKind, ScriptedAgent};
use showdown_engine::betting::{run_betting_round, HandState};
use showdown_engine::errors::{AgentError, EngineError};
use showdown_engine::seat::Seat;
use showdown_engine::transcript::{HandEvent, Street};

fn seat(name: &str, stack: u32, actions: Vec<Action>) -> Seat {
    Seat::new(name, stack, Box::new(ScriptedAgent::new(name, actions)))
}

fn opened_at(bet: u32) -> HandState {
    HandState {
        opening_bet: bet,
        ..HandState::default()
    }
}

fn total(seats: &[Seat], hand: &HandState) -> u32 {
    seats.iter().map(|s| s.stack()).sum::<u32>() + hand.pot
}

#[test]
fn all_calls_close_after_one_orbit() {
    let mut seats = vec![
        seat("A", 1_000, vec![Action::call()]),
        seat("B", 1_000, vec![Action::call()]),
        seat("C", 1_000, vec![Action::call()]),
    ];
    let mut hand = opened_at(100);

    let round = run_betting_round(&mut hand, &mut seats, Street::Preflop, 0, 500).unwrap();
    assert_eq!(round.decisions, 3);
    assert_eq!(round.highest_bet, 100);
    assert_eq!(hand.pot, 300);
    assert!(seats.iter().all(|s| s.stack() == 900));
}

#[test]
fn short_stack_call_is_forced_fold_and_keeps_stack() {
    let mut seats = vec![
        seat("Short", 80, vec![Action::call()]),
        seat("Deep", 1_000, vec![]),
    ];
    let mut hand = opened_at(100);

    let round = run_betting_round(&mut hand, &mut seats, Street::Preflop, 0, 500).unwrap();
    assert_eq!(round.decisions, 1);
    assert_eq!(round.seats_remaining, 1);
    assert!(seats[0].is_folded());
    assert_eq!(seats[0].stack(), 80);
    assert_eq!(hand.pot, 0);

    match hand.transcript.events() {
        [HandEvent::ForcedFold {
            attempted, amount, ..
        }] => {
            assert_eq!(*attempted, ActionKind::Call);
            assert_eq!(*amount, 100);
        }
        other => panic!("unexpected events: {:?}", other),
    }
    assert_eq!(
        hand.transcript.render(),
        "Short tries calling 100 but lacks chips => folds."
    );
}

#[test]
fn small_raise_is_lifted_to_minimum_and_reopens_action() {
    let mut seats = vec![
        seat("A", 10_000, vec![Action::raise_to(200), Action::call()]),
        seat("B", 10_000, vec![Action::call()]),
    ];
    let mut hand = opened_at(100);

    let round = run_betting_round(&mut hand, &mut seats, Street::Flop, 0, 500).unwrap();
    assert_eq!(round.highest_bet, 600);
    assert_eq!(round.decisions, 3);
    // raiser pays the raise, then the full bet again to close
    assert_eq!(seats[0].stack(), 10_000 - 600 - 600);
    assert_eq!(seats[1].stack(), 10_000 - 600);
    assert_eq!(hand.pot, 1_800);
    assert!(hand.transcript.render().contains("A raises total to 600."));
}

#[test]
fn unaffordable_raise_folds_the_raiser() {
    let mut seats = vec![
        seat("A", 550, vec![Action::raise_to(300)]),
        seat("B", 1_000, vec![]),
    ];
    let mut hand = opened_at(100);

    run_betting_round(&mut hand, &mut seats, Street::Turn, 0, 500).unwrap();
    assert!(seats[0].is_folded());
    assert_eq!(seats[0].stack(), 550);
    assert!(hand
        .transcript
        .render()
        .contains("A tries raising to 600 but lacks chips => folds."));
}

#[test]
fn action_starts_at_the_given_seat() {
    // seat 2 acts first and folds; seat 0 is then alone with seat 1
    let mut seats = vec![
        seat("A", 1_000, vec![Action::call()]),
        seat("B", 1_000, vec![Action::call()]),
        seat("C", 1_000, vec![Action::fold()]),
    ];
    let mut hand = opened_at(100);

    let round = run_betting_round(&mut hand, &mut seats, Street::Preflop, 2, 500).unwrap();
    assert_eq!(round.seats_remaining, 2);
    let order: Vec<&str> = hand
        .transcript
        .events()
        .iter()
        .map(|e| match e {
            HandEvent::Fold { name, .. } | HandEvent::Call { name, .. } => name.as_str(),
            other => panic!("unexpected event {:?}", other),
        })
        .collect();
    assert_eq!(order, vec!["C", "A", "B"]);
}

#[test]
fn zero_stack_seats_are_skipped() {
    let mut seats = vec![
        seat("A", 1_000, vec![Action::call()]),
        seat("Broke", 0, vec![]),
        seat("C", 1_000, vec![Action::call()]),
    ];
    let mut hand = opened_at(100);

    let round = run_betting_round(&mut hand, &mut seats, Street::River, 0, 500).unwrap();
    assert_eq!(round.decisions, 2);
    assert!(!seats[1].is_folded());
}

#[test]
fn lone_seat_is_not_asked() {
    let mut seats = vec![seat("A", 1_000, vec![]), seat("Broke", 0, vec![])];
    let mut hand = opened_at(100);

    let round = run_betting_round(&mut hand, &mut seats, Street::Preflop, 0, 500).unwrap();
    assert_eq!(round.decisions, 0);
}

#[test]
fn agent_failure_aborts_the_round() {
    let mut seats = vec![seat("A", 1_000, vec![]), seat("B", 1_000, vec![])];
    let mut hand = opened_at(100);

    let err = run_betting_round(&mut hand, &mut seats, Street::Preflop, 0, 500).unwrap_err();
    assert_eq!(
        err,
        EngineError::Agent(AgentError::ScriptExhausted { agent: "A".into() })
    );
}

#[test]
fn chips_are_conserved_through_a_raising_war() {
    let mut seats = vec![
        seat(
            "A",
            5_000,
            vec![Action::min_raise(), Action::raise_to(2_000), Action::call()],
        ),
        seat("B", 5_000, vec![Action::raise_to(1_200), Action::call()]),
        seat("C", 5_000, vec![Action::call(), Action::fold()]),
    ];
    let mut hand = opened_at(100);
    let before = total(&seats, &hand);

    run_betting_round(&mut hand, &mut seats, Street::Preflop, 0, 500).unwrap();
    assert_eq!(total(&seats, &hand), before);
}
