use holdem_engine::game::{HandState, SeatConfig};
use holdem_engine::round::{Action, ActionError, Stage};

fn players(stacks: &[u64]) -> Vec<SeatConfig> {
    stacks.iter().enumerate().map(|(i, &s)| SeatConfig::new(format!("p{i}"), s)).collect()
}

#[test]
fn a_full_raise_reopens_action_for_earlier_callers() {
    let mut hand = HandState::start_seeded(&players(&[500, 500, 500]), 0, 5, 10, 1).unwrap();
    hand.apply(0, Action::Raise(30)).unwrap();
    hand.apply(1, Action::Call).unwrap();
    // The big blind three-bets; both earlier players owe an action again.
    hand.apply(2, Action::Raise(90)).unwrap();
    assert_eq!(hand.to_act(), Some(0));
    hand.apply(0, Action::Call).unwrap();
    assert_eq!(hand.to_act(), Some(1));
    hand.apply(1, Action::Fold).unwrap();
    assert_eq!(hand.stage(), Stage::Flop);
    assert_eq!(hand.pot(), 90 + 90 + 30);
}

#[test]
fn a_rejected_raise_changes_nothing() {
    let mut hand = HandState::start_seeded(&players(&[500, 500, 500]), 0, 5, 10, 2).unwrap();
    hand.apply(0, Action::Raise(30)).unwrap();

    let pot = hand.pot();
    let stacks: Vec<u64> = hand.seats().iter().map(|s| s.stack()).collect();
    // Minimum re-raise is to 50; 40 must be refused.
    let err = hand.apply(1, Action::Raise(40)).unwrap_err();
    assert_eq!(err, ActionError::RaiseBelowMinimum { min: 50, got: 40 });
    assert_eq!(hand.pot(), pot);
    assert_eq!(hand.to_act(), Some(1));
    let after: Vec<u64> = hand.seats().iter().map(|s| s.stack()).collect();
    assert_eq!(stacks, after);

    hand.apply(1, Action::Raise(50)).unwrap();
    assert_eq!(hand.to_act(), Some(2));
}

#[test]
fn heads_up_order_flips_after_the_flop() {
    let mut hand = HandState::start_seeded(&players(&[500, 500]), 0, 5, 10, 3).unwrap();
    // Dealer posts the small blind and opens pre-flop.
    assert_eq!(hand.to_act(), Some(0));
    hand.apply(0, Action::Call).unwrap();
    hand.apply(1, Action::Check).unwrap();
    // Post-flop the non-dealer is first.
    assert_eq!(hand.stage(), Stage::Flop);
    assert_eq!(hand.to_act(), Some(1));
}

#[test]
fn short_all_in_lets_others_call_but_not_reraise() {
    let mut hand = HandState::start_seeded(&players(&[500, 80, 500]), 0, 5, 10, 4).unwrap();
    hand.apply(0, Action::Raise(60)).unwrap();
    // Seat 1 is all-in for 80: above the bet, below a full raise to 110.
    hand.apply(1, Action::AllIn).unwrap();
    hand.apply(2, Action::Fold).unwrap();
    assert_eq!(hand.to_act(), Some(0));
    assert_eq!(hand.apply(0, Action::Raise(200)).unwrap_err(), ActionError::RaiseNotReopened);
    hand.apply(0, Action::Call).unwrap();
    // Nobody left to bet; the board runs out and the hand completes.
    assert!(hand.is_complete());
    assert_eq!(hand.board().len(), 5);
    let total: u64 = hand.settle().unwrap().iter().map(|p| p.amount).sum();
    assert_eq!(total, 80 + 80 + 10);
}

#[test]
fn checking_through_every_street_reaches_showdown() {
    let mut hand = HandState::start_seeded(&players(&[500, 500]), 0, 5, 10, 5).unwrap();
    hand.apply(0, Action::Call).unwrap();
    hand.apply(1, Action::Check).unwrap();
    for stage in [Stage::Flop, Stage::Turn, Stage::River] {
        assert_eq!(hand.stage(), stage);
        hand.apply(1, Action::Check).unwrap();
        hand.apply(0, Action::Check).unwrap();
    }
    assert!(hand.is_complete());
    let payouts = hand.settle().unwrap();
    let total: u64 = payouts.iter().map(|p| p.amount).sum();
    assert_eq!(total, 20);
}

#[test]
fn betting_after_completion_is_refused() {
    let mut hand = HandState::start_seeded(&players(&[500, 500]), 0, 5, 10, 6).unwrap();
    hand.apply(0, Action::Fold).unwrap();
    assert!(hand.is_complete());
    assert_eq!(hand.apply(1, Action::Check).unwrap_err(), ActionError::HandComplete);
    assert!(hand.legal_actions(1).is_empty());
}
