//! Player decision-making behind a single trait, plus a few stock agents
//! for tests, demos and table-driving.

use crate::game::GameView;
use crate::round::{Action, LegalAction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Something that can pick an action when its seat is to act. The view
/// carries the legal options with chip bounds already resolved, so an
/// agent never needs to re-derive betting rules.
pub trait PlayerAgent {
    fn decide(&mut self, view: &GameView) -> Action;
}

/// Plays a fixed sequence of actions, then checks or folds. Handy for
/// steering tests through an exact line.
#[derive(Debug, Default)]
pub struct ScriptedAgent {
    script: VecDeque<Action>,
}

impl ScriptedAgent {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self { script: actions.into_iter().collect() }
    }
}

impl PlayerAgent for ScriptedAgent {
    fn decide(&mut self, view: &GameView) -> Action {
        self.script.pop_front().unwrap_or(if view.to_call == 0 {
            Action::Check
        } else {
            Action::Fold
        })
    }
}

/// Never folds, never bets: checks when free, calls when not.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallingAgent;

impl PlayerAgent for CallingAgent {
    fn decide(&mut self, view: &GameView) -> Action {
        if view.to_call == 0 {
            Action::Check
        } else {
            Action::Call
        }
    }
}

/// A loose random player with its own seeded RNG, used to fuzz full hands.
/// Always picks from the legal options.
#[derive(Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    fn bet_bounds(view: &GameView) -> Option<(u64, u64)> {
        view.legal.iter().find_map(|a| match *a {
            LegalAction::Bet { min, max } | LegalAction::Raise { min, max } => Some((min, max)),
            _ => None,
        })
    }
}

impl PlayerAgent for RandomAgent {
    fn decide(&mut self, view: &GameView) -> Action {
        let roll = self.rng.random_range(0..100u32);
        if view.to_call == 0 {
            match Self::bet_bounds(view) {
                Some((min, max)) if roll >= 60 && max > 0 => {
                    let cap = max.min(min.saturating_mul(3)).max(min);
                    let total = self.rng.random_range(min..=cap);
                    if view.current_bet == 0 {
                        Action::Bet(total)
                    } else {
                        Action::Raise(total)
                    }
                }
                _ => Action::Check,
            }
        } else if roll < 15 {
            Action::Fold
        } else if roll >= 85 {
            match Self::bet_bounds(view) {
                Some((min, max)) => {
                    let cap = max.min(min.saturating_mul(2)).max(min);
                    Action::Raise(self.rng.random_range(min..=cap))
                }
                None => Action::Call,
            }
        } else {
            Action::Call
        }
    }
}
