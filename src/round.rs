//! Single betting round state machine: turn order, bet/raise validation,
//! min-raise tracking and the short all-in reopening rule.

use crate::seat::Seat;
use std::fmt;

/// The four betting streets of a hold'em hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::PreFlop => Some(Stage::Flop),
            Stage::Flop => Some(Stage::Turn),
            Stage::Turn => Some(Stage::River),
            Stage::River => None,
        }
    }

    /// Community cards dealt when this street begins.
    pub(crate) fn deal_count(self) -> usize {
        match self {
            Stage::PreFlop => 0,
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::PreFlop => "pre-flop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
        };
        f.write_str(s)
    }
}

/// A player's chosen action. `Bet` and `Raise` carry the TOTAL the seat's
/// round bet is raised to, not the increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(u64),
    Raise(u64),
    AllIn,
}

/// One legal option for the seat whose turn it is, with the chip bounds
/// already worked out against their stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalAction {
    Fold,
    Check,
    /// Chips that would leave the stack on a call (capped by the stack).
    Call(u64),
    /// Opening bet; bounds are round-bet totals.
    Bet { min: u64, max: u64 },
    /// Raise; bounds are round-bet totals.
    Raise { min: u64, max: u64 },
    /// Push the whole stack; the value is the resulting round-bet total.
    AllIn(u64),
}

/// What an accepted action turned out to be once stack caps applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedAction {
    Folded,
    Checked,
    /// Chips actually paid (less than the amount owed when short).
    Called(u64),
    /// Round-bet total.
    Bet(u64),
    /// Round-bet total.
    RaisedTo(u64),
    /// Round-bet total.
    WentAllIn(u64),
}

impl fmt::Display for AppliedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppliedAction::Folded => write!(f, "folds"),
            AppliedAction::Checked => write!(f, "checks"),
            AppliedAction::Called(n) => write!(f, "calls {n}"),
            AppliedAction::Bet(n) => write!(f, "bets {n}"),
            AppliedAction::RaisedTo(n) => write!(f, "raises to {n}"),
            AppliedAction::WentAllIn(n) => write!(f, "is all-in for {n}"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("seat {got} acted out of turn; seat {expected} is to act")]
    OutOfTurn { expected: usize, got: usize },
    #[error("betting round is closed")]
    RoundClosed,
    #[error("the hand is complete; no further actions")]
    HandComplete,
    #[error("no seat at index {0}")]
    NoSuchSeat(usize),
    #[error("seat {0} cannot act (folded or all-in)")]
    CannotAct(usize),
    #[error("cannot check facing a bet; {to_call} to call")]
    CheckFacingBet { to_call: u64 },
    #[error("nothing to call; check instead")]
    NothingToCall,
    #[error("cannot bet facing a bet; raise instead")]
    BetFacingBet,
    #[error("cannot raise with no bet to raise; bet instead")]
    RaiseWithoutBet,
    #[error("raise target {got} does not exceed the current bet of {current}")]
    TargetTooLow { current: u64, got: u64 },
    #[error("bet of {got} is below the minimum of {min}")]
    BetBelowMinimum { min: u64, got: u64 },
    #[error("raise to {got} is below the minimum of {min}")]
    RaiseBelowMinimum { min: u64, got: u64 },
    #[error("amount {got} exceeds the seat's maximum of {max}")]
    AmountTooLarge { max: u64, got: u64 },
    #[error("a short all-in did not reopen the action; call or fold")]
    RaiseNotReopened,
}

/// One betting round over a shared seat list. Seats are indexed by table
/// position; the round tracks whose turn it is, the bet to match, and which
/// seats still owe an action.
#[derive(Debug, Clone)]
pub struct BettingRound {
    stage: Stage,
    current_bet: u64,
    min_raise: u64,
    to_act: Option<usize>,
    /// Seat still owes an action this round.
    pending: Vec<bool>,
    /// Seat may raise when the turn arrives. Cleared once a seat acts;
    /// restored for everyone else by a full raise, but NOT by a short
    /// all-in, which only reopens calling.
    may_raise: Vec<bool>,
    closed: bool,
}

impl BettingRound {
    /// Open a round over `seats`. Blinds must already be committed for the
    /// pre-flop round; `current_bet` picks up the largest posted amount.
    /// `big_blind` seeds the minimum raise increment. `first_to_act` is the
    /// preferred first seat; the opener walks clockwise from there to the
    /// first seat that can act.
    pub(crate) fn open(seats: &[Seat], stage: Stage, big_blind: u64, first_to_act: usize) -> Self {
        let n = seats.len();
        let current_bet = seats.iter().map(Seat::round_bet).max().unwrap_or(0);
        let pending: Vec<bool> = seats.iter().map(Seat::can_act).collect();
        let may_raise = pending.clone();

        let mut round = Self {
            stage,
            current_bet,
            min_raise: big_blind,
            to_act: None,
            pending,
            may_raise,
            closed: false,
        };

        let live = seats.iter().filter(|s| s.is_live()).count();
        let actors = seats.iter().filter(|s| s.can_act()).count();
        let lone_actor_owes_nothing = actors == 1
            && seats
                .iter()
                .find(|s| s.can_act())
                .map(|s| s.round_bet() >= current_bet)
                .unwrap_or(false);
        if live <= 1 || actors == 0 || lone_actor_owes_nothing {
            round.closed = true;
            return round;
        }

        // Walk clockwise from the preferred seat to the first pending one.
        for off in 0..n {
            let i = (first_to_act + off) % n;
            if round.pending[i] && seats[i].can_act() {
                round.to_act = Some(i);
                break;
            }
        }
        if round.to_act.is_none() {
            round.closed = true;
        }
        round
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn min_raise(&self) -> u64 {
        self.min_raise
    }

    pub fn to_act(&self) -> Option<usize> {
        self.to_act
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The legal options for `seat` right now. Empty unless it is that
    /// seat's turn in an open round.
    pub fn legal_actions(&self, seats: &[Seat], seat: usize) -> Vec<LegalAction> {
        if self.closed || self.to_act != Some(seat) {
            return Vec::new();
        }
        let s = &seats[seat];
        let owe = self.current_bet.saturating_sub(s.round_bet());
        let max_total = s.round_bet() + s.stack();

        let mut out = vec![LegalAction::Fold];
        if owe == 0 {
            out.push(LegalAction::Check);
        } else {
            out.push(LegalAction::Call(owe.min(s.stack())));
        }
        if self.current_bet == 0 {
            out.push(LegalAction::Bet { min: self.min_raise.min(max_total), max: max_total });
        } else if self.may_raise[seat] && max_total > self.current_bet {
            out.push(LegalAction::Raise {
                min: (self.current_bet + self.min_raise).min(max_total),
                max: max_total,
            });
        }
        // An all-in that would top the bet is a raise; offer it only when
        // the action is open to this seat.
        if max_total <= self.current_bet || self.current_bet == 0 || self.may_raise[seat] {
            out.push(LegalAction::AllIn(max_total));
        }
        out
    }

    /// Apply `action` for `seat`. Rejected actions leave the round and the
    /// seats untouched; an accepted one moves chips, updates the bet state
    /// and passes the turn (or closes the round).
    pub(crate) fn apply(
        &mut self,
        seats: &mut [Seat],
        seat: usize,
        action: Action,
    ) -> Result<AppliedAction, ActionError> {
        if self.closed {
            return Err(ActionError::RoundClosed);
        }
        if seat >= seats.len() {
            return Err(ActionError::NoSuchSeat(seat));
        }
        if !seats[seat].can_act() {
            return Err(ActionError::CannotAct(seat));
        }
        match self.to_act {
            Some(expected) if expected == seat => {}
            Some(expected) => return Err(ActionError::OutOfTurn { expected, got: seat }),
            None => return Err(ActionError::RoundClosed),
        }

        let applied = match action {
            Action::Fold => {
                seats[seat].fold();
                self.pending[seat] = false;
                self.may_raise[seat] = false;
                AppliedAction::Folded
            }
            Action::Check => {
                let owe = self.current_bet.saturating_sub(seats[seat].round_bet());
                if owe > 0 {
                    return Err(ActionError::CheckFacingBet { to_call: owe });
                }
                self.pending[seat] = false;
                self.may_raise[seat] = false;
                AppliedAction::Checked
            }
            Action::Call => {
                let owe = self.current_bet.saturating_sub(seats[seat].round_bet());
                if owe == 0 {
                    return Err(ActionError::NothingToCall);
                }
                let paid = seats[seat].commit(owe);
                self.pending[seat] = false;
                self.may_raise[seat] = false;
                if seats[seat].stack() == 0 {
                    AppliedAction::WentAllIn(seats[seat].round_bet())
                } else {
                    AppliedAction::Called(paid)
                }
            }
            Action::Bet(total) => {
                if self.current_bet > 0 {
                    return Err(ActionError::BetFacingBet);
                }
                self.place_total(seats, seat, total, true)?
            }
            Action::Raise(total) => {
                if self.current_bet == 0 {
                    return Err(ActionError::RaiseWithoutBet);
                }
                if !self.may_raise[seat] {
                    return Err(ActionError::RaiseNotReopened);
                }
                self.place_total(seats, seat, total, false)?
            }
            Action::AllIn => {
                let total = seats[seat].round_bet() + seats[seat].stack();
                if total <= self.current_bet {
                    // All-in for at most the call amount.
                    let stack = seats[seat].stack();
                    seats[seat].commit(stack);
                    self.pending[seat] = false;
                    self.may_raise[seat] = false;
                    AppliedAction::WentAllIn(total)
                } else {
                    if self.current_bet > 0 && !self.may_raise[seat] {
                        return Err(ActionError::RaiseNotReopened);
                    }
                    self.place_total(seats, seat, total, self.current_bet == 0)?
                }
            }
        };

        self.advance(seats, seat);
        Ok(applied)
    }

    /// Validate and commit a bet or raise to a round-bet total of `total`.
    fn place_total(
        &mut self,
        seats: &mut [Seat],
        seat: usize,
        total: u64,
        is_bet: bool,
    ) -> Result<AppliedAction, ActionError> {
        let max_total = seats[seat].round_bet() + seats[seat].stack();
        if total > max_total {
            return Err(ActionError::AmountTooLarge { max: max_total, got: total });
        }
        if total <= self.current_bet {
            return Err(ActionError::TargetTooLow { current: self.current_bet, got: total });
        }
        let min_total = self.current_bet + self.min_raise;
        if total < min_total && total != max_total {
            return Err(if is_bet {
                ActionError::BetBelowMinimum { min: min_total, got: total }
            } else {
                ActionError::RaiseBelowMinimum { min: min_total, got: total }
            });
        }

        let owe = total - seats[seat].round_bet();
        seats[seat].commit(owe);
        let raise_by = total - self.current_bet;
        self.current_bet = total;
        self.pending[seat] = false;
        self.may_raise[seat] = false;

        // A full raise resets the increment and restores everyone's right
        // to raise; a short all-in only obliges the others to respond.
        let full = raise_by >= self.min_raise;
        if full {
            self.min_raise = raise_by;
        }
        for (i, s) in seats.iter().enumerate() {
            if i != seat && s.can_act() {
                self.pending[i] = true;
                if full {
                    self.may_raise[i] = true;
                }
            }
        }

        Ok(if seats[seat].stack() == 0 {
            AppliedAction::WentAllIn(total)
        } else if is_bet {
            AppliedAction::Bet(total)
        } else {
            AppliedAction::RaisedTo(total)
        })
    }

    /// Pass the turn to the next pending seat clockwise from `after`, or
    /// close the round when no seat owes an action (or one player remains).
    fn advance(&mut self, seats: &[Seat], after: usize) {
        let live = seats.iter().filter(|s| s.is_live()).count();
        if live <= 1 {
            self.closed = true;
            self.to_act = None;
            return;
        }
        let n = seats.len();
        for off in 1..=n {
            let i = (after + off) % n;
            if self.pending[i] && seats[i].can_act() {
                self.to_act = Some(i);
                return;
            }
        }
        self.closed = true;
        self.to_act = None;
    }
}
