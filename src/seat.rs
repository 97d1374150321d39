use crate::hand::HoleCards;

/// Whether a seat can still act, is locked in, or is out of the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    /// Holds chips and may act when the turn comes around.
    Active,
    /// Out of the hand; forfeits any claim on the pot.
    Folded,
    /// Stack fully committed; stays in for showdown but acts no more.
    AllIn,
}

/// One seat at the table for the duration of a single hand.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    stack: u64,
    hole: Option<HoleCards>,
    /// Chips committed during the current betting round.
    round_bet: u64,
    /// Chips committed over the whole hand, across all rounds.
    committed: u64,
    status: SeatStatus,
}

impl Seat {
    pub(crate) fn new(name: impl Into<String>, stack: u64) -> Self {
        Self {
            name: name.into(),
            stack,
            hole: None,
            round_bet: 0,
            committed: 0,
            status: SeatStatus::Active,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stack(&self) -> u64 {
        self.stack
    }

    pub fn hole(&self) -> Option<&HoleCards> {
        self.hole.as_ref()
    }

    pub fn round_bet(&self) -> u64 {
        self.round_bet
    }

    pub fn committed(&self) -> u64 {
        self.committed
    }

    pub fn status(&self) -> SeatStatus {
        self.status
    }

    /// Still contending for the pot (has not folded).
    pub fn is_live(&self) -> bool {
        self.status != SeatStatus::Folded
    }

    /// May take a voluntary action this round.
    pub fn can_act(&self) -> bool {
        self.status == SeatStatus::Active
    }

    pub(crate) fn deal(&mut self, hole: HoleCards) {
        self.hole = Some(hole);
    }

    pub(crate) fn fold(&mut self) {
        self.status = SeatStatus::Folded;
    }

    pub(crate) fn sit_out(&mut self) {
        self.status = SeatStatus::Folded;
        self.hole = None;
    }

    /// Move up to `amount` chips from the stack into the current bet,
    /// capped by the stack. Returns what was actually paid; a seat whose
    /// stack reaches zero goes all-in.
    pub(crate) fn commit(&mut self, amount: u64) -> u64 {
        let pay = amount.min(self.stack);
        self.stack -= pay;
        self.round_bet += pay;
        self.committed += pay;
        if self.stack == 0 && self.status == SeatStatus::Active {
            self.status = SeatStatus::AllIn;
        }
        pay
    }

    pub(crate) fn clear_round_bet(&mut self) {
        self.round_bet = 0;
    }

    pub(crate) fn credit(&mut self, amount: u64) {
        self.stack += amount;
    }
}
