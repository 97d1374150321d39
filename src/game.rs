//! Hand orchestration: blinds, dealing, street progression, settlement,
//! and the multi-hand table that rotates the button.

use crate::agents::PlayerAgent;
use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::EvalError;
use crate::hand::{Board, HoleCards};
use crate::pot::{settle_pots, Payout};
use crate::round::{Action, ActionError, AppliedAction, BettingRound, LegalAction, Stage};
use crate::seat::{Seat, SeatStatus};

pub const MAX_SEATS: usize = 10;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("a hand needs at least two funded seats, got {funded}")]
    NotEnoughPlayers { funded: usize },
    #[error("at most {MAX_SEATS} seats per table, got {0}")]
    TooManySeats(usize),
    #[error("blinds must be positive")]
    NonPositiveBlind,
    #[error("small blind {small} exceeds big blind {big}")]
    BlindOrder { small: u64, big: u64 },
    #[error("dealer seat {0} is out of range")]
    DealerOutOfRange(usize),
    #[error("dealer seat {0} has no chips")]
    DealerSittingOut(usize),
    #[error("{seats} seats but {agents} agents")]
    AgentMismatch { seats: usize, agents: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettleError {
    #[error("hand is not complete")]
    HandNotComplete,
    #[error("hand was already settled")]
    AlreadySettled,
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Settle(#[from] SettleError),
}

/// A seat assignment for the start of a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub stack: u64,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, stack: u64) -> Self {
        Self { name: name.into(), stack }
    }
}

/// Everything observable that happened during a hand, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandEvent {
    SmallBlind { seat: usize, amount: u64 },
    BigBlind { seat: usize, amount: u64 },
    Action { seat: usize, applied: AppliedAction },
    Board { stage: Stage, cards: Vec<Card> },
    Payout { seat: usize, amount: u64 },
}

/// What one seat is allowed to see: its own cards, the board, the bet
/// state, and only public facts about the other seats.
#[derive(Debug, Clone)]
pub struct GameView {
    pub seat: usize,
    pub stage: Stage,
    pub pot: u64,
    pub current_bet: u64,
    pub min_raise: u64,
    pub to_call: u64,
    pub board: Vec<Card>,
    pub hole: Option<HoleCards>,
    pub stack: u64,
    pub round_bet: u64,
    pub is_turn: bool,
    pub legal: Vec<LegalAction>,
    pub opponents: Vec<SeatPublic>,
}

/// Public table state for one opposing seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatPublic {
    pub seat: usize,
    pub name: String,
    pub stack: u64,
    pub round_bet: u64,
    pub status: SeatStatus,
}

/// One hand of no-limit hold'em from blinds to settlement.
///
/// ```
/// use holdem_engine::game::{HandState, SeatConfig};
/// use holdem_engine::round::Action;
///
/// let players =
///     vec![SeatConfig::new("alice", 200), SeatConfig::new("bob", 200)];
/// let mut hand = HandState::start_seeded(&players, 0, 5, 10, 42).unwrap();
/// // Heads-up: the dealer posts the small blind and acts first.
/// assert_eq!(hand.to_act(), Some(0));
/// hand.apply(0, Action::Fold).unwrap();
/// assert!(hand.is_complete());
/// let payouts = hand.settle().unwrap();
/// assert_eq!(payouts[0].seat, 1);
/// ```
#[derive(Debug)]
pub struct HandState {
    seats: Vec<Seat>,
    deck: Deck,
    board: Board,
    dealer: usize,
    big_blind: u64,
    round: BettingRound,
    complete: bool,
    settled: bool,
    starting_total: u64,
    events: Vec<HandEvent>,
}

impl HandState {
    /// Start a hand with a freshly shuffled deck.
    pub fn start(
        players: &[SeatConfig],
        dealer: usize,
        small_blind: u64,
        big_blind: u64,
    ) -> Result<Self, ConfigError> {
        let deck = Deck::shuffled(&mut rand::rng());
        Self::start_with_deck(players, dealer, small_blind, big_blind, deck)
    }

    /// Start a reproducible hand from a deck seed.
    pub fn start_seeded(
        players: &[SeatConfig],
        dealer: usize,
        small_blind: u64,
        big_blind: u64,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let deck = Deck::shuffled_from_seed(seed);
        Self::start_with_deck(players, dealer, small_blind, big_blind, deck)
    }

    fn start_with_deck(
        players: &[SeatConfig],
        dealer: usize,
        small_blind: u64,
        big_blind: u64,
        mut deck: Deck,
    ) -> Result<Self, ConfigError> {
        let n = players.len();
        if n > MAX_SEATS {
            return Err(ConfigError::TooManySeats(n));
        }
        let funded = players.iter().filter(|p| p.stack > 0).count();
        if funded < 2 {
            return Err(ConfigError::NotEnoughPlayers { funded });
        }
        if small_blind == 0 || big_blind == 0 {
            return Err(ConfigError::NonPositiveBlind);
        }
        if small_blind > big_blind {
            return Err(ConfigError::BlindOrder { small: small_blind, big: big_blind });
        }
        if dealer >= n {
            return Err(ConfigError::DealerOutOfRange(dealer));
        }
        if players[dealer].stack == 0 {
            return Err(ConfigError::DealerSittingOut(dealer));
        }

        let mut seats: Vec<Seat> =
            players.iter().map(|p| Seat::new(p.name.clone(), p.stack)).collect();
        for seat in seats.iter_mut().filter(|s| s.stack() == 0) {
            seat.sit_out();
        }
        let starting_total: u64 = seats.iter().map(Seat::stack).sum();

        // Deal clockwise from the dealer's left before posting blinds.
        for off in 1..=n {
            let i = (dealer + off) % n;
            if seats[i].can_act() {
                let a = deck.draw().expect("52 cards cover a full hand");
                let b = deck.draw().expect("52 cards cover a full hand");
                seats[i].deal(HoleCards::try_new(a, b).expect("deck cards are distinct"));
            }
        }

        // Blind seats clockwise from the dealer; heads-up the dealer posts
        // the small blind and acts first pre-flop.
        let order: Vec<usize> =
            (0..n).map(|off| (dealer + off) % n).filter(|&i| seats[i].can_act()).collect();
        let (sb_seat, bb_seat, first) = if order.len() == 2 {
            (order[0], order[1], order[0])
        } else {
            (order[1], order[2], *order.get(3).unwrap_or(&order[0]))
        };

        let mut events = Vec::new();
        let posted = seats[sb_seat].commit(small_blind);
        events.push(HandEvent::SmallBlind { seat: sb_seat, amount: posted });
        let posted = seats[bb_seat].commit(big_blind);
        events.push(HandEvent::BigBlind { seat: bb_seat, amount: posted });

        let round = BettingRound::open(&seats, Stage::PreFlop, big_blind, first);
        let mut hand = Self {
            seats,
            deck,
            board: Board::new(),
            dealer,
            big_blind,
            round,
            complete: false,
            settled: false,
            starting_total,
            events,
        };
        // Blinds may already be all-in; run the board out if so.
        hand.advance_streets();
        Ok(hand)
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    pub fn stage(&self) -> Stage {
        self.round.stage()
    }

    pub fn board(&self) -> &[Card] {
        self.board.cards()
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// All chips committed to the hand so far.
    pub fn pot(&self) -> u64 {
        self.seats.iter().map(Seat::committed).sum()
    }

    pub fn to_act(&self) -> Option<usize> {
        if self.complete {
            None
        } else {
            self.round.to_act()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn events(&self) -> &[HandEvent] {
        &self.events
    }

    /// The legal options for `seat`; empty when it is not that seat's turn
    /// or the hand is over.
    pub fn legal_actions(&self, seat: usize) -> Vec<LegalAction> {
        if self.complete {
            return Vec::new();
        }
        self.round.legal_actions(&self.seats, seat)
    }

    /// Apply `seat`'s action. Rejections leave the hand untouched; accepted
    /// actions may close the round, deal further streets, or end the hand.
    pub fn apply(&mut self, seat: usize, action: Action) -> Result<AppliedAction, ActionError> {
        if self.complete {
            return Err(ActionError::HandComplete);
        }
        let applied = self.round.apply(&mut self.seats, seat, action)?;
        self.events.push(HandEvent::Action { seat, applied });
        self.advance_streets();
        Ok(applied)
    }

    /// Deal forward while no betting is possible: next streets after a
    /// closed round, the full runout when everyone is all-in, and hand
    /// completion at a lone survivor or a finished river.
    fn advance_streets(&mut self) {
        while self.round.is_closed() && !self.complete {
            let live = self.seats.iter().filter(|s| s.is_live()).count();
            let next = match self.round.stage().next() {
                Some(next) if live > 1 => next,
                _ => {
                    self.complete = true;
                    return;
                }
            };
            for seat in &mut self.seats {
                seat.clear_round_bet();
            }
            let cards = self
                .deck
                .draw_n(next.deal_count())
                .expect("52 cards cover a full hand");
            for &card in &cards {
                self.board.push(card);
            }
            self.events.push(HandEvent::Board { stage: next, cards });
            self.round = BettingRound::open(
                &self.seats,
                next,
                self.big_blind,
                (self.dealer + 1) % self.seats.len(),
            );
        }
    }

    /// Pay the pot out and credit winners' stacks. Callable once, after the
    /// hand completes.
    pub fn settle(&mut self) -> Result<Vec<Payout>, SettleError> {
        if !self.complete {
            return Err(SettleError::HandNotComplete);
        }
        if self.settled {
            return Err(SettleError::AlreadySettled);
        }
        let payouts = settle_pots(&self.seats, &self.board, self.dealer)?;
        for p in &payouts {
            self.seats[p.seat].credit(p.amount);
            self.events.push(HandEvent::Payout { seat: p.seat, amount: p.amount });
        }
        self.settled = true;
        let total: u64 = self.seats.iter().map(Seat::stack).sum();
        assert_eq!(
            total, self.starting_total,
            "chip conservation violated: {total} != {}",
            self.starting_total
        );
        Ok(payouts)
    }

    /// `seat`'s private view of the hand, or `None` for an unknown seat.
    pub fn view_for(&self, seat: usize) -> Option<GameView> {
        let s = self.seats.get(seat)?;
        let opponents = self
            .seats
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != seat)
            .map(|(i, o)| SeatPublic {
                seat: i,
                name: o.name().to_string(),
                stack: o.stack(),
                round_bet: o.round_bet(),
                status: o.status(),
            })
            .collect();
        Some(GameView {
            seat,
            stage: self.round.stage(),
            pot: self.pot(),
            current_bet: self.round.current_bet(),
            min_raise: self.round.min_raise(),
            to_call: self.round.current_bet().saturating_sub(s.round_bet()),
            board: self.board.cards().to_vec(),
            hole: s.hole().copied(),
            stack: s.stack(),
            round_bet: s.round_bet(),
            is_turn: self.to_act() == Some(seat),
            legal: self.legal_actions(seat),
            opponents,
        })
    }
}

/// Result of one table hand: who got paid, the final board, and the full
/// event log.
#[derive(Debug, Clone)]
pub struct HandSummary {
    pub dealer: usize,
    pub board: Vec<Card>,
    pub payouts: Vec<Payout>,
    pub events: Vec<HandEvent>,
}

/// A table that plays hand after hand, moving the button clockwise over
/// the seats that still have chips.
#[derive(Debug, Clone)]
pub struct Table {
    players: Vec<SeatConfig>,
    dealer: usize,
    small_blind: u64,
    big_blind: u64,
    started: bool,
}

impl Table {
    pub fn new(
        players: Vec<SeatConfig>,
        small_blind: u64,
        big_blind: u64,
    ) -> Result<Self, ConfigError> {
        if players.len() > MAX_SEATS {
            return Err(ConfigError::TooManySeats(players.len()));
        }
        let funded = players.iter().filter(|p| p.stack > 0).count();
        if funded < 2 {
            return Err(ConfigError::NotEnoughPlayers { funded });
        }
        if small_blind == 0 || big_blind == 0 {
            return Err(ConfigError::NonPositiveBlind);
        }
        if small_blind > big_blind {
            return Err(ConfigError::BlindOrder { small: small_blind, big: big_blind });
        }
        Ok(Self { players, dealer: 0, small_blind, big_blind, started: false })
    }

    pub fn players(&self) -> &[SeatConfig] {
        &self.players
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u64 {
        self.big_blind
    }

    /// Seats that can still be dealt in.
    pub fn funded_players(&self) -> usize {
        self.players.iter().filter(|p| p.stack > 0).count()
    }

    fn next_funded(&self, from: usize) -> usize {
        let n = self.players.len();
        (1..=n)
            .map(|off| (from + off) % n)
            .find(|&i| self.players[i].stack > 0)
            .unwrap_or(from)
    }

    fn advance_button(&mut self) {
        if self.started {
            self.dealer = self.next_funded(self.dealer);
        } else {
            self.started = true;
            if self.players[self.dealer].stack == 0 {
                self.dealer = self.next_funded(self.dealer);
            }
        }
    }

    /// Play one full hand, asking each agent for a decision whenever its
    /// seat is to act, and write the resulting stacks back to the table.
    pub fn play_hand(
        &mut self,
        agents: &mut [Box<dyn PlayerAgent>],
    ) -> Result<HandSummary, GameError> {
        self.advance_button();
        let hand =
            HandState::start(&self.players, self.dealer, self.small_blind, self.big_blind)?;
        self.drive(hand, agents)
    }

    /// Like [`Table::play_hand`] with a fixed deck seed.
    pub fn play_hand_seeded(
        &mut self,
        agents: &mut [Box<dyn PlayerAgent>],
        seed: u64,
    ) -> Result<HandSummary, GameError> {
        self.advance_button();
        let hand = HandState::start_seeded(
            &self.players,
            self.dealer,
            self.small_blind,
            self.big_blind,
            seed,
        )?;
        self.drive(hand, agents)
    }

    fn drive(
        &mut self,
        mut hand: HandState,
        agents: &mut [Box<dyn PlayerAgent>],
    ) -> Result<HandSummary, GameError> {
        if agents.len() != self.players.len() {
            return Err(ConfigError::AgentMismatch {
                seats: self.players.len(),
                agents: agents.len(),
            }
            .into());
        }
        while let Some(seat) = hand.to_act() {
            let view = hand.view_for(seat).expect("acting seat exists");
            let action = agents[seat].decide(&view);
            if hand.apply(seat, action).is_err() {
                // An agent returning an illegal action forfeits the choice:
                // try to keep its chips in with a call or check, else fold.
                if hand.apply(seat, Action::Call).is_err()
                    && hand.apply(seat, Action::Check).is_err()
                {
                    hand.apply(seat, Action::Fold).expect("fold is legal in turn");
                }
            }
        }
        let payouts = hand.settle().map_err(GameError::Settle)?;
        for (player, seat) in self.players.iter_mut().zip(hand.seats()) {
            player.stack = seat.stack();
        }
        Ok(HandSummary {
            dealer: hand.dealer(),
            board: hand.board().to_vec(),
            payouts,
            events: hand.events().to_vec(),
        })
    }
}
