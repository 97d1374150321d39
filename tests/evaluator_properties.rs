use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::evaluator::{evaluate, evaluate_five, Category};
use proptest::prelude::*;

fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for &suit in &Suit::ALL {
        for &rank in &Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

fn seven_distinct() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(), 7)
}

/// An offsuit straight topped by `top` (5 = the wheel).
fn straight_cards(top: u8) -> [Card; 5] {
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Clubs, Suit::Diamonds];
    let values: [u8; 5] = if top == 5 {
        [14, 2, 3, 4, 5]
    } else {
        [top - 4, top - 3, top - 2, top - 1, top]
    };
    let mut out = [Card::new(Rank::Two, Suit::Clubs); 5];
    for (i, (&v, &s)) in values.iter().zip(&suits).enumerate() {
        out[i] = Card::new(Rank::from_value(v).unwrap(), s);
    }
    out
}

proptest! {
    #[test]
    fn evaluation_ignores_card_order(cards in seven_distinct().prop_shuffle()) {
        let mut sorted = cards.clone();
        sorted.sort();
        let a = evaluate(&cards).unwrap();
        let b = evaluate(&sorted).unwrap();
        prop_assert_eq!(a.rank(), b.rank());
    }

    #[test]
    fn extra_cards_never_weaken_a_hand(
        (seven, five) in seven_distinct()
            .prop_flat_map(|seven| {
                let five = prop::sample::subsequence(seven.clone(), 5);
                (Just(seven), five)
            })
    ) {
        let whole = evaluate(&seven).unwrap();
        let part = evaluate(&five).unwrap();
        prop_assert!(part.rank() <= whole.rank());
    }

    #[test]
    fn straights_order_by_top_card(a in 5u8..=14, b in 5u8..=14) {
        let ea = evaluate_five(&straight_cards(a));
        let eb = evaluate_five(&straight_cards(b));
        prop_assert_eq!(ea.category, Category::Straight);
        prop_assert_eq!(a.cmp(&b), ea.rank().cmp(&eb.rank()));
    }

    #[test]
    fn comparison_is_antisymmetric(
        x in seven_distinct(),
        y in seven_distinct(),
    ) {
        let ex = evaluate(&x).unwrap();
        let ey = evaluate(&y).unwrap();
        prop_assert_eq!(ex.rank().cmp(&ey.rank()), ey.rank().cmp(&ex.rank()).reverse());
    }
}

#[test]
fn the_wheel_is_the_weakest_straight() {
    let wheel = evaluate_five(&straight_cards(5));
    for top in 6u8..=14 {
        assert!(wheel < evaluate_five(&straight_cards(top)), "wheel beat {top}-high");
    }
}
