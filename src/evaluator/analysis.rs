use crate::cards::Card;
use crate::evaluator::Category;

/// Pre-computed facts about a 5-card hand: rank groups, flush, straight.
/// Built once per combination, then classified with a single priority chain.
#[derive(Debug, Clone)]
pub(crate) struct Analysis {
    /// Cards sorted by rank descending (suit descending as a tie-break).
    pub(crate) sorted: [Card; 5],
    /// (rank value, count) groups, sorted by count descending then rank
    /// descending. AAAKQ becomes [(14,3), (13,1), (12,1)].
    groups: Vec<(u8, u8)>,
    flush: bool,
    /// Top rank value of a straight; 5 for the wheel (A-2-3-4-5).
    straight_high: Option<u8>,
}

impl Analysis {
    pub(crate) fn new(cards: &[Card; 5]) -> Self {
        let mut sorted = *cards;
        sorted.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let mut counts = [0u8; 15];
        for c in &sorted {
            counts[c.rank().value() as usize] += 1;
        }
        let mut groups: Vec<(u8, u8)> = (2u8..=14)
            .filter(|&v| counts[v as usize] > 0)
            .map(|v| (v, counts[v as usize]))
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        let flush = sorted.iter().all(|c| c.suit() == sorted[0].suit());
        let straight_high = detect_straight(&sorted);

        Self { sorted, groups, flush, straight_high }
    }

    /// Classify into (category, tie-break sequence). The tie-break array is
    /// padded with zeros so lexicographic comparison only ever sees the
    /// positions that matter for the category.
    pub(crate) fn classify(&self) -> (Category, [u8; 5]) {
        let g = &self.groups;
        if self.flush {
            if let Some(high) = self.straight_high {
                return (Category::StraightFlush, pad(&[high]));
            }
        }
        if g[0].1 == 4 {
            return (Category::FourOfAKind, pad(&[g[0].0, g[1].0]));
        }
        if g[0].1 == 3 && g[1].1 == 2 {
            return (Category::FullHouse, pad(&[g[0].0, g[1].0]));
        }
        if self.flush {
            return (Category::Flush, self.ranks_desc());
        }
        if let Some(high) = self.straight_high {
            return (Category::Straight, pad(&[high]));
        }
        if g[0].1 == 3 {
            return (Category::ThreeOfAKind, pad(&[g[0].0, g[1].0, g[2].0]));
        }
        if g[0].1 == 2 && g[1].1 == 2 {
            return (Category::TwoPair, pad(&[g[0].0, g[1].0, g[2].0]));
        }
        if g[0].1 == 2 {
            return (Category::Pair, pad(&[g[0].0, g[1].0, g[2].0, g[3].0]));
        }
        (Category::HighCard, self.ranks_desc())
    }

    fn ranks_desc(&self) -> [u8; 5] {
        [
            self.sorted[0].rank().value(),
            self.sorted[1].rank().value(),
            self.sorted[2].rank().value(),
            self.sorted[3].rank().value(),
            self.sorted[4].rank().value(),
        ]
    }
}

fn pad(ranks: &[u8]) -> [u8; 5] {
    let mut out = [0u8; 5];
    out[..ranks.len()].copy_from_slice(ranks);
    out
}

/// A straight is five distinct consecutive ranks, or the wheel, where the
/// Ace counts as 1 and the Five is high.
fn detect_straight(sorted: &[Card; 5]) -> Option<u8> {
    let v: [u8; 5] = [
        sorted[0].rank().value(),
        sorted[1].rank().value(),
        sorted[2].rank().value(),
        sorted[3].rank().value(),
        sorted[4].rank().value(),
    ];
    if (0..4).all(|i| v[i] == v[i + 1] + 1) {
        return Some(v[0]);
    }
    if v == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> Analysis {
        let cards = parse_cards(s).unwrap();
        let arr: [Card; 5] = cards.try_into().unwrap();
        Analysis::new(&arr)
    }

    #[test]
    fn classify_each_category() {
        assert_eq!(analyze("As Ks Qs Js 10s").classify().0, Category::StraightFlush);
        assert_eq!(analyze("Kc Kd Kh Ks 2s").classify().0, Category::FourOfAKind);
        assert_eq!(analyze("10c 10d 10h 2s 2h").classify().0, Category::FullHouse);
        assert_eq!(analyze("Ah 9h 7h 3h 2h").classify().0, Category::Flush);
        assert_eq!(analyze("9s 8h 7d 6c 5s").classify().0, Category::Straight);
        assert_eq!(analyze("Qc Qd Qh 9s 2c").classify().0, Category::ThreeOfAKind);
        assert_eq!(analyze("Jc Jd 9c 9h 2s").classify().0, Category::TwoPair);
        assert_eq!(analyze("Ah Ad 10s 9c 2d").classify().0, Category::Pair);
        assert_eq!(analyze("Ah Kd 7s 5c 2d").classify().0, Category::HighCard);
    }

    #[test]
    fn wheel_is_a_five_high_straight() {
        let (cat, tb) = analyze("Ac 2d 3h 4s 5c").classify();
        assert_eq!(cat, Category::Straight);
        assert_eq!(tb[0], 5);
    }

    #[test]
    fn steel_wheel_is_a_five_high_straight_flush() {
        let (cat, tb) = analyze("Ah 2h 3h 4h 5h").classify();
        assert_eq!(cat, Category::StraightFlush);
        assert_eq!(tb[0], 5);
    }

    #[test]
    fn two_pair_orders_high_pair_first() {
        let (_, tb) = analyze("Kc Kd 9c 9h Qs").classify();
        assert_eq!(&tb[..3], &[13, 9, 12]);
    }

    #[test]
    fn full_house_is_trips_then_pair() {
        let (_, tb) = analyze("2c 2d 2h As Ah").classify();
        assert_eq!(&tb[..2], &[2, 14]);
    }

    #[test]
    fn cards_sorted_descending() {
        let a = analyze("3s Ah 5d Kc 9s");
        let ranks: Vec<u8> = a.sorted.iter().map(|c| c.rank().value()).collect();
        assert_eq!(ranks, vec![14, 13, 9, 5, 3]);
    }
}
