//! Showdown settlement: layered side pots from uneven contributions, best
//! hand per layer, and odd-chip distribution clockwise from the button.

use crate::evaluator::{evaluate_holdem, EvalError, Evaluation};
use crate::hand::Board;
use crate::seat::Seat;

/// Chips awarded to one seat at settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub seat: usize,
    pub amount: u64,
}

/// Distribute every committed chip among the seats.
///
/// Contributions are cut into layers at each distinct all-in level. A layer
/// is won by the best live hand among the seats that funded it; when hands
/// tie the layer is split evenly and each leftover chip goes, one at a
/// time, to the tied winners in clockwise order starting left of the
/// dealer. A layer no live seat funded (its contributors all folded) is
/// returned to them, so the sum of payouts always equals the pot.
///
/// With a single live seat everything is paid to it without any hand
/// evaluation, so an incomplete board is fine in that case.
pub(crate) fn settle_pots(
    seats: &[Seat],
    board: &Board,
    dealer: usize,
) -> Result<Vec<Payout>, EvalError> {
    let n = seats.len();
    let total: u64 = seats.iter().map(Seat::committed).sum();
    let mut won = vec![0u64; n];

    let live: Vec<usize> = (0..n).filter(|&i| seats[i].is_live()).collect();
    match live.as_slice() {
        [] => return Ok(Vec::new()),
        [sole] => {
            won[*sole] = total;
            return Ok(collect(won));
        }
        _ => {}
    }

    let mut evals: Vec<Option<Evaluation>> = vec![None; n];
    for &i in &live {
        let hole = seats[i].hole().expect("live seat holds cards at showdown");
        evals[i] = Some(evaluate_holdem(hole, board)?);
    }

    let mut thresholds: Vec<u64> =
        seats.iter().map(Seat::committed).filter(|&c| c > 0).collect();
    thresholds.sort_unstable();
    thresholds.dedup();

    let start = (dealer + 1) % n;
    let mut prev = 0u64;
    for t in thresholds {
        let contributors: Vec<usize> =
            (0..n).filter(|&i| seats[i].committed() >= t).collect();
        let layer = (t - prev) * contributors.len() as u64;

        let eligible: Vec<usize> =
            contributors.iter().copied().filter(|&i| seats[i].is_live()).collect();
        if eligible.is_empty() {
            // Only folded seats funded this layer; hand their shares back.
            for i in contributors {
                won[i] += t - prev;
            }
            prev = t;
            continue;
        }

        let best = eligible.iter().map(|&i| evals[i].unwrap().rank()).max().unwrap();
        let mut winners: Vec<usize> =
            eligible.into_iter().filter(|&i| evals[i].unwrap().rank() == best).collect();
        winners.sort_by_key(|&i| (i + n - start) % n);

        let share = layer / winners.len() as u64;
        let odd = layer % winners.len() as u64;
        for (k, &w) in winners.iter().enumerate() {
            won[w] += share + u64::from((k as u64) < odd);
        }
        prev = t;
    }

    debug_assert_eq!(won.iter().sum::<u64>(), total);
    Ok(collect(won))
}

fn collect(won: Vec<u64>) -> Vec<Payout> {
    won.into_iter()
        .enumerate()
        .filter(|&(_, amount)| amount > 0)
        .map(|(seat, amount)| Payout { seat, amount })
        .collect()
}
