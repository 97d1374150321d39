//! Demo: four random agents play a few hands at one table, with every
//! event printed as it happens.
//!
//! ```sh
//! cargo run --bin holdem [hands] [seed]
//! ```

use holdem_engine::agents::{PlayerAgent, RandomAgent};
use holdem_engine::game::{GameError, HandEvent, HandSummary, SeatConfig, Table};
use holdem_engine::room::Room;

fn main() -> Result<(), GameError> {
    let mut args = std::env::args().skip(1);
    let hands: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(5);
    let seed: Option<u64> = args.next().and_then(|a| a.parse().ok());

    let players = vec![
        SeatConfig::new("alice", 500),
        SeatConfig::new("bob", 500),
        SeatConfig::new("carol", 500),
        SeatConfig::new("dave", 500),
    ];
    let mut room = Room::new("demo");
    let id = room.create_table(players, 5, 10)?;
    println!("room {:?}: table {id}", room.name());

    let mut agents: Vec<Box<dyn PlayerAgent>> = (0..4)
        .map(|i| Box::new(RandomAgent::new(seed.unwrap_or(0x5EED) + i)) as Box<dyn PlayerAgent>)
        .collect();

    for hand_no in 1..=hands {
        let table = room.table_mut(id).expect("table was just created");
        if table.funded_players() < 2 {
            println!("game over: only one player has chips left");
            break;
        }
        let summary = match seed {
            Some(s) => table.play_hand_seeded(&mut agents, s + u64::from(hand_no))?,
            None => table.play_hand(&mut agents)?,
        };
        print_hand(hand_no, table, &summary);
    }

    let table = room.table(id).expect("table was just created");
    println!("\nfinal stacks:");
    for p in table.players() {
        println!("  {:>8}  {}", p.stack, p.name);
    }
    Ok(())
}

fn print_hand(hand_no: u32, table: &Table, summary: &HandSummary) {
    let name = |seat: usize| table.players()[seat].name.as_str();
    println!("\n=== hand {hand_no} (button: {}) ===", name(summary.dealer));
    for event in &summary.events {
        match event {
            HandEvent::SmallBlind { seat, amount } => {
                println!("{} posts small blind {amount}", name(*seat));
            }
            HandEvent::BigBlind { seat, amount } => {
                println!("{} posts big blind {amount}", name(*seat));
            }
            HandEvent::Action { seat, applied } => println!("{} {applied}", name(*seat)),
            HandEvent::Board { stage, cards } => {
                let cards: Vec<String> = cards.iter().map(ToString::to_string).collect();
                println!("-- {stage}: {}", cards.join(" "));
            }
            HandEvent::Payout { seat, amount } => {
                println!("{} wins {amount}", name(*seat));
            }
        }
    }
}
