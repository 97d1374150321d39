//! Chips are neither created nor destroyed: whole tables of random agents
//! play hand after hand and the total never moves.

use holdem_engine::agents::{CallingAgent, PlayerAgent, RandomAgent};
use holdem_engine::game::{SeatConfig, Table};

fn random_table(stacks: &[u64], seed: u64) -> (Table, Vec<Box<dyn PlayerAgent>>) {
    let players: Vec<SeatConfig> =
        stacks.iter().enumerate().map(|(i, &s)| SeatConfig::new(format!("p{i}"), s)).collect();
    let table = Table::new(players, 5, 10).unwrap();
    let agents = (0..stacks.len() as u64)
        .map(|i| Box::new(RandomAgent::new(seed * 31 + i)) as Box<dyn PlayerAgent>)
        .collect();
    (table, agents)
}

#[test]
fn four_handed_random_play_conserves_chips() {
    let (mut table, mut agents) = random_table(&[300, 300, 300, 300], 17);
    for hand_no in 0..200 {
        if table.funded_players() < 2 {
            break;
        }
        let summary = table.play_hand_seeded(&mut agents, 1000 + hand_no).unwrap();
        let total: u64 = table.players().iter().map(|p| p.stack).sum();
        assert_eq!(total, 1200, "hand {hand_no} leaked chips");
        let paid: u64 = summary.payouts.iter().map(|p| p.amount).sum();
        assert!(paid >= 15, "hand {hand_no} paid less than the blinds");
    }
}

#[test]
fn heads_up_random_play_conserves_chips() {
    let (mut table, mut agents) = random_table(&[150, 150], 23);
    for hand_no in 0..100 {
        if table.funded_players() < 2 {
            break;
        }
        table.play_hand_seeded(&mut agents, 5000 + hand_no).unwrap();
        let total: u64 = table.players().iter().map(|p| p.stack).sum();
        assert_eq!(total, 300, "hand {hand_no} leaked chips");
    }
}

#[test]
fn uneven_stacks_with_calling_stations_conserve_chips() {
    let players = vec![
        SeatConfig::new("tiny", 12),
        SeatConfig::new("short", 40),
        SeatConfig::new("mid", 200),
        SeatConfig::new("deep", 1000),
    ];
    let mut table = Table::new(players, 5, 10).unwrap();
    let mut agents: Vec<Box<dyn PlayerAgent>> =
        (0..4).map(|_| Box::new(CallingAgent) as Box<dyn PlayerAgent>).collect();
    for hand_no in 0..50 {
        if table.funded_players() < 2 {
            break;
        }
        table.play_hand_seeded(&mut agents, 7000 + hand_no).unwrap();
        let total: u64 = table.players().iter().map(|p| p.stack).sum();
        assert_eq!(total, 1252, "hand {hand_no} leaked chips");
    }
}
