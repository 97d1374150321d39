//! A named registry of tables, keyed by generated ids.

use crate::game::{ConfigError, SeatConfig, Table};
use std::collections::HashMap;
use uuid::Uuid;

/// Summary row for a table listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub id: Uuid,
    pub seats: usize,
    pub funded: usize,
    pub small_blind: u64,
    pub big_blind: u64,
}

/// Holds any number of independent tables. Tables are created and removed
/// explicitly; the room never starts or ends hands on its own.
#[derive(Debug, Default)]
pub struct Room {
    name: String,
    tables: HashMap<Uuid, Table>,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), tables: HashMap::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a table and return its id.
    pub fn create_table(
        &mut self,
        players: Vec<SeatConfig>,
        small_blind: u64,
        big_blind: u64,
    ) -> Result<Uuid, ConfigError> {
        let table = Table::new(players, small_blind, big_blind)?;
        let id = Uuid::new_v4();
        self.tables.insert(id, table);
        Ok(id)
    }

    pub fn table(&self, id: Uuid) -> Option<&Table> {
        self.tables.get(&id)
    }

    pub fn table_mut(&mut self, id: Uuid) -> Option<&mut Table> {
        self.tables.get_mut(&id)
    }

    pub fn remove_table(&mut self, id: Uuid) -> Option<Table> {
        self.tables.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn list(&self) -> Vec<TableInfo> {
        let mut out: Vec<TableInfo> = self
            .tables
            .iter()
            .map(|(&id, t)| TableInfo {
                id,
                seats: t.players().len(),
                funded: t.funded_players(),
                small_blind: t.small_blind(),
                big_blind: t.big_blind(),
            })
            .collect();
        out.sort_by_key(|info| info.id);
        out
    }
}
