//! # Stock Store
//!
//! In-memory map of item name to quantity and expiration date.
//!
//! - Keys are case-sensitive and unique, adding an existing name overwrites it in place
//! - Iteration follows first insertion order
//! - No deletion path, expired items remain listed until restart
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockEntry {
    pub quantity: i64,
    pub expiration_date: NaiveDate,
}

#[derive(Default, Debug)]
pub struct StockStore {
    items: IndexMap<String, StockEntry>,
}

impl StockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entry` under `name`, returning the entry it replaced.
    pub fn add_item(&mut self, name: String, entry: StockEntry) -> Option<StockEntry> {
        self.items.insert(name, entry)
    }

    pub fn get(&self, name: &str) -> Option<&StockEntry> {
        self.items.get(name)
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, &StockEntry)> {
        self.items.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Names of every item whose expiration date is strictly before `today`.
    pub fn expired_items(&self, today: NaiveDate) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, entry)| entry.expiration_date < today)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
