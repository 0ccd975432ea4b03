use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A record is stale if no update landed within this window, in milliseconds.
pub const STALENESS_THRESHOLD_MS: u64 = 300_000;

/// Minimum savings (in percent, exclusive) below the 24h average for the buy
/// signal to fire.
pub const BUY_SIGNAL_MIN_SAVINGS_PERCENT: u128 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("invalid price")]
    InvalidPrice,
}

/// Gas price quote for one network, denominated in the smallest unit of the
/// network's native gas token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// current price in the smallest unit (0 means never updated)
    pub price: u128,
    /// unit the price is denominated in
    pub token_symbol: String,
    /// rolling 24h high, as submitted by the updater
    pub high_24h: u128,
    /// rolling 24h low, as submitted by the updater
    pub low_24h: u128,
    /// timestamp of the last update in ms since UNIX epoch
    pub updated_at: u64,
}

impl PriceRecord {
    fn zeroed(token_symbol: String) -> Self {
        Self {
            price: 0,
            token_symbol,
            high_24h: 0,
            low_24h: 0,
            updated_at: 0,
        }
    }

    /// A record is live once its first successful update lands; it never
    /// returns to the uninitialized state.
    pub fn is_live(&self) -> bool {
        self.price > 0
    }

    /// Whether the record has gone without an update for longer than
    /// [`STALENESS_THRESHOLD_MS`]. Saturating: a caller clock behind the
    /// last update reads as fresh.
    pub fn is_stale(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.updated_at) > STALENESS_THRESHOLD_MS
    }

    /// Returns `(is_good_time, savings_percent)` relative to the simple
    /// average of the stored 24h bounds. `(false, 0)` when the average is
    /// zero or the price sits at or above it. The stored bounds are taken
    /// as-is, even when inconsistent with the price.
    pub fn buy_signal(&self) -> (bool, u128) {
        // floor((high + low) / 2) without overflowing the sum
        let avg = (self.high_24h & self.low_24h) + ((self.high_24h ^ self.low_24h) >> 1);
        if avg == 0 || self.price >= avg {
            return (false, 0);
        }
        let savings_percent = (avg - self.price).saturating_mul(100) / avg;
        (savings_percent > BUY_SIGNAL_MIN_SAVINGS_PERCENT, savings_percent)
    }
}

/// The root aggregate: one record per supported network plus the global
/// update counters. Pure and single-threaded; serialization of access is the
/// concern of [`crate::SharedLedger`].
#[derive(Debug, Default)]
pub struct Ledger {
    records: HashMap<String, PriceRecord>,
    /// append-only, insertion-ordered; always equals `records.keys()` as a set
    supported_networks: Vec<String>,
    last_update_at: u64,
    update_count: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_record(&self, network: &str) -> Result<&PriceRecord, LedgerError> {
        self.records
            .get(network)
            .ok_or_else(|| LedgerError::UnknownNetwork(network.to_string()))
    }

    pub fn get_price(&self, network: &str) -> Result<u128, LedgerError> {
        Ok(self.get_record(network)?.price)
    }

    pub fn get_token_symbol(&self, network: &str) -> Result<String, LedgerError> {
        Ok(self.get_record(network)?.token_symbol.clone())
    }

    pub fn is_stale(&self, network: &str, now_ms: u64) -> Result<bool, LedgerError> {
        Ok(self.get_record(network)?.is_stale(now_ms))
    }

    pub fn get_buy_signal(&self, network: &str) -> Result<(bool, u128), LedgerError> {
        Ok(self.get_record(network)?.buy_signal())
    }

    pub fn list_supported_networks(&self) -> Vec<String> {
        self.supported_networks.clone()
    }

    pub fn is_supported(&self, network: &str) -> bool {
        self.records.contains_key(network)
    }

    /// Timestamp of the most recent successful write to any record.
    pub fn last_update_at(&self) -> u64 {
        self.last_update_at
    }

    /// Count of successful single-record writes (a batch of N counts as N).
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Overwrites the stored record for `network`. Records are only ever
    /// replaced, never removed.
    pub(crate) fn replace_record(
        &mut self,
        network: &str,
        record: PriceRecord,
    ) -> Result<(), LedgerError> {
        match self.records.get_mut(network) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(LedgerError::UnknownNetwork(network.to_string())),
        }
    }

    pub(crate) fn bump_counters(&mut self, now_ms: u64) {
        self.last_update_at = now_ms;
        self.update_count += 1;
    }

    /// Appends a network with a zeroed record. Idempotent: returns false and
    /// leaves the existing entry untouched when the network is already
    /// present.
    pub(crate) fn add_network(&mut self, network: &str, token_symbol: &str) -> bool {
        if self.records.contains_key(network) {
            return false;
        }
        self.supported_networks.push(network.to_string());
        self.records.insert(
            network.to_string(),
            PriceRecord::zeroed(token_symbol.to_string()),
        );
        true
    }
}
