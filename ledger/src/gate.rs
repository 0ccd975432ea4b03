use std::sync::{Arc, RwLock};

use log::{debug, info};
use tokio::sync::broadcast;

use crate::{
    admin::AdminToken,
    config::LedgerConfig,
    events::{PriceUpdated, EVENT_CHANNEL_CAPACITY},
    ledger::{Ledger, LedgerError, PriceRecord},
    traits::GasPriceReader,
};

/// Clonable handle to the one shared [`Ledger`], and the only path through
/// which its records may change.
///
/// A single `RwLock` is the serializing boundary: every mutating call runs
/// its whole effect (validation, record replacement, counter bumps) under one
/// write-lock acquisition, so mutations are totally ordered and readers only
/// ever observe committed states. There is no per-network locking.
///
/// Mutators require a `&`[`AdminToken`] parameter; readers require nothing.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
    events: broadcast::Sender<PriceUpdated>,
}

impl SharedLedger {
    /// Creates the ledger with the configured networks, every record zeroed,
    /// and mints the one admin token.
    pub fn new(config: LedgerConfig) -> (Self, AdminToken) {
        let mut ledger = Ledger::new();
        for network_config in &config.networks {
            ledger.add_network(&network_config.network, &network_config.token_symbol);
        }
        info!(
            "Gas price ledger initialized with networks: {:?}",
            ledger.list_supported_networks()
        );

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let shared = Self {
            inner: Arc::new(RwLock::new(ledger)),
            events,
        };
        (shared, AdminToken::mint())
    }

    /// Subscribes to [`PriceUpdated`] notifications. Any number of observers,
    /// no credential required.
    pub fn subscribe(&self) -> broadcast::Receiver<PriceUpdated> {
        self.events.subscribe()
    }

    /// Timestamp of the most recent successful write to any record.
    pub fn last_update_at(&self) -> u64 {
        self.read().last_update_at()
    }

    /// Count of successful single-record writes. A batch of N counts as N.
    pub fn update_count(&self) -> u64 {
        self.read().update_count()
    }

    /// Replaces the price record for `network`.
    ///
    /// The old record's token symbol is carried over unchanged; a price
    /// update can never change a network's denomination. `high_24h` and
    /// `low_24h` are stored as submitted, with no ordering validation
    /// against the price.
    pub fn update_price(
        &self,
        _admin: &AdminToken,
        now_ms: u64,
        network: &str,
        price: u128,
        high_24h: u128,
        low_24h: u128,
    ) -> Result<(), LedgerError> {
        let event = {
            let mut ledger = self.write();
            Self::apply_update(&mut ledger, now_ms, network, price, high_24h, low_24h)?
        };
        self.emit(event);
        Ok(())
    }

    /// Updates several networks at once. Entry `i` behaves like a single
    /// update of `networks[i]` to `prices[i]` with both 24h bounds collapsed
    /// to that price.
    ///
    /// All-or-nothing: every entry is validated first (the first failure, in
    /// entry order, is returned verbatim), then all replacements, counter
    /// bumps and events happen under the same lock acquisition. A failed
    /// batch mutates nothing and emits nothing.
    pub fn batch_update_prices(
        &self,
        _admin: &AdminToken,
        now_ms: u64,
        networks: &[String],
        prices: &[u128],
    ) -> Result<(), LedgerError> {
        if networks.len() != prices.len() {
            return Err(LedgerError::InvalidPrice);
        }

        let events = {
            let mut ledger = self.write();
            for (network, &price) in networks.iter().zip(prices) {
                Self::validate(&ledger, network, price)?;
            }
            networks
                .iter()
                .zip(prices)
                .map(|(network, &price)| {
                    Self::apply_update(&mut ledger, now_ms, network, price, price, price)
                        .expect("batch entry validated")
                })
                .collect::<Vec<_>>()
        };

        for event in events {
            self.emit(event);
        }
        Ok(())
    }

    /// Appends a network with a zeroed record. Idempotent: a duplicate
    /// identifier is a silent no-op that disturbs neither the supported list
    /// nor an already-updated record. Emits no event.
    pub fn add_network(&self, _admin: &AdminToken, network: &str, token_symbol: &str) {
        let inserted = self.write().add_network(network, token_symbol);
        if inserted {
            info!("Network {network} added with token symbol {token_symbol}");
        } else {
            debug!("Network {network} already supported, ignoring");
        }
    }

    fn validate(ledger: &Ledger, network: &str, price: u128) -> Result<(), LedgerError> {
        if !ledger.is_supported(network) {
            return Err(LedgerError::UnknownNetwork(network.to_string()));
        }
        if price == 0 {
            return Err(LedgerError::InvalidPrice);
        }
        Ok(())
    }

    fn apply_update(
        ledger: &mut Ledger,
        now_ms: u64,
        network: &str,
        price: u128,
        high_24h: u128,
        low_24h: u128,
    ) -> Result<PriceUpdated, LedgerError> {
        Self::validate(ledger, network, price)?;

        let old = ledger.get_record(network).expect("validated membership");
        let old_price = old.price;
        let token_symbol = old.token_symbol.clone();

        ledger.replace_record(
            network,
            PriceRecord {
                price,
                token_symbol: token_symbol.clone(),
                high_24h,
                low_24h,
                updated_at: now_ms,
            },
        )?;
        ledger.bump_counters(now_ms);

        info!("Price for {network} updated: {old_price} -> {price} {token_symbol}");

        Ok(PriceUpdated {
            network: network.to_string(),
            old_price,
            new_price: price,
            token_symbol,
            timestamp_ms: now_ms,
        })
    }

    fn emit(&self, event: PriceUpdated) {
        // fire-and-forget: no receivers is not an error
        let _ = self.events.send(event);
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Ledger> {
        self.inner.read().expect("ledger lock")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Ledger> {
        self.inner.write().expect("ledger lock")
    }
}

impl GasPriceReader for SharedLedger {
    fn get_price(&self, network: &str) -> Result<u128, LedgerError> {
        self.read().get_price(network)
    }

    fn get_token_symbol(&self, network: &str) -> Result<String, LedgerError> {
        self.read().get_token_symbol(network)
    }

    fn get_record(&self, network: &str) -> Result<PriceRecord, LedgerError> {
        self.read().get_record(network).cloned()
    }

    fn is_stale(&self, network: &str, now_ms: u64) -> Result<bool, LedgerError> {
        self.read().is_stale(network, now_ms)
    }

    fn get_buy_signal(&self, network: &str) -> Result<(bool, u128), LedgerError> {
        self.read().get_buy_signal(network)
    }

    fn list_supported_networks(&self) -> Vec<String> {
        self.read().list_supported_networks()
    }
}
