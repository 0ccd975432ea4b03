//! Authoritative shared store for per-network gas price quotes.
//!
//! A single authorized writer (the off-chain updater, holding the one
//! [`AdminToken`]) pushes price observations; any reader queries the current
//! price, the 24h bounds, staleness, and a derived buy signal, with no
//! credential. Prices are denominated in the smallest unit of each network's
//! native gas token.
//!
//! The [`SharedLedger`] handle is both the read surface and the update gate;
//! it serializes all access to the one underlying [`Ledger`] instance.

mod admin;
mod config;
mod events;
mod gate;
mod ledger;
mod traits;

pub use admin::AdminToken;
pub use config::{ConfigError, LedgerConfig, NetworkConfig};
pub use events::{PriceUpdated, EVENT_CHANNEL_CAPACITY};
pub use gate::SharedLedger;
pub use ledger::{
    Ledger, LedgerError, PriceRecord, BUY_SIGNAL_MIN_SAVINGS_PERCENT, STALENESS_THRESHOLD_MS,
};
pub use traits::GasPriceReader;
