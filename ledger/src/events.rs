use serde::Serialize;

/// Capacity of the broadcast channel carrying [`PriceUpdated`] events.
/// Lagging receivers lose the oldest events; no delivery guarantee is made
/// beyond one emission per successful update.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Emitted once per successful single-network price update, for off-chain
/// observers and indexers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceUpdated {
    pub network: String,
    pub old_price: u128,
    pub new_price: u128,
    pub token_symbol: String,
    pub timestamp_ms: u64,
}
