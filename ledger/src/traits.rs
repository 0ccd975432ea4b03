use crate::ledger::{LedgerError, PriceRecord};

/// Read surface of the price store, requiring no credential.
///
/// Downstream consumers (relayers, dashboards) should accept an
/// `&impl GasPriceReader` rather than the concrete store, so they can be
/// tested against a stub.
pub trait GasPriceReader {
    /// Current price in the smallest unit of the network's gas token.
    /// 0 means the record was never updated.
    fn get_price(&self, network: &str) -> Result<u128, LedgerError>;

    /// Symbol of the token the price is denominated in.
    fn get_token_symbol(&self, network: &str) -> Result<String, LedgerError>;

    /// Full copy of the stored record.
    fn get_record(&self, network: &str) -> Result<PriceRecord, LedgerError>;

    /// Whether the record has gone without an update for longer than
    /// [`crate::STALENESS_THRESHOLD_MS`], relative to the caller-supplied
    /// wall clock.
    fn is_stale(&self, network: &str, now_ms: u64) -> Result<bool, LedgerError>;

    /// Returns `(is_good_time, savings_percent)` relative to the average of
    /// the stored 24h bounds.
    fn get_buy_signal(&self, network: &str) -> Result<(bool, u128), LedgerError>;

    /// Ordered list of supported network identifiers.
    fn list_supported_networks(&self) -> Vec<String>;
}
