/// Capability authorizing mutating calls on the ledger.
///
/// Exactly one token is minted, by [`crate::SharedLedger::new`], and handed
/// to the initializing caller. The type is opaque and deliberately neither
/// `Clone` nor `Copy`: presenting a `&AdminToken` *is* the authorization, so
/// there is no runtime ownership check and no `Unauthorized` error path.
/// Transfer is a Rust move; anything beyond that (duplication, revocation)
/// is the host application's concern.
#[derive(Debug)]
pub struct AdminToken {
    _private: (),
}

impl AdminToken {
    pub(crate) fn mint() -> Self {
        Self { _private: () }
    }
}
