/*
[INPUT]:  Wallet IDs, receivers and sub-account scope
[OUTPUT]: Wallet listings, lookups, transfers and balances as response envelopes
[POS]:    HTTP layer - wallet endpoints
[UPDATE]: When wallet endpoints change
*/

use crate::http::transport::{ApiRequest, Transport, send_json};
use crate::http::validation::require_text;
use crate::http::{Result, ValidationError};
use crate::types::{Envelope, IdRequest, ScopeRequest, WalletTransferRequest, scope};

/// Wallet endpoints
pub struct Wallet<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Wallet<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// POST /wallets/list
    pub async fn list(&self, sub_account: Option<&str>) -> Result<Envelope> {
        let body = ScopeRequest {
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/wallets/list").json(&body)?;
        send_json(self.transport, request).await
    }

    /// POST /wallets/lookup
    pub async fn details(&self, id: &str, sub_account: Option<&str>) -> Result<Envelope> {
        require_text(id, ValidationError::InvalidWalletId)?;

        let body = IdRequest {
            id: id.to_string(),
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/wallets/lookup").json(&body)?;
        send_json(self.transport, request).await
    }

    /// Move funds to another wallet
    ///
    /// POST /wallets/transfer
    pub async fn transfer(&self, receiver: &str, wallet_type: &str) -> Result<Envelope> {
        require_text(receiver, ValidationError::InvalidReceiver)?;

        let body = WalletTransferRequest {
            receiver: receiver.to_string(),
            wallet: wallet_type.to_string(),
        };
        let request = ApiRequest::post("/wallets/transfer").json(&body)?;
        send_json(self.transport, request).await
    }

    /// POST /wallet/balance
    pub async fn balance(&self, sub_account: Option<&str>) -> Result<Envelope> {
        let body = ScopeRequest {
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/wallet/balance").json(&body)?;
        send_json(self.transport, request).await
    }
}
