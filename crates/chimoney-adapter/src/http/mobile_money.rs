/*
[INPUT]:  Mobile money payment requests, payment IDs and sub-account scope
[OUTPUT]: Collection results and transaction listings as response envelopes
[POS]:    HTTP layer - mobile money collection endpoints
[UPDATE]: When collection endpoints or payment fields change
*/

use crate::http::transport::{ApiRequest, Transport, send_json};
use crate::http::validation::{require_positive, require_text};
use crate::http::{Result, ValidationError};
use crate::types::{Envelope, IdRequest, MobileMoneyPaymentRequest, ScopeRequest, scope};

/// Mobile money collection endpoints
pub struct MobileMoney<'a> {
    transport: &'a dyn Transport,
}

impl<'a> MobileMoney<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Collect a payment from a mobile money wallet
    ///
    /// POST /collections/mobile-money/pay
    pub async fn make_payment(&self, request: &MobileMoneyPaymentRequest) -> Result<Envelope> {
        require_positive(request.amount, ValidationError::InvalidAmount)?;
        require_text(&request.currency, ValidationError::InvalidCurrency)?;
        require_text(&request.phone_number, ValidationError::InvalidPhoneNumber)?;

        let request = ApiRequest::post("/collections/mobile-money/pay").json(request)?;
        send_json(self.transport, request).await
    }

    /// POST /collections/mobile-money/verify
    pub async fn verify_payment(&self, id: &str, sub_account: Option<&str>) -> Result<Envelope> {
        require_text(id, ValidationError::InvalidPaymentId)?;

        let body = IdRequest {
            id: id.to_string(),
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/collections/mobile-money/verify").json(&body)?;
        send_json(self.transport, request).await
    }

    /// POST /collections/mobile-money/all
    pub async fn all_transactions(&self, sub_account: Option<&str>) -> Result<Envelope> {
        let body = ScopeRequest {
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/collections/mobile-money/all").json(&body)?;
        send_json(self.transport, request).await
    }
}
