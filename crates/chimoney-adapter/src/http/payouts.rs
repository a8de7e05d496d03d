/*
[INPUT]:  Payout batches (airtime, bank, chimoney, gift card) and chiRefs
[OUTPUT]: Payout results and status lookups as response envelopes
[POS]:    HTTP layer - payout endpoints
[UPDATE]: When payout channels or batch payloads change
*/

use crate::http::transport::{ApiRequest, Transport, send_json};
use crate::http::validation::{require_items, require_text};
use crate::http::{Result, ValidationError};
use crate::types::{
    AirtimePayout, AirtimePayoutRequest, BankPayout, BankPayoutRequest, ChiRefRequest,
    ChimoneyPayout, ChimoneyPayoutRequest, CryptoPayment, Envelope, GiftCardPayout,
    GiftCardPayoutRequest, InitiateChimoneyRequest, scope,
};

/// Payout endpoints
pub struct Payouts<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Payouts<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// POST /payouts/airtime
    pub async fn airtime(
        &self,
        airtime: Vec<AirtimePayout>,
        sub_account: Option<&str>,
    ) -> Result<Envelope> {
        require_items(&airtime, ValidationError::EmptyPayouts { kind: "airtime" })?;

        let body = AirtimePayoutRequest {
            airtime,
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/payouts/airtime").json(&body)?;
        send_json(self.transport, request).await
    }

    /// POST /payouts/bank
    pub async fn bank(&self, banks: Vec<BankPayout>, sub_account: Option<&str>) -> Result<Envelope> {
        require_items(&banks, ValidationError::EmptyPayouts { kind: "bank" })?;

        let body = BankPayoutRequest {
            banks,
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/payouts/bank").json(&body)?;
        send_json(self.transport, request).await
    }

    /// POST /payouts/chimoney
    pub async fn chimoney(
        &self,
        chimoneys: Vec<ChimoneyPayout>,
        sub_account: Option<&str>,
    ) -> Result<Envelope> {
        require_items(&chimoneys, ValidationError::EmptyPayouts { kind: "chimoney" })?;

        let body = ChimoneyPayoutRequest {
            chimoneys,
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/payouts/chimoney").json(&body)?;
        send_json(self.transport, request).await
    }

    /// POST /payouts/gift-card
    pub async fn gift_card(
        &self,
        gift_cards: Vec<GiftCardPayout>,
        sub_account: Option<&str>,
    ) -> Result<Envelope> {
        require_items(&gift_cards, ValidationError::EmptyPayouts { kind: "gift card" })?;

        let body = GiftCardPayoutRequest {
            gift_cards,
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/payouts/gift-card").json(&body)?;
        send_json(self.transport, request).await
    }

    /// Status of a previously issued payout
    ///
    /// POST /payouts/status
    pub async fn status(&self, chi_ref: &str, sub_account: Option<&str>) -> Result<Envelope> {
        require_text(chi_ref, ValidationError::InvalidChiRef)?;

        let body = ChiRefRequest {
            chi_ref: chi_ref.to_string(),
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/payouts/status").json(&body)?;
        send_json(self.transport, request).await
    }

    /// Initiate a Chimoney payout, optionally settled through crypto rails.
    /// Entries without a destination are dropped, and `crypto_payments` is
    /// only sent when something remains.
    ///
    /// POST /payouts/initiate
    pub async fn initiate_chimoney(
        &self,
        chimoneys: Vec<ChimoneyPayout>,
        turn_off_notification: bool,
        mut crypto_payments: Vec<CryptoPayment>,
        sub_account: Option<&str>,
    ) -> Result<Envelope> {
        require_items(&chimoneys, ValidationError::EmptyPayouts { kind: "chimoney" })?;

        crypto_payments.retain(|payment| !payment.is_empty());
        let body = InitiateChimoneyRequest {
            chimoneys,
            turn_off_notification,
            crypto_payments: (!crypto_payments.is_empty()).then_some(crypto_payments),
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/payouts/initiate").json(&body)?;
        send_json(self.transport, request).await
    }
}
