/*
[INPUT]:  Country codes, currencies and amounts
[OUTPUT]: Supported assets, banks, country lists and currency conversions
[POS]:    HTTP layer - informational endpoints
[UPDATE]: When adding lookup endpoints or changing conversion payloads
*/

use rust_decimal::Decimal;

use crate::http::transport::{ApiRequest, Transport, send_json};
use crate::http::validation::{require_positive, require_text};
use crate::http::{Result, ValidationError};
use crate::types::{Envelope, LocalAmountInUsdRequest, UsdInLocalAmountRequest};

/// Country used by [`Info::banks`] when none is given
pub const DEFAULT_BANK_COUNTRY: &str = "NG";

/// Informational lookup endpoints
pub struct Info<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Info<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// GET /info/assets
    pub async fn supported_assets(&self) -> Result<Envelope> {
        send_json(self.transport, ApiRequest::get("/info/assets")).await
    }

    /// GET /info/airtime-countries
    pub async fn airtime_countries(&self) -> Result<Envelope> {
        send_json(self.transport, ApiRequest::get("/info/airtime-countries")).await
    }

    /// Banks operating in a country; an empty code falls back to Nigeria.
    ///
    /// GET /info/country-banks?countryCode={country_code}
    pub async fn banks(&self, country_code: &str) -> Result<Envelope> {
        let country_code = if country_code.is_empty() {
            DEFAULT_BANK_COUNTRY
        } else {
            country_code
        };

        let request = ApiRequest::get("/info/country-banks").query("countryCode", country_code);
        send_json(self.transport, request).await
    }

    /// Convert a local currency amount to USD
    ///
    /// POST /info/local-amount-in-usd
    pub async fn local_amount_in_usd(&self, currency: &str, amount: Decimal) -> Result<Envelope> {
        require_text(currency, ValidationError::InvalidCurrency)?;
        require_positive(amount, ValidationError::InvalidAmount)?;

        let body = LocalAmountInUsdRequest {
            origin_currency: currency.to_string(),
            amount,
        };
        let request = ApiRequest::post("/info/local-amount-in-usd").json(&body)?;
        send_json(self.transport, request).await
    }

    /// GET /info/mobile-money-codes
    pub async fn mobile_money_codes(&self) -> Result<Envelope> {
        send_json(self.transport, ApiRequest::get("/info/mobile-money-codes")).await
    }

    /// Convert a USD amount to a local currency
    ///
    /// POST /info/usd-in-local-amount
    pub async fn usd_in_local_amount(
        &self,
        currency: &str,
        amount_in_usd: Decimal,
    ) -> Result<Envelope> {
        require_text(currency, ValidationError::InvalidCurrency)?;
        require_positive(amount_in_usd, ValidationError::InvalidAmount)?;

        let body = UsdInLocalAmountRequest {
            destination_currency: currency.to_string(),
            amount_in_usd,
        };
        let request = ApiRequest::post("/info/usd-in-local-amount").json(&body)?;
        send_json(self.transport, request).await
    }
}
