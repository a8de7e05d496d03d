/*
[INPUT]:  Redeem requests keyed by chiRef, redeem options and sub-account scope
[OUTPUT]: Redemption results and Chimoney lookups as response envelopes
[POS]:    HTTP layer - redeem endpoints
[UPDATE]: When redeem channels or their payloads change
*/

use crate::http::transport::{ApiRequest, Transport, send_json};
use crate::http::validation::{require_items, require_text};
use crate::http::{Result, ValidationError};
use crate::types::{
    AirtimeRedeemRequest, AnyRedeemRequest, ChiRefRequest, ChimoneyRedeemRequest, Envelope,
    GiftCardRedeemRequest, JsonObject, MobileMoneyRedeemRequest, scope,
};

/// Redeem endpoints
pub struct Redeem<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Redeem<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// POST /redeem/airtime
    pub async fn airtime(&self, request: &AirtimeRedeemRequest) -> Result<Envelope> {
        require_text(&request.chi_ref, ValidationError::InvalidChiRef)?;
        require_text(&request.phone_number, ValidationError::InvalidPhoneNumber)?;
        require_text(&request.country_to_send, ValidationError::InvalidCountry)?;

        let request = ApiRequest::post("/redeem/airtime").json(request)?;
        send_json(self.transport, request).await
    }

    /// POST /redeem/any
    pub async fn any(&self, request: &AnyRedeemRequest) -> Result<Envelope> {
        require_text(&request.chi_ref, ValidationError::InvalidChiRef)?;
        require_items(&request.redeem_data, ValidationError::InvalidRedeemData)?;

        let request = ApiRequest::post("/redeem/any").json(request)?;
        send_json(self.transport, request).await
    }

    /// POST /redeem/chimoney
    pub async fn chimoney(
        &self,
        chimoneys: Vec<JsonObject>,
        sub_account: Option<&str>,
    ) -> Result<Envelope> {
        require_items(&chimoneys, ValidationError::InvalidRedeemData)?;

        let body = ChimoneyRedeemRequest {
            chimoneys,
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/redeem/chimoney").json(&body)?;
        send_json(self.transport, request).await
    }

    /// Details of a Chimoney transaction before redemption
    ///
    /// POST /redeem/chimoney/get
    pub async fn get_chimoney(&self, chi_ref: &str, sub_account: Option<&str>) -> Result<Envelope> {
        require_text(chi_ref, ValidationError::InvalidChiRef)?;

        let body = ChiRefRequest {
            chi_ref: chi_ref.to_string(),
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/redeem/chimoney/get").json(&body)?;
        send_json(self.transport, request).await
    }

    /// POST /redeem/gift-card
    pub async fn gift_card(&self, request: &GiftCardRedeemRequest) -> Result<Envelope> {
        require_text(&request.chi_ref, ValidationError::InvalidChiRef)?;
        if request.redeem_options.is_empty() {
            return Err(ValidationError::InvalidRedeemData.into());
        }

        let request = ApiRequest::post("/redeem/gift-card").json(request)?;
        send_json(self.transport, request).await
    }

    /// POST /redeem/mobile-money
    pub async fn mobile_money(&self, request: &MobileMoneyRedeemRequest) -> Result<Envelope> {
        require_text(&request.chi_ref, ValidationError::InvalidChiRef)?;
        if request.redeem_options.is_empty() {
            return Err(ValidationError::InvalidRedeemData.into());
        }

        let request = ApiRequest::post("/redeem/mobile-money").json(request)?;
        send_json(self.transport, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ChimoneyError;
    use crate::http::test_support::{UnreachableTransport, client_for, success};
    use crate::types::RedeemDataItem;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer};

    fn object(value: serde_json::Value) -> JsonObject {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn airtime_request() -> AirtimeRedeemRequest {
        AirtimeRedeemRequest {
            chi_ref: "chi_1".to_string(),
            phone_number: "+2348123456789".to_string(),
            country_to_send: "Nigeria".to_string(),
            meta: None,
            sub_account: None,
        }
    }

    #[tokio::test]
    async fn test_airtime_with_meta() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/redeem/airtime"))
            .and(body_json(json!({
                "chiRef": "chi_1",
                "phoneNumber": "+2348123456789",
                "countryToSend": "Nigeria",
                "meta": { "source": "sdk" },
            })))
            .respond_with(success(json!({ "status": "redeemed" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut request = airtime_request();
        request.meta = Some(object(json!({ "source": "sdk" })));
        let envelope = client.redeem().airtime(&request).await.unwrap();
        assert!(envelope.is_success());
    }

    #[tokio::test]
    async fn test_any_and_chimoney() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/redeem/any"))
            .and(body_json(json!({
                "chiRef": "chi_2",
                "redeemData": [{
                    "countryCode": "NG",
                    "productId": "14",
                    "valueInLocalCurrency": 500,
                }],
                "subAccount": "sub_1",
            })))
            .respond_with(success(json!({ "chiRef": "chi_2" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/redeem/chimoney"))
            .and(body_json(json!({
                "chimoneys": [{ "chiRef": "chi_3", "email": "a@b.com" }],
            })))
            .respond_with(success(json!([{ "chiRef": "chi_3" }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let redeem = client.redeem();
        redeem
            .any(&AnyRedeemRequest {
                chi_ref: "chi_2".to_string(),
                redeem_data: vec![RedeemDataItem {
                    country_code: "NG".to_string(),
                    product_id: "14".to_string(),
                    value_in_local_currency: Decimal::from(500),
                }],
                meta: None,
                sub_account: Some("sub_1".to_string()),
            })
            .await
            .unwrap();
        redeem
            .chimoney(vec![object(json!({ "chiRef": "chi_3", "email": "a@b.com" }))], Some(""))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_chimoney_gift_card_and_mobile_money() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/redeem/chimoney/get"))
            .and(body_json(json!({ "chiRef": "chi_4" })))
            .respond_with(success(json!({ "valueInUSD": 3 })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/redeem/gift-card"))
            .and(body_json(json!({
                "chiRef": "chi_4",
                "redeemOptions": { "productId": 5, "countryCode": "US" },
            })))
            .respond_with(success(json!({ "code": "GIFT-1" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/redeem/mobile-money"))
            .and(body_json(json!({
                "chiRef": "chi_4",
                "redeemOptions": { "phoneNumber": "+254710102720", "momoCode": "MPS" },
                "subAccount": "sub_9",
            })))
            .respond_with(success(json!({ "status": "sent" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let redeem = client.redeem();
        let details = redeem.get_chimoney("chi_4", None).await.unwrap();
        assert_eq!(details.data_as::<serde_json::Value>().unwrap()["valueInUSD"], 3);

        redeem
            .gift_card(&GiftCardRedeemRequest {
                chi_ref: "chi_4".to_string(),
                redeem_options: object(json!({ "productId": 5, "countryCode": "US" })),
                sub_account: None,
            })
            .await
            .unwrap();
        redeem
            .mobile_money(&MobileMoneyRedeemRequest {
                chi_ref: "chi_4".to_string(),
                redeem_options: object(json!({ "phoneNumber": "+254710102720", "momoCode": "MPS" })),
                sub_account: Some("sub_9".to_string()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_validation_skips_transport() {
        let redeem = Redeem::new(&UnreachableTransport);

        let mut request = airtime_request();
        request.chi_ref.clear();
        let err = redeem.airtime(&request).await.unwrap_err();
        assert!(matches!(err, ChimoneyError::Validation(ValidationError::InvalidChiRef)));

        let mut request = airtime_request();
        request.phone_number.clear();
        let err = redeem.airtime(&request).await.unwrap_err();
        assert!(matches!(
            err,
            ChimoneyError::Validation(ValidationError::InvalidPhoneNumber)
        ));

        let mut request = airtime_request();
        request.country_to_send.clear();
        let err = redeem.airtime(&request).await.unwrap_err();
        assert!(matches!(err, ChimoneyError::Validation(ValidationError::InvalidCountry)));

        let err = redeem
            .any(&AnyRedeemRequest {
                chi_ref: "chi_1".to_string(),
                redeem_data: Vec::new(),
                meta: None,
                sub_account: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ChimoneyError::Validation(ValidationError::InvalidRedeemData)));

        let err = redeem.chimoney(Vec::new(), None).await.unwrap_err();
        assert!(matches!(err, ChimoneyError::Validation(ValidationError::InvalidRedeemData)));

        let err = redeem.get_chimoney("", None).await.unwrap_err();
        assert!(matches!(err, ChimoneyError::Validation(ValidationError::InvalidChiRef)));

        let err = redeem
            .gift_card(&GiftCardRedeemRequest {
                chi_ref: "chi_1".to_string(),
                redeem_options: JsonObject::new(),
                sub_account: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ChimoneyError::Validation(ValidationError::InvalidRedeemData)));

        let err = redeem
            .mobile_money(&MobileMoneyRedeemRequest {
                chi_ref: String::new(),
                redeem_options: object(json!({ "momoCode": "MPS" })),
                sub_account: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ChimoneyError::Validation(ValidationError::InvalidChiRef)));
    }
}
