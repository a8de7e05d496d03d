/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Payout and redeem item records embedded in request bodies
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One airtime top-up inside a payout batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirtimePayout {
    pub country_to_send: String,
    pub phone_number: String,
    #[serde(rename = "valueInUSD", with = "crate::types::amount")]
    pub value_in_usd: Decimal,
}

/// One bank transfer inside a payout batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankPayout {
    #[serde(rename = "countryToSend")]
    pub country_to_send: String,
    pub account_bank: String,
    pub account_number: String,
    #[serde(rename = "valueInUSD", with = "crate::types::amount")]
    pub value_in_usd: Decimal,
    pub reference: String,
}

/// One Chimoney payout, addressed by email or twitter handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChimoneyPayout {
    #[serde(rename = "valueInUSD", with = "crate::types::amount")]
    pub value_in_usd: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl ChimoneyPayout {
    pub fn to_email(value_in_usd: Decimal, email: impl Into<String>) -> Self {
        Self {
            value_in_usd,
            email: Some(email.into()),
            twitter: None,
        }
    }

    pub fn to_twitter(value_in_usd: Decimal, handle: impl Into<String>) -> Self {
        Self {
            value_in_usd,
            email: None,
            twitter: Some(handle.into()),
        }
    }
}

/// One gift card inside a payout batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardPayout {
    pub email: String,
    #[serde(rename = "valueInUSD", with = "crate::types::amount")]
    pub value_in_usd: Decimal,
    pub redeem_data: GiftCardSelection,
}

/// Gift card product to deliver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardSelection {
    pub product_id: String,
    pub country_code: String,
    #[serde(with = "crate::types::amount")]
    pub value_in_local_currency: Decimal,
}

/// Crypto settlement details attached to an initiated payout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xrpl: Option<XrplDestination>,
}

impl CryptoPayment {
    /// No settlement rail selected
    pub fn is_empty(&self) -> bool {
        self.xrpl.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrplDestination {
    pub address: String,
    pub issuer: String,
    pub currency: String,
}

/// Product selection used by `/redeem/any`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemDataItem {
    pub country_code: String,
    pub product_id: String,
    #[serde(with = "crate::types::amount")]
    pub value_in_local_currency: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chimoney_payout_omits_missing_handles() {
        let payout = ChimoneyPayout::to_email(Decimal::from(10), "a@b.com");
        let json = serde_json::to_value(&payout).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "valueInUSD": 10, "email": "a@b.com" })
        );
    }

    #[test]
    fn test_bank_payout_field_names() {
        let payout = BankPayout {
            country_to_send: "Nigeria".to_string(),
            account_bank: "044".to_string(),
            account_number: "0690000031".to_string(),
            value_in_usd: Decimal::new(125, 1),
            reference: "ref-1".to_string(),
        };
        let json = serde_json::to_value(&payout).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "countryToSend": "Nigeria",
                "account_bank": "044",
                "account_number": "0690000031",
                "valueInUSD": 12.5,
                "reference": "ref-1",
            })
        );
    }

    #[test]
    fn test_gift_card_payout_nests_redeem_data() {
        let payout = GiftCardPayout {
            email: "gift@example.com".to_string(),
            value_in_usd: Decimal::from(25),
            redeem_data: GiftCardSelection {
                product_id: "5".to_string(),
                country_code: "US".to_string(),
                value_in_local_currency: Decimal::from(25),
            },
        };
        let json = serde_json::to_value(&payout).unwrap();
        assert_eq!(json["redeemData"]["productId"], "5");
        assert_eq!(json["redeemData"]["valueInLocalCurrency"], 25);
    }
}
