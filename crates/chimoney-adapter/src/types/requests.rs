/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::models::{
    AirtimePayout, BankPayout, ChimoneyPayout, CryptoPayment, GiftCardPayout, RedeemDataItem,
};

/// Free-form JSON object used for `meta` and `redeemOptions`
pub type JsonObject = Map<String, Value>;

/// `subAccount` is omitted unless it carries a non-empty value
fn is_unscoped(sub_account: &Option<String>) -> bool {
    sub_account.as_deref().is_none_or(str::is_empty)
}

/// Normalize an optional sub-account argument, treating `""` as absent
pub(crate) fn scope(sub_account: Option<&str>) -> Option<String> {
    sub_account
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Body carrying only the sub-account scope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeRequest {
    #[serde(rename = "subAccount", default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

/// Body addressing a record by `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdRequest {
    pub id: String,
    #[serde(rename = "subAccount", default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

/// Body addressing a transaction by `chiRef`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChiRefRequest {
    #[serde(rename = "chiRef")]
    pub chi_ref: String,
    #[serde(rename = "subAccount", default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalAmountInUsdRequest {
    #[serde(rename = "originCurrency")]
    pub origin_currency: String,
    #[serde(with = "crate::types::amount")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsdInLocalAmountRequest {
    #[serde(rename = "destinationCurrency")]
    pub destination_currency: String,
    #[serde(rename = "amountInUSD", with = "crate::types::amount")]
    pub amount_in_usd: Decimal,
}

/// Mobile money collection request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileMoneyPaymentRequest {
    #[serde(with = "crate::types::amount")]
    pub amount: Decimal,
    pub currency: String,
    pub phone_number: String,
    #[serde(rename = "fullname")]
    pub full_name: String,
    pub country: String,
    pub email: String,
    pub tx_ref: String,
    #[serde(rename = "subAccount", default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirtimePayoutRequest {
    pub airtime: Vec<AirtimePayout>,
    #[serde(rename = "subAccount", default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankPayoutRequest {
    pub banks: Vec<BankPayout>,
    #[serde(rename = "subAccount", default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChimoneyPayoutRequest {
    pub chimoneys: Vec<ChimoneyPayout>,
    #[serde(rename = "subAccount", default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftCardPayoutRequest {
    #[serde(rename = "giftCards")]
    pub gift_cards: Vec<GiftCardPayout>,
    #[serde(rename = "subAccount", default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitiateChimoneyRequest {
    pub chimoneys: Vec<ChimoneyPayout>,
    #[serde(rename = "turnOffNotification")]
    pub turn_off_notification: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto_payments: Option<Vec<CryptoPayment>>,
    #[serde(rename = "subAccount", default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

/// Redeem airtime against a Chimoney transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirtimeRedeemRequest {
    pub chi_ref: String,
    pub phone_number: String,
    pub country_to_send: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<JsonObject>,
    #[serde(default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

/// Redeem a transaction into any supported product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnyRedeemRequest {
    pub chi_ref: String,
    pub redeem_data: Vec<RedeemDataItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<JsonObject>,
    #[serde(default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChimoneyRedeemRequest {
    pub chimoneys: Vec<JsonObject>,
    #[serde(rename = "subAccount", default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

/// Redeem a transaction as a gift card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardRedeemRequest {
    pub chi_ref: String,
    pub redeem_options: JsonObject,
    #[serde(default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

/// Redeem a transaction to a mobile money wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileMoneyRedeemRequest {
    pub chi_ref: String,
    pub redeem_options: JsonObject,
    #[serde(default, skip_serializing_if = "is_unscoped")]
    pub sub_account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubAccountRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransferRequest {
    pub receiver: String,
    pub wallet: String,
}
