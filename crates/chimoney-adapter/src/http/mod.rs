/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod info;
pub mod mobile_money;
pub mod payouts;
pub mod redeem;
pub mod sub_account;
pub mod transport;
pub mod wallet;

mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ChimoneyError, Result, ValidationError};
pub use transport::{ApiRequest, BodyMode, Transport, send_json};

pub use account::Account;
pub use client::{API_KEY_ENV_VAR, API_KEY_HEADER, ApiKey, ChimoneyClient, ClientConfig};
pub use info::Info;
pub use mobile_money::MobileMoney;
pub use payouts::Payouts;
pub use redeem::Redeem;
pub use sub_account::SubAccount;
pub use wallet::Wallet;
