/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Chimoney adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    API_KEY_ENV_VAR,
    Account,
    ApiKey,
    ApiRequest,
    BodyMode,
    ChimoneyClient,
    ChimoneyError,
    ClientConfig,
    Info,
    MobileMoney,
    Payouts,
    Redeem,
    Result,
    SubAccount,
    Transport,
    ValidationError,
    Wallet,
    send_json,
};

// Re-export all types
pub use types::*;

// Amounts in request records are decimals
pub use rust_decimal::Decimal;
