/*
[INPUT]:  Response bodies returned by every Chimoney endpoint
[OUTPUT]: Envelope with status/message metadata and raw `data` payload
[POS]:    Data layer - uniform response wrapper
[UPDATE]: When the API adds top-level response fields
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::enums::ResponseStatus;
use crate::http::{ChimoneyError, Result};

/// Uniform `{status, data, message, timestamp?}` response wrapper.
///
/// `data` is kept as the exact JSON text the server sent. Its shape differs per
/// endpoint, so callers pick the target type with [`Envelope::data_as`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResponseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Box<RawValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Envelope {
    /// Raw `data` payload, if the server sent a non-null one
    pub fn data(&self) -> Option<&RawValue> {
        self.data.as_deref()
    }

    /// Decode `data` into an endpoint-specific type.
    ///
    /// A missing or null `data` decodes as JSON `null`, so `Option<T>` targets
    /// yield `None` instead of an error.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        match self.data() {
            Some(raw) => serde_json::from_str(raw.get()),
            None => serde_json::from_value(serde_json::Value::Null),
        }
        .map_err(ChimoneyError::Decode)
    }

    /// Whether the server labelled the response `success`
    pub fn is_success(&self) -> bool {
        self.status == Some(ResponseStatus::Success)
    }
}
