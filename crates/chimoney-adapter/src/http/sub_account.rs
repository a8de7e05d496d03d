/*
[INPUT]:  Sub-account names, emails and IDs
[OUTPUT]: Created, listed or deleted sub-accounts as response envelopes
[POS]:    HTTP layer - sub-account management endpoints
[UPDATE]: When sub-account endpoints change
*/

use crate::http::transport::{ApiRequest, Transport, send_json};
use crate::http::validation::require_text;
use crate::http::{Result, ValidationError};
use crate::types::{CreateSubAccountRequest, Envelope, IdRequest};

/// Sub-account management endpoints
pub struct SubAccount<'a> {
    transport: &'a dyn Transport,
}

impl<'a> SubAccount<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// POST /sub-account
    pub async fn create(&self, request: &CreateSubAccountRequest) -> Result<Envelope> {
        require_text(&request.name, ValidationError::MissingName)?;
        require_text(&request.email, ValidationError::MissingEmail)?;

        let request = ApiRequest::post("/sub-account").json(request)?;
        send_json(self.transport, request).await
    }

    /// GET /sub-account/list
    pub async fn list(&self) -> Result<Envelope> {
        send_json(self.transport, ApiRequest::get("/sub-account/list")).await
    }

    /// DELETE /sub-account
    pub async fn delete(&self, id: &str) -> Result<Envelope> {
        require_text(id, ValidationError::InvalidSubAccountId)?;

        let body = IdRequest {
            id: id.to_string(),
            sub_account: None,
        };
        let request = ApiRequest::delete("/sub-account").json(&body)?;
        send_json(self.transport, request).await
    }
}
