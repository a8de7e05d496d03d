/*
[INPUT]:  Issue IDs, transaction IDs, chiRefs and optional sub-account scope
[OUTPUT]: Transaction listings, transfers and deletions as response envelopes
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding account endpoints or changing their payloads
*/

use crate::http::transport::{ApiRequest, Transport, send_json};
use crate::http::validation::require_text;
use crate::http::{Result, ValidationError};
use crate::types::{ChiRefRequest, Envelope, IdRequest, ScopeRequest, scope};

/// Account endpoints
pub struct Account<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Account<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// List transactions belonging to an issue
    ///
    /// POST /accounts/issue-id-transactions?issueID={issue_id}
    pub async fn transactions_by_issue_id(
        &self,
        issue_id: &str,
        sub_account: Option<&str>,
    ) -> Result<Envelope> {
        require_text(issue_id, ValidationError::InvalidIssueId)?;

        let body = ScopeRequest {
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/accounts/issue-id-transactions")
            .query("issueID", issue_id)
            .json(&body)?;
        send_json(self.transport, request).await
    }

    /// List every transaction
    ///
    /// POST /accounts/transactions
    pub async fn all_transactions(&self, sub_account: Option<&str>) -> Result<Envelope> {
        let body = ScopeRequest {
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/accounts/transactions").json(&body)?;
        send_json(self.transport, request).await
    }

    /// Fetch one transaction by ID
    ///
    /// POST /accounts/transaction
    pub async fn transaction_by_id(
        &self,
        transaction_id: &str,
        sub_account: Option<&str>,
    ) -> Result<Envelope> {
        require_text(transaction_id, ValidationError::InvalidTransactionId)?;

        let body = IdRequest {
            id: transaction_id.to_string(),
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/accounts/transaction").json(&body)?;
        send_json(self.transport, request).await
    }

    /// POST /accounts/transfer
    pub async fn transfer(&self, chi_ref: &str, sub_account: Option<&str>) -> Result<Envelope> {
        require_text(chi_ref, ValidationError::InvalidChiRef)?;

        let body = ChiRefRequest {
            chi_ref: chi_ref.to_string(),
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::post("/accounts/transfer").json(&body)?;
        send_json(self.transport, request).await
    }

    /// Delete a transaction that has not been paid yet
    ///
    /// DELETE /accounts/delete-unpaid
    pub async fn delete_unpaid_transaction(
        &self,
        chi_ref: &str,
        sub_account: Option<&str>,
    ) -> Result<Envelope> {
        require_text(chi_ref, ValidationError::InvalidChiRef)?;

        let body = ChiRefRequest {
            chi_ref: chi_ref.to_string(),
            sub_account: scope(sub_account),
        };
        let request = ApiRequest::delete("/accounts/delete-unpaid").json(&body)?;
        send_json(self.transport, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ChimoneyError;
    use crate::http::test_support::{UnreachableTransport, client_for, success};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer};

    #[tokio::test]
    async fn test_transactions_by_issue_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts/issue-id-transactions"))
            .and(query_param("issueID", "issue_42"))
            .and(body_json(serde_json::json!({ "subAccount": "sub_1" })))
            .respond_with(success(serde_json::json!([{ "id": "tx_1" }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let envelope = client
            .account()
            .transactions_by_issue_id("issue_42", Some("sub_1"))
            .await
            .expect("transactions_by_issue_id failed");

        let data: Vec<serde_json::Value> = envelope.data_as().unwrap();
        assert_eq!(data[0]["id"], "tx_1");
    }

    #[tokio::test]
    async fn test_all_transactions_sends_empty_object_without_scope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts/transactions"))
            .and(body_json(serde_json::json!({})))
            .respond_with(success(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let envelope = client.account().all_transactions(Some("")).await.unwrap();
        assert!(envelope.is_success());
    }

    #[tokio::test]
    async fn test_transaction_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts/transaction"))
            .and(body_json(serde_json::json!({ "id": "tx_9" })))
            .respond_with(success(serde_json::json!({ "id": "tx_9", "valueInUSD": 5 })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let envelope = client.account().transaction_by_id("tx_9", None).await.unwrap();
        let data: serde_json::Value = envelope.data_as().unwrap();
        assert_eq!(data["valueInUSD"], 5);
    }

    #[tokio::test]
    async fn test_transfer_and_delete_unpaid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts/transfer"))
            .and(body_json(serde_json::json!({ "chiRef": "chi_1", "subAccount": "sub_1" })))
            .respond_with(success(serde_json::json!({ "chiRef": "chi_1" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/accounts/delete-unpaid"))
            .and(body_json(serde_json::json!({ "chiRef": "chi_2" })))
            .respond_with(success(serde_json::json!({ "deleted": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let account = client.account();
        account.transfer("chi_1", Some("sub_1")).await.unwrap();
        let deleted = account.delete_unpaid_transaction("chi_2", None).await.unwrap();
        let data: serde_json::Value = deleted.data_as().unwrap();
        assert_eq!(data["deleted"], true);
    }

    #[tokio::test]
    async fn test_validation_skips_transport() {
        let account = Account::new(&UnreachableTransport);

        let err = account.transactions_by_issue_id("", None).await.unwrap_err();
        assert!(matches!(err, ChimoneyError::Validation(ValidationError::InvalidIssueId)));

        let err = account.transaction_by_id("", None).await.unwrap_err();
        assert!(matches!(
            err,
            ChimoneyError::Validation(ValidationError::InvalidTransactionId)
        ));

        let err = account.transfer("", Some("sub_1")).await.unwrap_err();
        assert!(matches!(err, ChimoneyError::Validation(ValidationError::InvalidChiRef)));

        let err = account.delete_unpaid_transaction("", None).await.unwrap_err();
        assert!(matches!(err, ChimoneyError::Validation(ValidationError::InvalidChiRef)));
    }
}
