/*
[INPUT]:  Transaction and transfer payloads
[OUTPUT]: Transaction history and transfer confirmation
[POS]:    HTTP layer - transaction endpoints
[UPDATE]: When adding new transaction endpoints or changing response format
*/

use crate::http::{GaxClient, Result};
use crate::types::{ApiMessage, NewTransactionRequest, TransactionRecord, TransferRequest};
use reqwest::Method;

impl GaxClient {
    /// Fetch the transaction history
    ///
    /// GET /api/transactions/
    pub async fn get_transactions(&self) -> Result<Vec<TransactionRecord>> {
        let builder = self.api_request(Method::GET, "/api/transactions/")?;
        self.send_json(builder).await
    }

    /// Create a new transaction
    ///
    /// POST /api/transactions/create/
    pub async fn create_transaction(
        &self,
        req: &NewTransactionRequest,
    ) -> Result<TransactionRecord> {
        let builder = self
            .api_request(Method::POST, "/api/transactions/create/")?
            .json(req);
        self.send_json(builder).await
    }

    /// Transfer funds to another account
    ///
    /// POST /api/transfer/
    pub async fn transfer(&self, req: &TransferRequest) -> Result<ApiMessage> {
        let builder = self.api_request(Method::POST, "/api/transfer/")?.json(req);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, GaxClient};
    use crate::types::{NewTransactionRequest, TransactionRecord, TransactionType, TransferRequest};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_transactions() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {
                "id": 1,
                "amount": "500.00",
                "transaction_type": "deposit",
                "details": "salary",
                "timestamp": "2024-05-01T12:00:00Z"
            },
            {
                "id": 2,
                "amount": "120.00",
                "transaction_type": "bill_payment",
                "timestamp": "2024-05-02T09:30:00Z"
            }
        ]"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/transactions/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = GaxClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let response = client.get_transactions().await.expect("get_transactions failed");

        assert_eq!(response.len(), 2);
        assert_eq!(response[0].transaction_type, TransactionType::Deposit);
        assert_eq!(response[1].transaction_type, TransactionType::BillPayment);
        assert_eq!(response[1].amount, "120.00".parse().expect("amount"));
    }

    #[tokio::test]
    async fn test_create_transaction() {
        let server = MockServer::start().await;
        let req = NewTransactionRequest {
            amount: "250.00".parse().expect("amount"),
            transaction_type: TransactionType::Withdrawal,
            to_account: None,
            details: Some("atm".to_string()),
        };
        let mock_response = r#"{
            "id": 9,
            "amount": "250.00",
            "transaction_type": "withdrawal",
            "details": "atm",
            "timestamp": "2024-05-03T08:00:00Z"
        }"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/transactions/create/"))
            .and(body_json(&req))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = GaxClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let response = client
            .create_transaction(&req)
            .await
            .expect("create_transaction failed");

        let expected = TransactionRecord {
            id: 9,
            amount: "250.00".parse().expect("amount"),
            transaction_type: TransactionType::Withdrawal,
            from_account: None,
            to_account: None,
            details: Some("atm".to_string()),
            timestamp: "2024-05-03T08:00:00Z".parse().expect("timestamp"),
        };

        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_transfer() {
        let server = MockServer::start().await;
        let req = TransferRequest {
            to_account_number: "0099887766".to_string(),
            amount: "1000.00".parse().expect("amount"),
            details: Some("rent".to_string()),
        };

        let _mock = Mock::given(method("POST"))
            .and(path("/api/transfer/"))
            .and(body_json(&req))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{"message": "Transfer successful"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = GaxClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let response = client.transfer(&req).await.expect("transfer failed");
        assert_eq!(response.message, "Transfer successful");
    }
}
