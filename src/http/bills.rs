/*
[INPUT]:  Bill payment payloads
[OUTPUT]: Bill history and payment confirmation
[POS]:    HTTP layer - bill payment endpoints
[UPDATE]: When adding new bill endpoints or changing response format
*/

use crate::http::{GaxClient, Result};
use crate::types::{BillPaymentRequest, BillRecord};
use reqwest::Method;

impl GaxClient {
    /// Pay a bill
    ///
    /// POST /api/bills/pay/
    pub async fn pay_bill(&self, req: &BillPaymentRequest) -> Result<BillRecord> {
        let builder = self.api_request(Method::POST, "/api/bills/pay/")?.json(req);
        self.send_json(builder).await
    }

    /// Fetch past bill payments
    ///
    /// GET /api/bills/
    pub async fn get_bills(&self) -> Result<Vec<BillRecord>> {
        let builder = self.api_request(Method::GET, "/api/bills/")?;
        self.send_json(builder).await
    }
}
