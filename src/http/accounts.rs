/*
[INPUT]:  Stored credential and account settings payloads
[OUTPUT]: Account profile, balance and settings confirmation
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding new account endpoints or changing response format
*/

use crate::http::{GaxClient, Result};
use crate::types::{AccountBalance, AccountInfo, AccountSettingsUpdate, ApiMessage};
use reqwest::Method;

impl GaxClient {
    /// Fetch the authenticated user's account profile
    ///
    /// GET /api/accounts/info/
    pub async fn get_account_info(&self) -> Result<AccountInfo> {
        let builder = self.api_request(Method::GET, "/api/accounts/info/")?;
        self.send_json(builder).await
    }

    /// Fetch the current account balance
    ///
    /// GET /api/accounts/balance/
    pub async fn get_balance(&self) -> Result<AccountBalance> {
        let builder = self.api_request(Method::GET, "/api/accounts/balance/")?;
        self.send_json(builder).await
    }

    /// Update account settings
    ///
    /// PUT /api/accounts/settings/
    pub async fn update_account_settings(
        &self,
        update: &AccountSettingsUpdate,
    ) -> Result<ApiMessage> {
        let builder = self
            .api_request(Method::PUT, "/api/accounts/settings/")?
            .json(update);
        self.send_json(builder).await
    }
}
