/*
[INPUT]:  Stored credential
[OUTPUT]: User notification feed
[POS]:    HTTP layer - notification endpoints
[UPDATE]: When adding new notification endpoints or changing response format
*/

use crate::http::{GaxClient, Result};
use crate::types::Notification;
use reqwest::Method;

impl GaxClient {
    /// Fetch the notification feed
    ///
    /// GET /api/notifications/
    pub async fn get_notifications(&self) -> Result<Vec<Notification>> {
        let builder = self.api_request(Method::GET, "/api/notifications/")?;
        self.send_json(builder).await
    }
}
