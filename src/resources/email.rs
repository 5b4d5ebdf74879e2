use serde::Serialize;

use crate::client::{IterableClient, IterableError};
use crate::domain::ApiResponse;

/// Email endpoints (`/email/*`).
#[derive(Debug, Clone, Copy)]
pub struct Email<'a> {
    client: &'a IterableClient,
}

impl<'a> Email<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// `POST /email/target`
    pub async fn target<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/email/target", obj).await
    }

    /// Cancel a scheduled email: `POST /email/cancel`.
    pub async fn cancel<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/email/cancel", obj).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::fake::FakeTransport;
    use crate::transport::HttpMethod;

    use crate::resources::SUCCESS;

    #[tokio::test]
    async fn target_and_cancel_post_to_email_paths() {
        let transport = FakeTransport::new(200, SUCCESS);
        let client = transport.client();
        let obj = json!({ "campaignId": 12, "recipientEmail": "a@b.co" });

        client.email().target(&obj).await.unwrap();
        client.email().cancel(&obj).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].path, "/email/target");
        assert_eq!(requests[1].path, "/email/cancel");
        assert_eq!(requests[1].body, Some(obj));
    }
}
