use serde::Serialize;

use crate::client::{IterableClient, IterableError};
use crate::domain::ApiResponse;

/// Push notification endpoints (`/push/*`).
#[derive(Debug, Clone, Copy)]
pub struct Push<'a> {
    client: &'a IterableClient,
}

impl<'a> Push<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// `POST /push/target`
    pub async fn target<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/push/target", obj).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::fake::FakeTransport;
    use crate::transport::HttpMethod;

    use crate::resources::SUCCESS;

    #[tokio::test]
    async fn target_posts_to_push_target() {
        let transport = FakeTransport::new(200, SUCCESS);
        let client = transport.client();
        let obj = json!({ "campaignId": 3, "recipientUserId": "u-1" });

        client.push().target(&obj).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/push/target");
        assert_eq!(request.body, Some(obj));
    }
}
