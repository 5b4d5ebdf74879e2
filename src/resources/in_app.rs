use serde::Serialize;
use serde_json::Value;

use crate::client::{IterableClient, IterableError};
use crate::domain::ApiResponse;

/// In-app message endpoints (`/inApp/*`).
#[derive(Debug, Clone, Copy)]
pub struct InApp<'a> {
    client: &'a IterableClient,
}

impl<'a> InApp<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// `POST /inApp/target`
    pub async fn target<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/inApp/target", obj).await
    }

    /// `GET /inApp/getMessages`, e.g. with `{ "email": ..., "count": 10 }`.
    pub async fn get_messages<P>(&self, params: &P) -> Result<Value, IterableError>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .get_with_params("/inApp/getMessages", params)
            .await
    }
}
