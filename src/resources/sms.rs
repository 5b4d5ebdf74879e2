use serde::Serialize;

use crate::client::{IterableClient, IterableError};
use crate::domain::ApiResponse;

/// SMS endpoints (`/sms/*`).
#[derive(Debug, Clone, Copy)]
pub struct Sms<'a> {
    client: &'a IterableClient,
}

impl<'a> Sms<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// Send an SMS campaign to one user: `POST /sms/target`.
    ///
    /// `obj` is forwarded verbatim; [`crate::TargetMessage`] covers the usual fields.
    pub async fn target<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/sms/target", obj).await
    }
}
