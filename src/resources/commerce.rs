use serde::Serialize;

use crate::client::{IterableClient, IterableError};
use crate::domain::ApiResponse;

/// Commerce endpoints (`/commerce/*`).
#[derive(Debug, Clone, Copy)]
pub struct Commerce<'a> {
    client: &'a IterableClient,
}

impl<'a> Commerce<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// `POST /commerce/trackPurchase` with `{ "user", "items", "total" }`.
    pub async fn track_purchase<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/commerce/trackPurchase", obj).await
    }

    /// Replace the user's shopping cart: `POST /commerce/updateCart`.
    pub async fn update_cart<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/commerce/updateCart", obj).await
    }
}
