use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::{IterableClient, IterableError};
use crate::domain::ApiResponse;

use super::get_named;

/// Campaign endpoints (`/campaigns/*`).
#[derive(Debug, Clone, Copy)]
pub struct Campaigns<'a> {
    client: &'a IterableClient,
}

impl<'a> Campaigns<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// `GET /campaigns`, unwrapped from `{ "campaigns": [...] }`.
    pub async fn get(&self) -> Result<Vec<Value>, IterableError> {
        get_named(self.client, "/campaigns", &Map::new(), "campaigns").await
    }

    /// `POST /campaigns/create`; the response carries the new `campaignId`.
    pub async fn create<B>(&self, obj: &B) -> Result<Value, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/campaigns/create", obj).await
    }

    /// Send an existing blast campaign to its lists: `POST /campaigns/trigger`.
    pub async fn trigger<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/campaigns/trigger", obj).await
    }
}
