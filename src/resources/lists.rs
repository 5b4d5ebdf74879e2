use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::{IterableClient, IterableError};
use crate::domain::ApiResponse;

use super::get_named;

/// List endpoints (`/lists/*`).
#[derive(Debug, Clone, Copy)]
pub struct Lists<'a> {
    client: &'a IterableClient,
}

impl<'a> Lists<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// All lists in the project: `GET /lists`, unwrapped from `{ "lists": [...] }`.
    pub async fn get(&self) -> Result<Vec<Value>, IterableError> {
        get_named(self.client, "/lists", &Map::new(), "lists").await
    }

    /// Create a static list: `POST /lists` with `{ "name": ... }`.
    ///
    /// The response carries the new `listId` rather than the usual envelope.
    pub async fn create<B>(&self, obj: &B) -> Result<Value, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/lists", obj).await
    }

    /// `DELETE /lists/{listId}`
    pub async fn delete(&self, list_id: i64) -> Result<ApiResponse, IterableError> {
        self.client.delete(&format!("/lists/{list_id}")).await
    }

    /// `POST /lists/subscribe`; see [`crate::ListSubscription`].
    pub async fn subscribe<B>(&self, obj: &B) -> Result<Value, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/lists/subscribe", obj).await
    }

    /// `POST /lists/unsubscribe`
    pub async fn unsubscribe<B>(&self, obj: &B) -> Result<Value, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/lists/unsubscribe", obj).await
    }
}
