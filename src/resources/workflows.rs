use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::{IterableClient, IterableError};
use crate::domain::ApiResponse;

use super::get_named;

/// Journey (workflow) endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Workflows<'a> {
    client: &'a IterableClient,
}

impl<'a> Workflows<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// `GET /workflows`, unwrapped from `{ "workflows": [...] }`.
    pub async fn get(&self) -> Result<Vec<Value>, IterableError> {
        get_named(self.client, "/workflows", &Map::new(), "workflows").await
    }

    /// `POST /workflows/triggerWorkflow` with `{ "workflowId", "email" | "listId", ... }`.
    pub async fn trigger<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/workflows/triggerWorkflow", obj).await
    }
}
