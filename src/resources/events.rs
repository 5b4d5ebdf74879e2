use serde::Serialize;
use serde_json::Value;

use crate::client::{IterableClient, IterableError};
use crate::domain::{ApiResponse, path_segment};

use super::get_named;

/// Custom event endpoints (`/events/*`).
#[derive(Debug, Clone, Copy)]
pub struct Events<'a> {
    client: &'a IterableClient,
}

impl<'a> Events<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// `POST /events/track`; see [`crate::TrackEvent`].
    pub async fn track<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/events/track", obj).await
    }

    /// `POST /events/trackBulk` with `{ "events": [...] }`.
    pub async fn track_bulk<B>(&self, obj: &B) -> Result<Value, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/events/trackBulk", obj).await
    }

    /// `POST /events/trackPushOpen`
    pub async fn track_push_open<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/events/trackPushOpen", obj).await
    }

    /// Events recorded for a user: `GET /events/{email}`, unwrapped from `{ "events": [...] }`.
    pub async fn get<P>(&self, email: &str, params: &P) -> Result<Vec<Value>, IterableError>
    where
        P: Serialize + ?Sized,
    {
        let email = path_segment("email", email)?;
        get_named(self.client, &format!("/events/{email}"), params, "events").await
    }
}
