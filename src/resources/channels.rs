use serde_json::{Map, Value};

use crate::client::{IterableClient, IterableError};

use super::get_named;

/// Subscription channels (`GET /channels`).
#[derive(Debug, Clone, Copy)]
pub struct Channels<'a> {
    client: &'a IterableClient,
}

impl<'a> Channels<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<Vec<Value>, IterableError> {
        get_named(self.client, "/channels", &Map::new(), "channels").await
    }
}

/// Message types (`GET /messageTypes`).
#[derive(Debug, Clone, Copy)]
pub struct MessageTypes<'a> {
    client: &'a IterableClient,
}

impl<'a> MessageTypes<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<Vec<Value>, IterableError> {
        get_named(self.client, "/messageTypes", &Map::new(), "messageTypes").await
    }
}
