use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::client::{IterableClient, IterableError};
use crate::domain::ApiResponse;

use super::get_named;

/// Message medium a template belongs to; selects the `/templates/{kind}` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Email,
    Sms,
    Push,
    InApp,
}

impl TemplateKind {
    pub fn as_path_segment(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Push => "push",
            Self::InApp => "inapp",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

/// Template endpoints (`/templates/*`).
#[derive(Debug, Clone, Copy)]
pub struct Templates<'a> {
    client: &'a IterableClient,
}

impl<'a> Templates<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// `GET /templates`, unwrapped from `{ "templates": [...] }`.
    ///
    /// Filters such as `templateType` and `messageMedium` go in `params`.
    pub async fn get<P>(&self, params: &P) -> Result<Vec<Value>, IterableError>
    where
        P: Serialize + ?Sized,
    {
        get_named(self.client, "/templates", params, "templates").await
    }

    /// `GET /templates/{kind}/get`, e.g. with `{ "templateId": 42 }`.
    pub async fn get_template<P>(&self, kind: TemplateKind, params: &P) -> Result<Value, IterableError>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .get_with_params(&format!("/templates/{kind}/get"), params)
            .await
    }

    /// `POST /templates/{kind}/update`
    pub async fn update<B>(&self, kind: TemplateKind, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client
            .post(&format!("/templates/{kind}/update"), obj)
            .await
    }

    /// Create or update by `clientTemplateId`: `POST /templates/{kind}/upsert`.
    pub async fn upsert<B>(&self, kind: TemplateKind, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client
            .post(&format!("/templates/{kind}/upsert"), obj)
            .await
    }
}
