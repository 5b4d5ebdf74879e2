use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::{IterableClient, IterableError};
use crate::domain::{ApiResponse, path_segment};

/// Catalog endpoints (`/catalogs/*`).
///
/// Catalog names and item ids each become one percent-encoded path segment.
/// Blank values and `.`/`..` are rejected before a request is made.
#[derive(Debug, Clone, Copy)]
pub struct Catalogs<'a> {
    client: &'a IterableClient,
}

impl<'a> Catalogs<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// `GET /catalogs`, e.g. with `{ "page": 1, "pageSize": 10 }`.
    pub async fn get<P>(&self, params: &P) -> Result<Value, IterableError>
    where
        P: Serialize + ?Sized,
    {
        self.client.get_with_params("/catalogs", params).await
    }

    /// `POST /catalogs/{name}`
    pub async fn create(&self, name: &str) -> Result<ApiResponse, IterableError> {
        let name = path_segment("catalogName", name)?;
        self.client
            .post(&format!("/catalogs/{name}"), &Map::new())
            .await
    }

    /// `DELETE /catalogs/{name}`
    pub async fn delete(&self, name: &str) -> Result<ApiResponse, IterableError> {
        let name = path_segment("catalogName", name)?;
        self.client.delete(&format!("/catalogs/{name}")).await
    }

    /// `GET /catalogs/{name}/items`
    pub async fn get_items<P>(&self, name: &str, params: &P) -> Result<Value, IterableError>
    where
        P: Serialize + ?Sized,
    {
        let name = path_segment("catalogName", name)?;
        self.client
            .get_with_params(&format!("/catalogs/{name}/items"), params)
            .await
    }

    /// `GET /catalogs/{name}/items/{id}`
    pub async fn get_item(&self, name: &str, id: &str) -> Result<Value, IterableError> {
        let path = item_path(name, id)?;
        self.client.get(&path).await
    }

    /// Create or replace an item: `PUT /catalogs/{name}/items/{id}` with `{ "value": {...} }`.
    pub async fn replace_item<B>(
        &self,
        name: &str,
        id: &str,
        obj: &B,
    ) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        let path = item_path(name, id)?;
        self.client.put(&path, obj).await
    }

    /// Partially update an item: `PATCH /catalogs/{name}/items/{id}` with `{ "update": {...} }`.
    pub async fn update_item<B>(
        &self,
        name: &str,
        id: &str,
        obj: &B,
    ) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        let path = item_path(name, id)?;
        self.client.patch(&path, obj).await
    }

    /// `DELETE /catalogs/{name}/items/{id}`
    pub async fn delete_item(&self, name: &str, id: &str) -> Result<ApiResponse, IterableError> {
        let path = item_path(name, id)?;
        self.client.delete(&path).await
    }

    /// `GET /catalogs/{name}/fieldMappings`
    pub async fn get_field_mappings(&self, name: &str) -> Result<Value, IterableError> {
        let name = path_segment("catalogName", name)?;
        self.client
            .get(&format!("/catalogs/{name}/fieldMappings"))
            .await
    }

    /// `PUT /catalogs/{name}/fieldMappings` with `{ "mappingsUpdates": [...] }`.
    pub async fn update_field_mappings<B>(
        &self,
        name: &str,
        obj: &B,
    ) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        let name = path_segment("catalogName", name)?;
        self.client
            .put(&format!("/catalogs/{name}/fieldMappings"), obj)
            .await
    }
}

fn item_path(name: &str, id: &str) -> Result<String, IterableError> {
    let name = path_segment("catalogName", name)?;
    let id = path_segment("itemId", id)?;
    Ok(format!("/catalogs/{name}/items/{id}"))
}
