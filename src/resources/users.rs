use serde::Serialize;
use serde_json::Value;

use crate::client::{IterableClient, IterableError};
use crate::domain::{ApiResponse, path_segment};

/// User profile endpoints (`/users/*`).
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a IterableClient,
}

impl<'a> Users<'a> {
    pub fn new(client: &'a IterableClient) -> Self {
        Self { client }
    }

    /// Create or update a user: `POST /users/update`; see [`crate::UserUpdate`].
    pub async fn update<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/users/update", obj).await
    }

    /// `POST /users/bulkUpdate` with `{ "users": [...] }`.
    pub async fn bulk_update<B>(&self, obj: &B) -> Result<Value, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/users/bulkUpdate", obj).await
    }

    /// `POST /users/updateEmail` with `{ "currentEmail", "newEmail" }`.
    pub async fn update_email<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/users/updateEmail", obj).await
    }

    /// `POST /users/updateSubscriptions`
    pub async fn update_subscriptions<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/users/updateSubscriptions", obj).await
    }

    /// `POST /users/registerDeviceToken`
    pub async fn register_device_token<B>(&self, obj: &B) -> Result<ApiResponse, IterableError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/users/registerDeviceToken", obj).await
    }

    /// `GET /users/{email}`; the body is `{ "user": {...} }`, or `{}` when unknown.
    pub async fn get(&self, email: &str) -> Result<Value, IterableError> {
        let email = path_segment("email", email)?;
        self.client.get(&format!("/users/{email}")).await
    }

    /// `GET /users/byUserId/{userId}`
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Value, IterableError> {
        let user_id = path_segment("userId", user_id)?;
        self.client.get(&format!("/users/byUserId/{user_id}")).await
    }

    /// `DELETE /users/{email}`
    pub async fn delete(&self, email: &str) -> Result<ApiResponse, IterableError> {
        let email = path_segment("email", email)?;
        self.client.delete(&format!("/users/{email}")).await
    }

    /// `DELETE /users/byUserId/{userId}`
    pub async fn delete_by_user_id(&self, user_id: &str) -> Result<ApiResponse, IterableError> {
        let user_id = path_segment("userId", user_id)?;
        self.client
            .delete(&format!("/users/byUserId/{user_id}"))
            .await
    }

    /// Project user fields and their types: `GET /users/getFields`.
    pub async fn get_fields(&self) -> Result<Value, IterableError> {
        self.client.get("/users/getFields").await
    }

    /// `GET /users/getSentMessages`, e.g. with `{ "email": ..., "limit": 10 }`.
    pub async fn get_sent_messages<P>(&self, params: &P) -> Result<Value, IterableError>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .get_with_params("/users/getSentMessages", params)
            .await
    }
}
