use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::validation::ValidationError;
use crate::domain::value::non_blank;

/// Body for the `*/target` endpoints (`/sms/target`, `/email/target`, ...).
///
/// Either `recipient_email` or `recipient_user_id` identifies the recipient.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetMessage {
    pub campaign_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_repeat_marketing_sends: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl TargetMessage {
    pub fn to_email(campaign_id: i64, email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        non_blank("recipientEmail", &email)?;
        Ok(Self {
            campaign_id,
            recipient_email: Some(email),
            ..Default::default()
        })
    }

    pub fn to_user_id(
        campaign_id: i64,
        user_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let user_id = user_id.into();
        non_blank("recipientUserId", &user_id)?;
        Ok(Self {
            campaign_id,
            recipient_user_id: Some(user_id),
            ..Default::default()
        })
    }
}

/// Body for `POST /users/update`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_user_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_nested_objects: Option<bool>,
}

impl UserUpdate {
    pub fn by_email(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        non_blank("email", &email)?;
        Ok(Self {
            email: Some(email),
            ..Default::default()
        })
    }

    pub fn by_user_id(user_id: impl Into<String>) -> Result<Self, ValidationError> {
        let user_id = user_id.into();
        non_blank("userId", &user_id)?;
        Ok(Self {
            user_id: Some(user_id),
            ..Default::default()
        })
    }

    /// Merge one custom profile field into `dataFields`.
    pub fn data_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data_fields
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Body for `POST /events/track`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEvent {
    pub event_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
}

impl TrackEvent {
    pub fn for_email(
        event_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let event_name = event_name.into();
        let email = email.into();
        non_blank("eventName", &event_name)?;
        non_blank("email", &email)?;
        Ok(Self {
            event_name,
            email: Some(email),
            ..Default::default()
        })
    }
}

/// A single entry of `subscribers` in list subscribe/unsubscribe bodies.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fields: Option<Map<String, Value>>,
}

impl Subscriber {
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }
}

/// Body for `POST /lists/subscribe` and `POST /lists/unsubscribe`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubscription {
    pub list_id: i64,
    pub subscribers: Vec<Subscriber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_unsubscribe: Option<bool>,
}

impl ListSubscription {
    pub fn new(list_id: i64, subscribers: Vec<Subscriber>) -> Result<Self, ValidationError> {
        if subscribers.is_empty() {
            return Err(ValidationError::Empty {
                field: "subscribers",
            });
        }
        Ok(Self {
            list_id,
            subscribers,
            campaign_id: None,
            channel_unsubscribe: None,
        })
    }
}
