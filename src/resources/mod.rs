//! Resource bindings: one narrow client per Iterable API resource group.
//!
//! Each binding borrows an [`IterableClient`] and maps its methods onto one
//! verb call against a fixed path. Get one with `client.sms()` (and friends)
//! or `Sms::new(&client)`.

mod campaigns;
mod catalogs;
mod channels;
mod commerce;
mod email;
mod events;
mod in_app;
mod lists;
mod push;
mod sms;
mod templates;
mod users;
mod workflows;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{IterableClient, IterableError};
use crate::transport::take_field;

pub use campaigns::Campaigns;
pub use catalogs::Catalogs;
pub use channels::{Channels, MessageTypes};
pub use commerce::Commerce;
pub use email::Email;
pub use events::Events;
pub use in_app::InApp;
pub use lists::Lists;
pub use push::Push;
pub use sms::Sms;
pub use templates::{TemplateKind, Templates};
pub use users::Users;
pub use workflows::Workflows;

#[cfg(test)]
pub(crate) const SUCCESS: &str = r#"{ "msg": "", "code": "Success", "params": null }"#;

/// GET `path` and return the collection stored under `field`.
async fn get_named<T, P>(
    client: &IterableClient,
    path: &str,
    params: &P,
    field: &'static str,
) -> Result<T, IterableError>
where
    T: DeserializeOwned,
    P: Serialize + ?Sized,
{
    let body: Value = client.get_with_params(path, params).await?;
    take_field(body, field).map_err(|err| IterableError::Parse(Box::new(err)))
}

impl IterableClient {
    pub fn campaigns(&self) -> Campaigns<'_> {
        Campaigns::new(self)
    }

    pub fn catalogs(&self) -> Catalogs<'_> {
        Catalogs::new(self)
    }

    pub fn channels(&self) -> Channels<'_> {
        Channels::new(self)
    }

    pub fn commerce(&self) -> Commerce<'_> {
        Commerce::new(self)
    }

    pub fn email(&self) -> Email<'_> {
        Email::new(self)
    }

    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }

    pub fn in_app(&self) -> InApp<'_> {
        InApp::new(self)
    }

    pub fn lists(&self) -> Lists<'_> {
        Lists::new(self)
    }

    pub fn message_types(&self) -> MessageTypes<'_> {
        MessageTypes::new(self)
    }

    pub fn push(&self) -> Push<'_> {
        Push::new(self)
    }

    pub fn sms(&self) -> Sms<'_> {
        Sms::new(self)
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn workflows(&self) -> Workflows<'_> {
        Workflows::new(self)
    }
}
