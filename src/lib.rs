//! Async Rust client for the Iterable REST API.
//!
//! The crate has a domain layer of validated types, a transport layer for
//! wire-format details, a client layer holding the request wrapper, and a set
//! of resource bindings that map method names to API paths.
//!
//! ```rust,no_run
//! use iterable_api::{IterableClient, TargetMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), iterable_api::IterableError> {
//!     let client = IterableClient::new("...")?;
//!     let target = TargetMessage::to_email(49, "rec@email.com")?;
//!     let response = client.sms().target(&target).await?;
//!     println!("{:?}", response.code);
//!     Ok(())
//! }
//! ```
//!
//! Requests are logged through `tracing` at `debug` level; rejected calls at
//! `warn`. The API key is never logged.
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod resources;
mod transport;

pub use client::{
    API_KEY_ENV, BoxFuture, DEFAULT_BASE_URL, HttpTransport, IterableClient,
    IterableClientBuilder, IterableError, TransportError,
};
pub use domain::{
    ApiKey, ApiResponse, KnownResponseCode, ListSubscription, ResponseCode, Subscriber,
    TargetMessage, TrackEvent, UserUpdate, ValidationError,
};
pub use resources::{
    Campaigns, Catalogs, Channels, Commerce, Email, Events, InApp, Lists, MessageTypes, Push, Sms,
    TemplateKind, Templates, Users, Workflows,
};
pub use transport::{HttpMethod, HttpRequest, HttpResponse};
