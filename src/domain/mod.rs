//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{ListSubscription, Subscriber, TargetMessage, TrackEvent, UserUpdate};
pub use response::ApiResponse;
pub use validation::ValidationError;
pub use value::{ApiKey, KnownResponseCode, ResponseCode};

pub(crate) use value::{non_blank, path_segment};
