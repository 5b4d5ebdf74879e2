//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod body;
mod http;
mod query;

pub use body::{decode_json_body, take_field};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::{QueryError, encode_query};
