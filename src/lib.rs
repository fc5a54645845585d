mod client;
mod entity;
pub mod errors;
pub mod models;
mod response;
mod sentence;
#[cfg(test)]
mod testutils;
pub mod transport;
mod utils;

pub use crate::client::{RecastClient, RequestOptions};
pub use crate::entity::Entity;
pub use crate::errors::*;
pub use crate::models::FieldValue;
pub use crate::response::Response;
pub use crate::sentence::Sentence;
pub use crate::transport::{HttpTransport, Payload, Request, Transport, TransportConfig};
pub use crate::utils::{EntityName, FieldName, IntentName};
