mod http;

use std::path::PathBuf;

pub use self::http::{HttpTransport, TransportConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::errors::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    /// Path of a recorded voice file
    File(PathBuf),
}

/// Fully resolved request: the token and language are the ones to send,
/// after the per-call options have been merged with the client defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub payload: Payload,
    pub token: String,
    /// `None` lets the API detect the language of the input
    pub language: Option<String>,
}

/// Sends requests to the NLU API and returns the raw JSON body of the answer.
///
/// Implementations must surface non-success answers as
/// `RecastError::RequestFailed` without trying to interpret their body.
pub trait Transport: Send + Sync {
    fn submit(&self, request: &Request) -> Result<String>;
}
