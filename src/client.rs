use std::path::Path;

use log::debug;

use crate::errors::*;
use crate::response::Response;
use crate::transport::{HttpTransport, Payload, Request, Transport, TransportConfig};

/// Per-call overrides of the client settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub language: Option<String>,
    pub token: Option<String>,
}

impl RequestOptions {
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Client of the Recast.AI NLU API.
///
/// The token authenticates every request. The language, when not empty, is
/// sent along with the inputs; an empty language lets the API detect it.
/// Both can be overridden for a single call through `RequestOptions`:
/// - the token of the options is used when set, the client token otherwise
/// - the language of the options is used when set, even if empty, then the
///   client language when not empty, and no language at all otherwise
pub struct RecastClient<T: Transport = HttpTransport> {
    token: String,
    language: String,
    transport: T,
}

impl RecastClient<HttpTransport> {
    pub fn new<S: Into<String>, L: Into<String>>(token: S, language: L) -> Result<Self> {
        Self::with_config(token, language, TransportConfig::default())
    }

    pub fn with_config<S: Into<String>, L: Into<String>>(
        token: S,
        language: L,
        config: TransportConfig,
    ) -> Result<Self> {
        Ok(Self::with_transport(
            token,
            language,
            HttpTransport::new(config)?,
        ))
    }
}

impl<T: Transport> RecastClient<T> {
    pub fn with_transport<S: Into<String>, L: Into<String>>(
        token: S,
        language: L,
        transport: T,
    ) -> Self {
        Self {
            token: token.into(),
            language: language.into(),
            transport,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn set_token<S: Into<String>>(&mut self, token: S) {
        self.token = token.into();
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language<S: Into<String>>(&mut self, language: S) {
        self.language = language.into();
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn text_request<'a, O>(&self, text: &str, options: O) -> Result<Response>
    where
        O: Into<Option<&'a RequestOptions>>,
    {
        self.send(self.build_request(Payload::Text(text.to_string()), options.into()))
    }

    /// Sends a recorded voice file for analysis
    pub fn file_request<'a, P, O>(&self, path: P, options: O) -> Result<Response>
    where
        P: AsRef<Path>,
        O: Into<Option<&'a RequestOptions>>,
    {
        let payload = Payload::File(path.as_ref().to_path_buf());
        self.send(self.build_request(payload, options.into()))
    }

    fn build_request(&self, payload: Payload, options: Option<&RequestOptions>) -> Request {
        let token = options
            .and_then(|options| options.token.clone())
            .unwrap_or_else(|| self.token.clone());
        let language = options
            .and_then(|options| options.language.clone())
            .or_else(|| {
                if self.language.is_empty() {
                    None
                } else {
                    Some(self.language.clone())
                }
            });
        Request {
            payload,
            token,
            language,
        }
    }

    fn send(&self, request: Request) -> Result<Response> {
        let body = self.transport.submit(&request)?;
        let response = Response::from_json(&body)?;
        debug!(
            "Input analyzed, top intent: {:?}",
            response.intents().first()
        );
        Ok(response)
    }
}
