use std::fs;
use std::path::Path;
use std::time::Duration;

use failure::ResultExt;
use log::{debug, info};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::AUTHORIZATION;
use reqwest::Url;

use super::{Payload, Request, Transport};
use crate::errors::*;

pub const DEFAULT_ENDPOINT: &str = "https://api.recast.ai/v1/request";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct TransportConfig {
    pub endpoint: String,
    /// `None` disables the timeout
    pub timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|_| format!("Invalid API endpoint '{}'", config.endpoint))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .with_context(|_| "Cannot build HTTP client")?;
        info!("HTTP transport targeting {}", endpoint);
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_request(&self, request: &Request) -> Result<RequestBuilder> {
        let builder = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Token {}", request.token));
        let language = request.language.as_ref().map(|language| language.as_str());
        Ok(match &request.payload {
            Payload::Text(text) => builder.form(&text_form(text, language)),
            Payload::File(path) => builder.multipart(voice_form(path, language)?),
        })
    }
}

impl Transport for HttpTransport {
    fn submit(&self, request: &Request) -> Result<String> {
        match &request.payload {
            Payload::Text(_) => debug!("Sending text request to {}", self.endpoint),
            Payload::File(path) => debug!(
                "Sending voice file {:?} to {}",
                path.as_path(),
                self.endpoint
            ),
        }
        let response = self
            .build_request(request)?
            .send()
            .map_err(RecastError::Transport)?;
        let status = response.status();
        let body = response
            .text()
            .map_err(RecastError::Transport)?;
        if !status.is_success() {
            debug!("Request rejected with status {}", status);
            return Err(RecastError::RequestFailed {
                status: status.to_string(),
                body,
            }
            .into());
        }
        Ok(body)
    }
}

fn text_form<'a>(text: &'a str, language: Option<&'a str>) -> Vec<(&'static str, &'a str)> {
    let mut form = Vec::with_capacity(2);
    if let Some(language) = language {
        form.push(("language", language));
    }
    form.push(("text", text));
    form
}

fn voice_form(path: &Path, language: Option<&str>) -> Result<Form> {
    let content = fs::read(path)
        .map_err(|e| RecastError::FileRead(format!("{}: {}", path.display(), e)))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "voice".to_string());
    let form = Form::new().part("voice", Part::bytes(content).file_name(file_name));
    Ok(match language {
        Some(language) => form.text("language", language.to_string()),
        None => form,
    })
}
