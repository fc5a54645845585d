use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::errors::*;
use crate::models::{ResponseModel, SentenceModel};
use crate::transport::{Request, Transport};

pub fn response_fixture(name: &str) -> String {
    let path = Path::new("data")
        .join("tests")
        .join("responses")
        .join(format!("{}.json", name));
    fs::read_to_string(path).unwrap()
}

/// First sentence of a response fixture
pub fn sentence_model(name: &str) -> SentenceModel {
    let model: ResponseModel = serde_json::from_str(&response_fixture(name)).unwrap();
    model.results.sentences.into_iter().next().unwrap()
}

pub struct MockedTransport {
    mocked_body: String,
    mocked_status: Option<String>,
    requests: Mutex<Vec<Request>>,
}

impl MockedTransport {
    pub fn returning<S: Into<String>>(body: S) -> Self {
        Self {
            mocked_body: body.into(),
            mocked_status: None,
            requests: Mutex::new(vec![]),
        }
    }

    pub fn failing<S: Into<String>, B: Into<String>>(status: S, body: B) -> Self {
        Self {
            mocked_body: body.into(),
            mocked_status: Some(status.into()),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockedTransport {
    fn submit(&self, request: &Request) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.mocked_status {
            Some(status) => Err(RecastError::RequestFailed {
                status: status.clone(),
                body: self.mocked_body.clone(),
            }
            .into()),
            None => Ok(self.mocked_body.clone()),
        }
    }
}
