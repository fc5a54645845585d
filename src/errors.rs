use failure::Fail;

#[derive(Debug, Fail)]
pub enum RecastError {
    #[fail(display = "Request failed: {} ({})", status, body)]
    RequestFailed { status: String, body: String },
    #[fail(display = "Unable to reach the NLU API: {}", _0)]
    Transport(#[cause] reqwest::Error),
    #[fail(display = "Malformed payload: {}", _0)]
    MalformedPayload(String),
    #[fail(display = "No intent found")]
    NoIntentFound,
    #[fail(display = "Unable to read file '{}'", _0)]
    FileRead(String),
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
