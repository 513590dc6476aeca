use core::fmt::{self, Display};
use serde_json::error::Category;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidUri,
    /// HTTP fetch error.
    FailedFetch,
    /// The provider answered with a non-success status code.
    Status(u16),
    /// The response body exceeded the size limit.
    TooLarge,
    /// JSON syntax error detected.
    Syntax,
    /// Unexpected JSON data types encountered.
    Data,
    /// The proxy envelope did not carry the payload as text.
    Envelope,
    /// The payload has no `questions` array.
    MissingQuestions,
}

impl From<hyper_util::client::legacy::Error> for Error {
    fn from(_: hyper_util::client::legacy::Error) -> Self {
        Self::FailedFetch
    }
}

impl From<hyper::http::uri::InvalidUri> for Error {
    fn from(_: hyper::http::uri::InvalidUri) -> Self {
        Self::InvalidUri
    }
}

impl From<url::ParseError> for Error {
    fn from(_: url::ParseError) -> Self {
        Self::InvalidUri
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Data,
            Category::Syntax | Category::Eof => Self::Syntax,
            Category::Io => Self::FailedFetch,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "The question provider responded with status {code}."),
            Self::InvalidUri => f.write_str("Invalid URI."),
            Self::FailedFetch => f.write_str("Failed to fetch the JSON data."),
            Self::TooLarge => f.write_str("The question set is too large."),
            Self::Syntax => f.write_str("Syntax error in JSON detected."),
            Self::Data => f.write_str("Unexpected data types in JSON detected."),
            Self::Envelope => f.write_str("The proxy envelope does not contain the question set."),
            Self::MissingQuestions => f.write_str("The question set has no questions array."),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
