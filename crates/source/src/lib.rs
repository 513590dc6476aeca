pub mod error;
mod fetcher;

use core::future::Future;
use model::{Question, Quiz};
use serde_json::Value;

pub use error::{Error, Result};
pub use fetcher::{resolve_uri, Fetcher, APPLICATION_JSON, MAX_BODY_SIZE};

const QUESTIONS: &str = "questions";
const CONTENTS: &str = "contents";

/// Anything that can asynchronously produce a question set.
pub trait QuestionSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Question>>> + Send;
}

/// A question set known ahead of time.
#[derive(Clone, Default)]
pub struct Fixed(pub Vec<Question>);

impl QuestionSource for Fixed {
    async fn fetch(&self) -> Result<Vec<Question>> {
        Ok(self.0.clone())
    }
}

/// Proxies that work around cross-origin restrictions reply with
/// `{ "contents": "<payload as text>" }`. Peel that layer off if present.
fn unwrap_envelope(document: Value) -> Result<Value> {
    match document {
        Value::Object(mut map) if !map.contains_key(QUESTIONS) && map.contains_key(CONTENTS) => {
            let Some(Value::String(text)) = map.remove(CONTENTS) else {
                return Err(Error::Envelope);
            };
            Ok(serde_json::from_str(&text)?)
        }
        other => Ok(other),
    }
}

/// Parses a question set, either bare or wrapped in a proxy envelope.
pub fn parse_questions(bytes: &[u8]) -> Result<Vec<Question>> {
    let document = unwrap_envelope(serde_json::from_slice(bytes)?)?;
    if !document.get(QUESTIONS).is_some_and(Value::is_array) {
        return Err(Error::MissingQuestions);
    }
    let quiz: Quiz = serde_json::from_value(document)?;
    Ok(quiz.into())
}
