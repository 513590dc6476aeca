use crate::{
    error::{Error, Result},
    parse_questions, QuestionSource,
};
use http_body_util::{BodyExt, Empty, LengthLimitError, Limited};
use hyper::{
    body::Bytes,
    header::{HeaderValue, ACCEPT},
    Request, Uri,
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use model::Question;
use url::Url;

pub const APPLICATION_JSON: &str = "application/json";

/// Largest response body we are willing to buffer.
pub const MAX_BODY_SIZE: usize = 1 << 20;

/// Builds the request target. With a proxy, the endpoint travels percent-encoded
/// in the `url` query parameter and the proxy wraps its reply in an envelope.
pub fn resolve_uri(endpoint: &str, proxy: Option<&str>) -> Result<Uri> {
    let endpoint = Url::parse(endpoint)?;
    let target = match proxy {
        Some(proxy) => Url::parse_with_params(proxy, [("url", endpoint.as_str())])?,
        None => endpoint,
    };
    let uri = String::from(target).parse()?;
    Ok(uri)
}

/// Retrieves question sets over HTTPS.
pub struct Fetcher {
    endpoint: Uri,
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
}

impl Fetcher {
    pub fn new(endpoint: &str, proxy: Option<&str>) -> Result<Self> {
        let endpoint = resolve_uri(endpoint, proxy)?;
        let https = HttpsConnectorBuilder::new().with_webpki_roots().https_only().enable_http1().build();
        let client = Client::builder(TokioExecutor::new()).build(https);
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    async fn get(&self) -> Result<Bytes> {
        let mut request = Request::new(Empty::new());
        request.headers_mut().append(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        *request.uri_mut() = self.endpoint.clone();

        let response = self.client.request(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = Limited::new(response.into_body(), MAX_BODY_SIZE).collect().await.map_err(|err| {
            if err.is::<LengthLimitError>() {
                Error::TooLarge
            } else {
                Error::FailedFetch
            }
        })?;
        Ok(body.to_bytes())
    }
}

impl QuestionSource for Fetcher {
    async fn fetch(&self) -> Result<Vec<Question>> {
        log::info!("Fetching questions from {}.", self.endpoint);
        let bytes = self.get().await?;
        log::debug!("Received {} bytes of question data.", bytes.len());
        parse_questions(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_direct_endpoint() {
        let uri = resolve_uri("https://api.jsonserve.com/Uw5CrX", None).unwrap();
        assert_eq!(uri.scheme_str(), Some("https"));
        assert_eq!(uri.host(), Some("api.jsonserve.com"));
        assert_eq!(uri.path(), "/Uw5CrX");
    }

    #[test]
    fn encodes_endpoint_for_proxy() {
        let uri = resolve_uri("https://api.jsonserve.com/Uw5CrX", Some("https://api.allorigins.win/get")).unwrap();
        assert_eq!(uri.host(), Some("api.allorigins.win"));
        assert_eq!(uri.path(), "/get");
        assert_eq!(uri.query(), Some("url=https%3A%2F%2Fapi.jsonserve.com%2FUw5CrX"));
    }

    #[test]
    fn rejects_invalid_endpoints() {
        assert_eq!(resolve_uri("not a url", None).err(), Some(Error::InvalidUri));
        assert_eq!(resolve_uri("https://example.com", Some("::")).err(), Some(Error::InvalidUri));
    }
}
