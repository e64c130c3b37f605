use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use fluentreq_rawquery::merge_url_raw_query;

use crate::error::Error;
use crate::params::Params;

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => http::Method::GET,
            Method::POST => http::Method::POST,
            Method::PUT => http::Method::PUT,
            Method::DELETE => http::Method::DELETE,
            Method::PATCH => http::Method::PATCH,
            Method::HEAD => http::Method::HEAD,
            Method::OPTIONS => http::Method::OPTIONS,
        }
    }
}

/// A fluent request builder.
///
/// Every call site owns its builder; there is no shared client instance and
/// no lock. Chaining methods consume and return the builder, and
/// [`Request::send`] consumes it to dispatch the request.
///
/// # Example
///
/// ```no_run
/// use fluentreq_client::{Params, Request};
///
/// let response = Request::get("https://example.com/search?sex=male")
///     .query_params(Params::new().push("username", "helloshaohua").push("sex", "female"))
///     .debug(true)
///     .send()?;
/// assert!(response.is_success());
/// # Ok::<(), fluentreq_client::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Request {
    method: Method,
    url: String,
    body: Option<String>,
    headers: Vec<(String, String)>,
    query_params: Option<Params>,
    timeout: Option<Duration>,
    insecure_skip_verify: bool,
    debug: bool,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Raw request body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// JSON body from a serializable value; also sets the content type.
    pub fn json<T: Serialize>(self, body: &T) -> Result<Self, Error> {
        let rendered = serde_json::to_string(body)?;
        Ok(self.json_str(rendered))
    }

    /// Pre-rendered JSON body; also sets the content type.
    pub fn json_str(self, body: impl Into<String>) -> Self {
        self.header("content-type", "application/json").body(body)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Ordered query parameters, merged into the URL's existing raw query on
    /// send: same-named fields are overridden in place, new fields appended.
    pub fn query_params(mut self, params: Params) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Overall request timeout. Without one the request can wait
    /// indefinitely.
    pub fn timeout(mut self, wait: Duration) -> Self {
        self.timeout = Some(wait);
        self
    }

    /// Skip TLS certificate verification.
    pub fn insecure_skip_verify(mut self, skip: bool) -> Self {
        self.insecure_skip_verify = skip;
        self
    }

    /// Log the filled URL before dispatch.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn fill_url(&self) -> Result<Url, Error> {
        let mut url = Url::parse(&self.url)?;

        if let Some(params) = &self.query_params {
            if !params.is_empty() {
                let merged = merge_url_raw_query(&self.url, &params.to_raw_query())?;
                if merged.is_empty() {
                    url.set_query(None);
                } else {
                    url.set_query(Some(&merged));
                }
            }
        }

        Ok(url)
    }

    /// Dispatch the request and wait for the response.
    pub fn send(self) -> Result<Response, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.insecure_skip_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build()?;

        let url = self.fill_url()?;

        if self.debug {
            debug!(url = %url, method = ?self.method, "filled url");
        }

        let mut request = client.request(self.method.into(), url);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = self.body {
            request = request.body(body);
        }

        let response = request.send()?;
        Response::from_reqwest(response)
    }
}

/// Response from a dispatched request, with the body already read.
#[derive(Debug)]
pub struct Response {
    status: u16,
    status_text: String,
    headers: HashMap<String, String>,
    body: String,
}

impl Response {
    fn from_reqwest(response: reqwest::blocking::Response) -> Result<Self, Error> {
        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.to_string(), v.to_string());
            }
        }

        let body = response.text()?;

        Ok(Self {
            status,
            status_text,
            headers,
            body,
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body as text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(Error::from)
    }

    /// Check if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response status indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response status indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_url_merges_params_with_override() {
        let request = Request::get("https://example.com/search?q=hello+world&sex=male")
            .query_params(Params::new().push("sex", "female").push("age", 18));
        let url = request.fill_url().unwrap();
        assert_eq!(url.query(), Some("q=hello+world&sex=female&age=18"));
    }

    #[test]
    fn fill_url_without_params_keeps_url() {
        let request = Request::get("https://example.com/search?q=hello");
        let url = request.fill_url().unwrap();
        assert_eq!(url.as_str(), "https://example.com/search?q=hello");
    }

    #[test]
    fn fill_url_empty_params_keeps_url() {
        let request = Request::get("https://example.com/search").query_params(Params::new());
        let url = request.fill_url().unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn fill_url_rejects_malformed_url() {
        let err = Request::get("http://[bad").fill_url().unwrap_err();
        assert!(matches!(err, Error::UrlParse(_)));
    }

    #[test]
    fn builder_chain_accumulates_headers() {
        let request = Request::post("https://example.com/users")
            .header("x-one", "1")
            .json_str(r#"{"username":"user1"}"#);
        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.headers[1].0, "content-type");
        assert_eq!(request.body.as_deref(), Some(r#"{"username":"user1"}"#));
    }

    #[test]
    fn method_bridges_to_http_method() {
        assert_eq!(http::Method::from(Method::GET), http::Method::GET);
        assert_eq!(http::Method::from(Method::DELETE), http::Method::DELETE);
    }
}
