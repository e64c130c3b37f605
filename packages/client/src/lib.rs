//! # fluentreq-client
//!
//! A small fluent-style blocking HTTP request builder.
//!
//! Requests are plain values: `get(url)` or [`Request::new`] start a
//! builder, chained calls set the body, headers, query parameters, timeout,
//! TLS-verification skip, and debug logging, and [`Request::send`]
//! dispatches. There is no shared client instance, so builders can be
//! constructed from any number of threads without coordination.
//!
//! Query parameters are carried as an ordered [`Params`] collection and
//! merged into the URL's existing raw query through
//! [`fluentreq_rawquery::merge_url_raw_query`]: fields already present in
//! the URL are overridden in place, new fields are appended.
//!
//! ```no_run
//! use fluentreq_client::{get, Params};
//!
//! let response = get("https://example.com/users")
//!     .query_params(Params::new().push("username", "helloshaohua"))
//!     .debug(true)
//!     .send()?;
//! let users: serde_json::Value = response.json()?;
//! # Ok::<(), fluentreq_client::Error>(())
//! ```

pub mod error;
pub mod params;
pub mod request;
pub mod scheme;

pub use error::Error;
pub use params::{Param, ParamKeys, Params};
pub use request::{Method, Request, Response};
pub use scheme::fixed_url;

/// Start a GET request builder.
pub fn get(url: impl Into<String>) -> Request {
    Request::get(url)
}

/// Start a POST request builder.
pub fn post(url: impl Into<String>) -> Request {
    Request::post(url)
}
