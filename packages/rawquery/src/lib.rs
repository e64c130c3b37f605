//! # fluentreq-rawquery
//!
//! Ordered raw-query handling for the fluentreq client.
//!
//! A "raw query" is the part of a URL after `?`, in `key=value&key=value`
//! form. This crate treats it as an ordered sequence of entries and never
//! percent-encodes or percent-decodes anything; callers that need escaping
//! must apply it before handing values in.
//!
//! ## Parsing and encoding
//!
//! ```
//! use fluentreq_rawquery::{encode_queries, parse_raw_query, Query};
//!
//! let entries = parse_raw_query("username=helloshaohua&sex=male");
//! assert_eq!(entries[0], Query::new("username", "helloshaohua"));
//! assert_eq!(encode_queries(&entries), "username=helloshaohua&sex=male");
//! ```
//!
//! ## Merging into a URL's existing query
//!
//! ```
//! use fluentreq_rawquery::merge_url_raw_query;
//!
//! let merged = merge_url_raw_query("https://example.com/?a=1&b=2", "b=3&c=4")?;
//! assert_eq!(merged, "a=1&b=3&c=4");
//! # Ok::<(), fluentreq_rawquery::RawQueryError>(())
//! ```

pub mod error;
pub mod merge;
pub mod query;

pub use error::RawQueryError;
pub use merge::merge_url_raw_query;
pub use query::{encode_queries, parse_raw_query, Query};
