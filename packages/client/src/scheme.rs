use url::Url;

use crate::error::Error;

/// Parse `raw_url`, supplying an `http` scheme when it carries none.
///
/// Bare authorities like `127.0.0.1:9200` and scheme-less references like
/// `://localhost:8000/users` both come back as `http://...`. Anything that
/// already starts with `http` is parsed as-is.
pub fn fixed_url(raw_url: &str) -> Result<Url, Error> {
    let candidate = if raw_url.starts_with("http") {
        raw_url.to_string()
    } else if raw_url.starts_with("://") {
        format!("http{raw_url}")
    } else {
        format!("http://{raw_url}")
    };

    Url::parse(&candidate).map_err(Error::from)
}
