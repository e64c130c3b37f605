use url::Url;

use crate::error::RawQueryError;
use crate::query::{encode_queries, parse_raw_query};

/// Base used to parse relative references; only the query component of the
/// result is ever read.
const RELATIVE_BASE: &str = "http://relative.invalid/";

fn parse_base_url(raw_url: &str) -> Result<Url, RawQueryError> {
    match Url::parse(raw_url) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(RELATIVE_BASE)?;
            base.join(raw_url).map_err(RawQueryError::from)
        }
        Err(err) => Err(err.into()),
    }
}

/// Merge an externally supplied raw query into the query already carried by
/// `raw_url`, returning the combined raw query string (no leading `?`).
///
/// External entries override base entries with the same field name in place;
/// fields the base never had are appended in external order. When the base
/// query holds duplicates of a field, the overwrite lands on its last
/// occurrence. An empty `raw_query` returns the base query untouched.
pub fn merge_url_raw_query(raw_url: &str, raw_query: &str) -> Result<String, RawQueryError> {
    let url = parse_base_url(raw_url)?;
    let base_query = url.query().unwrap_or("");

    if raw_query.is_empty() {
        return Ok(base_query.to_string());
    }

    let mut original = parse_raw_query(base_query);
    let external = parse_raw_query(raw_query);

    for item in external {
        let mut found = None;
        for (index, entry) in original.iter().enumerate() {
            if entry.field == item.field {
                found = Some(index);
            }
        }
        match found {
            Some(index) => original[index] = item,
            None => original.push(item),
        }
    }

    Ok(encode_queries(&original))
}
