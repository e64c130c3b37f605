use fluentreq_rawquery::RawQueryError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("query merge error: {0}")]
    RawQuery(#[from] RawQueryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
