#[derive(thiserror::Error, Debug)]
pub enum RawQueryError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
