use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("failure reading provider response {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure decoding provider response: {source}")]
    DecodeError {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid encoded polyline at byte {0}: {1}")]
    InvalidPolyline(usize, String),
}
