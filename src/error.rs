use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network failure or an undecodable body, surfaced by the transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {0}")]
    Status(StatusCode),

    #[error("response body has no '{0}' listings array")]
    MissingListings(&'static str),
}
