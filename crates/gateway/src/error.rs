use thiserror::Error;

/// Gateway-call failure taxonomy.
///
/// `Api` is a backend rejection (surfaced to the user, not fatal);
/// `Network` is a transport failure (retryable by user action);
/// `Decode` is a 2xx body that did not match the expected shape.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("response decode error: {0}")]
    Decode(#[source] reqwest::Error),
}

impl GatewayError {
    /// 401 and 403 are treated uniformly as "re-authenticate"; the shell
    /// routes them through the guard's unauthenticated path.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }
}
