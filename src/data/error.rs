use thiserror::Error;

/// Failure of the "fetch JSON over HTTPS" capability itself.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, non-2xx status, or body read failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// Body arrived but is not the JSON shape we asked for
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Failure reported by a non-HTTP source
    #[error("{0}")]
    Unavailable(String),
}

/// Errors the fetchers hand back to the orchestrator. Both are fatal for the run.
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// Displays only the context; the cause is reachable through `source()`
    #[error("{context}")]
    ExternalService {
        context: String,
        #[source]
        source: TransportError,
    },
    #[error("no historical data returned for {asset_id} ({days} day window): {reason}")]
    EmptyData {
        asset_id: String,
        days: u32,
        reason: String,
    },
}

impl MarketDataError {
    pub fn external(context: impl Into<String>, source: impl Into<TransportError>) -> Self {
        MarketDataError::ExternalService {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn empty(asset_id: &str, days: u32, reason: impl Into<String>) -> Self {
        MarketDataError::EmptyData {
            asset_id: asset_id.to_string(),
            days,
            reason: reason.into(),
        }
    }
}
