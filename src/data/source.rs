use async_trait::async_trait;
use serde_json::Value;

use crate::config::{COINGECKO, CoinGeckoApiConfig};
use crate::data::error::TransportError;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_HTTP_REQUESTS;

/// Query string as ordered key/value pairs
pub type Query<'a> = [(&'a str, String)];

/// "Fetch JSON over HTTPS". The fetchers only ever talk to this.
#[async_trait]
pub trait JsonSource: Send + Sync {
    // Either the decoded body OR the transport failure
    async fn get_json(&self, path: &str, query: &Query<'_>) -> Result<Value, TransportError>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// CoinGecko REST API over reqwest
pub struct CoinGeckoHttp {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoHttp {
    pub fn new(config: &CoinGeckoApiConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(COINGECKO.client.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl JsonSource for CoinGeckoHttp {
    fn signature(&self) -> &'static str {
        "CoinGecko API"
    }

    async fn get_json(&self, path: &str, query: &Query<'_>) -> Result<Value, TransportError> {
        let url = self.url_for(path);
        #[cfg(debug_assertions)]
        if PRINT_HTTP_REQUESTS {
            log::info!("GET {} {:?}", url, query);
        }

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        log::debug!("{} answered {} for {}", self.signature(), response.status(), url);
        let body = response.json::<Value>().await?;
        Ok(body)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory source for exercising the fetchers without a network.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct StubSource {
        responses: HashMap<String, Result<Value, String>>,
        requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl StubSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_json(mut self, path: &str, body: Value) -> Self {
            self.responses.insert(path.to_string(), Ok(body));
            self
        }

        pub fn with_failure(mut self, path: &str, message: &str) -> Self {
            self.responses
                .insert(path.to_string(), Err(message.to_string()));
            self
        }

        /// Every (path, query) seen so far, in call order
        pub fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl JsonSource for StubSource {
        fn signature(&self) -> &'static str {
            "Stub"
        }

        async fn get_json(&self, path: &str, query: &Query<'_>) -> Result<Value, TransportError> {
            self.requests.lock().unwrap().push((
                path.to_string(),
                query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            ));
            match self.responses.get(path) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(message)) => Err(TransportError::Unavailable(message.clone())),
                None => Err(TransportError::Unavailable(format!("HTTP 404 for {}", path))),
            }
        }
    }
}
