use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

use super::error::WebApiError;

/// Base URL for the public Steam web API.
const API_BASE_URL: &str = "https://api.steampowered.com";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for the
/// retry loop to stay responsive.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// One request parameter. Binary values are hex-encoded on the wire by
/// the default transport.
#[derive(Debug, Clone)]
pub enum ParamValue {
    Text(String),
    Blob(Vec<u8>),
}

pub type Params = Vec<(&'static str, ParamValue)>;

/// The narrow interface to the Steam web API.
///
/// One call per logical API method, addressed by interface name, method
/// name and version. Implementations must map non-2xx HTTP statuses to
/// [`WebApiError::Http`] so rate limiting stays detectable.
#[async_trait]
pub trait WebApiTransport: Send + Sync + 'static {
    async fn request(
        &self,
        method: Method,
        interface: &str,
        method_name: &str,
        version: u32,
        params: Params,
    ) -> Result<Value, WebApiError>;
}

/// Default transport backed by reqwest.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpApiTransport {
    client: Client,
    base_url: String,
}

impl HttpApiTransport {
    pub fn new() -> Result<Self, WebApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| WebApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (tests, regional proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl WebApiTransport for HttpApiTransport {
    async fn request(
        &self,
        method: Method,
        interface: &str,
        method_name: &str,
        version: u32,
        params: Params,
    ) -> Result<Value, WebApiError> {
        let url = format!(
            "{}/{}/{}/v{}/",
            self.base_url, interface, method_name, version
        );

        let form: Vec<(&str, String)> = params
            .into_iter()
            .map(|(name, value)| {
                let encoded = match value {
                    ParamValue::Text(s) => s,
                    ParamValue::Blob(bytes) => hex::encode(bytes),
                };
                (name, encoded)
            })
            .collect();

        let request = if method == Method::GET {
            self.client.get(&url).query(&form)
        } else {
            self.client.request(method, &url).form(&form)
        };

        let response = request
            .send()
            .await
            .map_err(|e| WebApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebApiError::Http(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WebApiError::Network(e.to_string()))
    }
}
