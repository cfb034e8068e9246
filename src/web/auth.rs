use rand::rngs::OsRng;
use rand::RngCore;
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use crate::steamid::SteamId;

use super::error::WebApiError;
use super::transport::{ParamValue, Params, WebApiTransport};

/// Length of the random CSRF session id in bytes (hex doubles it).
const SESSION_ID_LEN: usize = 12;

/// A browser-usable web session.
///
/// `session_id` is client-generated CSRF material, independent per
/// device and not derived from anything the server sent. `cookies` holds
/// the `sessionid` cookie first, then `steamLogin` and `steamLoginSecure`
/// in that order, as far as the response carried them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSession {
    pub session_id: String,
    pub cookies: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AuthenticateUserResponse {
    #[serde(default)]
    authenticateuser: Option<AuthenticateUserTokens>,
}

#[derive(Debug, Deserialize, Default)]
struct AuthenticateUserTokens {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    tokensecure: Option<String>,
}

/// Issues the single authenticated web API call of the handshake.
pub struct WebAuthClient<T> {
    transport: T,
}

impl<T: WebApiTransport> WebAuthClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Exchange an encrypted nonce and wrapped session key for a web
    /// session via `ISteamUserAuth/AuthenticateUser`.
    ///
    /// Fails with [`WebApiError::MalformedResponse`] unless the response
    /// carries at least one of the two token fields.
    pub async fn authenticate(
        &self,
        steam_id: SteamId,
        encrypted_nonce: &[u8],
        encrypted_session_key: &[u8],
    ) -> Result<WebSession, WebApiError> {
        let params: Params = vec![
            ("steamid", ParamValue::Text(steam_id.to_string())),
            ("sessionkey", ParamValue::Blob(encrypted_session_key.to_vec())),
            ("encrypted_loginkey", ParamValue::Blob(encrypted_nonce.to_vec())),
        ];

        let value = self
            .transport
            .request(Method::POST, "ISteamUserAuth", "AuthenticateUser", 1, params)
            .await?;

        let parsed: AuthenticateUserResponse =
            serde_json::from_value(value).map_err(|_| WebApiError::MalformedResponse)?;
        let tokens = parsed
            .authenticateuser
            .ok_or(WebApiError::MalformedResponse)?;
        if tokens.token.is_none() && tokens.tokensecure.is_none() {
            return Err(WebApiError::MalformedResponse);
        }

        let mut id_bytes = [0u8; SESSION_ID_LEN];
        OsRng.fill_bytes(&mut id_bytes);
        let session_id = hex::encode(id_bytes);

        let mut cookies = vec![format!("sessionid={}", session_id)];
        if let Some(token) = tokens.token {
            cookies.push(format!("steamLogin={}", token));
        }
        if let Some(tokensecure) = tokens.tokensecure {
            cookies.push(format!("steamLoginSecure={}", tokensecure));
        }

        debug!(cookie_count = cookies.len(), "web authentication succeeded");
        Ok(WebSession {
            session_id,
            cookies,
        })
    }
}
