//! HTTP client for the Twilio Messages API.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use super::{MessageReceipt, Messenger, ProviderError};

/// Base URL for the Twilio REST API.
pub const API_BASE_URL: &str = "https://api.twilio.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Twilio REST client authenticated with an account SID and auth token.
#[derive(Clone)]
pub struct TwilioClient {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    base_url: String,
}

/// Successful message creation response (subset).
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
    status: Option<String>,
}

/// Twilio error body, e.g.
/// `{"code": 21211, "message": "The 'To' number is not valid.", "status": 400}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<i64>,
    message: String,
}

impl TwilioClient {
    /// Creates a client for the given account.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Request {
                message: format!("failed to build HTTP client: {e}"),
                source: e,
            })?;

        Ok(Self {
            client,
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the API base URL (test servers, regional edges).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url.trim_end_matches('/'),
            self.account_sid
        )
    }
}

impl fmt::Debug for TwilioClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioClient")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Messenger for TwilioClient {
    async fn send(
        &self,
        from: &str,
        to: &str,
        body: &str,
    ) -> Result<MessageReceipt, ProviderError> {
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("From", from), ("To", to), ("Body", body)])
            .send()
            .await
            .map_err(|e| ProviderError::Request {
                message: format!("HTTP request failed: {e}"),
                source: e,
            })?;

        let status = response.status();
        debug!("Twilio responded {status} for message to {to}");

        if status.is_success() {
            let resource: MessageResource =
                response.json().await.map_err(|e| ProviderError::Request {
                    message: format!("failed to parse message resource: {e}"),
                    source: e,
                })?;
            return Ok(MessageReceipt {
                sid: resource.sid,
                status: resource.status,
            });
        }

        let text = response.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => (body.code, body.message),
            Err(_) => {
                warn!("Unrecognized Twilio error body: {text}");
                (None, text)
            }
        };

        Err(ProviderError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}
