use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;
use url::Url;

const DEFAULT_API_BASE: &str = "https://api.twilio.com/";

/// Trait for outbound message submission to the messaging provider.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Submit one message, returning the provider-assigned message sid.
    async fn send(&self, body: &str, from: &str, to: &str) -> Result<String>;
}

/// Client for the Twilio Messages REST API.
pub struct TwilioSmsGateway {
    base: Url,
    account_sid: String,
    auth_token: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct MessageResource {
    sid: String,
}

#[derive(Deserialize)]
struct ProviderError {
    message: Option<String>,
}

impl TwilioSmsGateway {
    pub fn new(account_sid: String, auth_token: String) -> Result<Self> {
        Self::with_base(DEFAULT_API_BASE, account_sid, auth_token)
    }

    pub fn with_base(base: &str, account_sid: String, auth_token: String) -> Result<Self> {
        let base = Url::parse(base).context("invalid messaging API base URL")?;
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            base,
            account_sid,
            auth_token,
            client,
        })
    }

    fn messages_endpoint(&self) -> Result<Url> {
        self.base
            .join(&format!(
                "2010-04-01/Accounts/{}/Messages.json",
                self.account_sid
            ))
            .context("invalid messages endpoint")
    }
}

#[async_trait]
impl SmsGateway for TwilioSmsGateway {
    #[instrument(skip_all, fields(to = to))]
    async fn send(&self, body: &str, from: &str, to: &str) -> Result<String> {
        let url = self.messages_endpoint()?;
        let params = [("To", to), ("From", from), ("Body", body)];

        let resp = self
            .client
            .post(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .context("message send request failed")?;

        let status = resp.status();
        if !status.is_success() {
            // Provider error payloads carry a human-readable message
            let message = resp
                .json::<ProviderError>()
                .await
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("gateway returned status {}", status));
            anyhow::bail!(message);
        }

        let message: MessageResource = resp
            .json()
            .await
            .context("invalid gateway response body")?;
        Ok(message.sid)
    }
}

/// Stand-in used when provider credentials are missing at startup. The
/// service still comes up; every send fails at call time.
pub struct DisabledSmsGateway;

#[async_trait]
impl SmsGateway for DisabledSmsGateway {
    async fn send(&self, _body: &str, _from: &str, _to: &str) -> Result<String> {
        anyhow::bail!("SMS gateway not configured (missing provider credentials)")
    }
}
