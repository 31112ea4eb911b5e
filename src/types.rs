use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    TimerExpired,
    SosButton,
}

impl AlertType {
    /// Fixed message body sent for this alert type.
    pub fn message_body(&self) -> &'static str {
        match self {
            AlertType::TimerExpired => {
                "⚠️ SAFETY ALERT: I may be unreachable right now. This is an automated message from my Are You Alive app. Please try contacting me."
            }
            AlertType::SosButton => {
                "🆘 EMERGENCY ALERT: I need help right now. This urgent message was sent from my Are You Alive app. Please contact me immediately."
            }
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::TimerExpired => write!(f, "TIMER_EXPIRED"),
            AlertType::SosButton => write!(f, "SOS_BUTTON"),
        }
    }
}

impl std::str::FromStr for AlertType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TIMER_EXPIRED" => Ok(AlertType::TimerExpired),
            "SOS_BUTTON" => Ok(AlertType::SosButton),
            _ => Err(format!("Invalid alert type: {}", s)),
        }
    }
}

/// Message sent by the /test-alert route.
pub const TEST_MESSAGE: &str = "🧪 TEST: Are You Alive app integration working!";

// Request fields are defaulted so missing keys reach the handler, which
// turns them into 400 responses instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertRequest {
    #[serde(default)]
    pub contacts: Vec<String>,
    #[serde(rename = "type", default)]
    pub alert_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAlertRequest {
    #[serde(default)]
    pub test_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResult {
    pub to: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DispatchResult {
    pub fn sent(to: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            success: true,
            sid: Some(sid.into()),
            error: None,
        }
    }

    pub fn failed(to: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            success: false,
            sid: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertResponse {
    pub success: bool,
    pub total_sent: usize,
    pub total_failed: usize,
    pub results: Vec<DispatchResult>,
}
