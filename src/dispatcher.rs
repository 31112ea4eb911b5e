use crate::error::ApiError;
use crate::gateway::SmsGateway;
use crate::types::{AlertResponse, AlertType, DispatchResult, TEST_MESSAGE};
use std::sync::Arc;
use tracing::{error, info};

/// Fans one alert out to a list of contacts, one provider call per contact.
pub struct AlertDispatcher {
    gateway: Arc<dyn SmsGateway>,
    from_number: String,
}

impl AlertDispatcher {
    pub fn new(gateway: Arc<dyn SmsGateway>, from_number: String) -> Self {
        Self {
            gateway,
            from_number,
        }
    }

    /// Send the templated message for `alert_type` to every contact, in
    /// input order. A failed send is recorded in the results and does not
    /// abort the remaining contacts; `results` always has one entry per
    /// input contact, in the same order.
    pub async fn dispatch(
        &self,
        contacts: &[String],
        alert_type: AlertType,
    ) -> Result<AlertResponse, ApiError> {
        if contacts.is_empty() {
            return Err(ApiError::bad_request("Contacts required"));
        }

        let body = alert_type.message_body();
        let mut results = Vec::with_capacity(contacts.len());

        for contact in contacts {
            match self.gateway.send(body, &self.from_number, contact).await {
                Ok(sid) => {
                    info!(to = %contact, sid = %sid, alert_type = %alert_type, "Message sent");
                    results.push(DispatchResult::sent(contact, sid));
                }
                Err(e) => {
                    error!(to = %contact, error = %e, alert_type = %alert_type, "Message failed");
                    results.push(DispatchResult::failed(contact, e.to_string()));
                }
            }
        }

        let total_sent = results.iter().filter(|r| r.success).count();
        let total_failed = results.len() - total_sent;

        Ok(AlertResponse {
            success: total_failed == 0,
            total_sent,
            total_failed,
            results,
        })
    }

    /// Send the fixed integration-test message to a single phone number.
    pub async fn send_test(&self, test_phone: &str) -> Result<String, ApiError> {
        match self
            .gateway
            .send(TEST_MESSAGE, &self.from_number, test_phone)
            .await
        {
            Ok(sid) => {
                info!(to = %test_phone, sid = %sid, "Test message sent");
                Ok(sid)
            }
            Err(e) => {
                error!(to = %test_phone, error = %e, "Test message failed");
                Err(ApiError::internal(e.to_string()))
            }
        }
    }
}
