use alert_relay::{
    create_router, AlertDispatcher, AppState, DisabledSmsGateway, RelayConfig, SmsGateway,
    TwilioSmsGateway,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let config = RelayConfig::from_env()?;

    info!("Starting alert-relay");
    info!("Bind address: {}", config.bind_addr);

    // Wire up the messaging gateway. Missing credentials are a warning, not
    // a startup failure; sends will fail at call time instead.
    let (gateway, from_number): (Arc<dyn SmsGateway>, String) = match config.sms {
        Some(sms) => {
            info!("SMS gateway configured (from: {})", sms.from_number);
            (
                Arc::new(TwilioSmsGateway::new(sms.account_sid, sms.auth_token)?),
                sms.from_number,
            )
        }
        None => {
            warn!("SMS gateway not configured (Twilio settings missing), sends will fail");
            (Arc::new(DisabledSmsGateway), String::new())
        }
    };

    let dispatcher = Arc::new(AlertDispatcher::new(gateway, from_number));

    let state = AppState { dispatcher };
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .context("Failed to bind to address")?;

    info!("Alert relay listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
