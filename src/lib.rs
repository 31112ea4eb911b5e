pub mod config;
pub mod dispatcher;
pub mod error;
pub mod gateway;
pub mod routes;
pub mod types;

// Re-export commonly used types
pub use config::{RelayConfig, SmsConfig};
pub use dispatcher::AlertDispatcher;
pub use error::ApiError;
pub use gateway::{DisabledSmsGateway, SmsGateway, TwilioSmsGateway};
pub use routes::{create_router, AppState};
pub use types::*;
