//! Storage event handler binary.
//!
//! The hosting platform invokes this once per notification with the raw
//! notification JSON on stdin. A non-zero exit tells the platform the
//! invocation failed and the notification should be redelivered.

use tokio::io::AsyncReadExt;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lesscast_handler::EventHandler;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("lesscast=info".parse().unwrap())
        .add_directive("aws_config=warn".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting lesscast-handler");

    let handler = match EventHandler::from_env().await {
        Ok(h) => h,
        Err(e) => {
            error!("Failed to create event handler: {}", e);
            std::process::exit(1);
        }
    };

    let mut payload = String::new();
    if let Err(e) = tokio::io::stdin().read_to_string(&mut payload).await {
        error!("Failed to read notification from stdin: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = handler.handle_notification(&payload).await {
        error!(retryable = e.is_retryable(), "Handler error: {}", e);
        std::process::exit(1);
    }

    info!("Complete");
}
