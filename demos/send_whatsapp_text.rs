use std::io;

use infobip::InfobipClient;
use infobip::domain::whatsapp::{TextContent, TextMessage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = std::env::var("IB_BASE_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "IB_BASE_URL environment variable is required",
        )
    })?;
    let api_key = std::env::var("IB_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "IB_API_KEY environment variable is required",
        )
    })?;
    let sender = std::env::var("IB_WHATSAPP_SENDER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "IB_WHATSAPP_SENDER environment variable is required",
        )
    })?;
    let phone = std::env::var("IB_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "IB_PHONE environment variable is required",
        )
    })?;
    let text =
        std::env::var("IB_MESSAGE").unwrap_or_else(|_| "Hello from the infobip demo.".to_owned());

    let client = InfobipClient::new(base_url, api_key)?;
    let message = TextMessage::new(sender, phone, TextContent::new(text));

    let response = client.whatsapp().send_text(message).await?;
    println!(
        "message: {}, status: {} ({})",
        response.message_id, response.status.name, response.status.description
    );

    Ok(())
}
