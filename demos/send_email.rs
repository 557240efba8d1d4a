use std::io;

use infobip::InfobipClient;
use infobip::domain::email::SendEmailRequest;

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
    let from = std::env::var("IB_EMAIL_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "IB_EMAIL_FROM environment variable is required",
        )
    })?;
    let to = std::env::var("IB_EMAIL_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "IB_EMAIL_TO environment variable is required",
        )
    })?;

    let client = InfobipClient::new(base_url, api_key)?;
    let request = SendEmailRequest::new(from, to, "Infobip demo")
        .with_text("Hello from the infobip demo.");

    let response = client.email().send(request).await?;
    println!("bulk: {}", response.bulk_id);
    for message in response.messages {
        println!(
            "{} -> {} ({})",
            message.message_id, message.to, message.status.name
        );
    }

    Ok(())
}
