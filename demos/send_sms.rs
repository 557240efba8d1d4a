use std::io;

use infobip::InfobipClient;
use infobip::domain::sms::{SendSmsRequest, SmsMessage};

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
    let phone = std::env::var("IB_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "IB_PHONE environment variable is required",
        )
    })?;
    let sender = std::env::var("IB_SENDER").unwrap_or_else(|_| "InfoSMS".to_owned());
    let text =
        std::env::var("IB_MESSAGE").unwrap_or_else(|_| "Hello from the infobip demo.".to_owned());

    let client = InfobipClient::new(base_url, api_key)?;
    let request = SendSmsRequest::new(vec![SmsMessage::new([phone], text).with_sender(sender)]);

    let response = client.sms().send(request).await?;
    println!("bulk: {}", response.bulk_id);
    for message in response.messages {
        println!(
            "{} -> {} ({})",
            message.message_id, message.to, message.status.name
        );
    }

    Ok(())
}
