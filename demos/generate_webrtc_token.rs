use std::io;

use infobip::InfobipClient;
use infobip::domain::webrtc::GenerateTokenRequest;

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
    let identity = std::env::var("IB_IDENTITY").unwrap_or_else(|_| "demo-user".to_owned());

    let client = InfobipClient::new(base_url, api_key)?;
    let token = client
        .webrtc()
        .generate_token(GenerateTokenRequest::new(identity))
        .await?;
    println!("token: {}, expires: {}", token.token, token.expiration_time);

    Ok(())
}
