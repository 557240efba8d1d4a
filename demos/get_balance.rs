use std::io;

use infobip::InfobipClient;

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

    let client = InfobipClient::new(base_url, api_key)?;
    let balance = client.account().get_balance().await?;
    println!("balance: {} {}", balance.balance, balance.currency);

    let free = client.account().get_free_messages_count().await?;
    println!("free messages: {}", free.free_messages);

    Ok(())
}
