use std::io;

use infobip::InfobipClient;
use infobip::domain::account::ApiKeyFilter;

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
    let filter = ApiKeyFilter {
        enable: Some(true),
        ..Default::default()
    };

    let page = client.account().get_api_keys(filter).await?;
    for key in page.api_keys {
        println!("{} {} enabled={}", key.id, key.name, key.enabled);
    }
    println!(
        "page {} of {} ({} total)",
        page.paging.page, page.paging.total_pages, page.paging.total_count
    );

    Ok(())
}
