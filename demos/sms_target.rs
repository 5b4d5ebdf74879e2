use std::io;

use iterable_api::{IterableClient, TargetMessage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let campaign_id: i64 = std::env::var("ITERABLE_CAMPAIGN_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "ITERABLE_CAMPAIGN_ID environment variable is required",
            )
        })?
        .parse()?;
    let email = std::env::var("ITERABLE_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ITERABLE_EMAIL environment variable is required",
        )
    })?;

    let client = IterableClient::from_env()?;
    let target = TargetMessage::to_email(campaign_id, email)?;

    let response = client.sms().target(&target).await?;
    println!(
        "code: {}, msg: {:?}, params: {:?}",
        response.code.as_str(),
        response.msg,
        response.params
    );

    Ok(())
}
