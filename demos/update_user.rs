use std::io;

use iterable_api::{IterableClient, UserUpdate};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let email = std::env::var("ITERABLE_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ITERABLE_EMAIL environment variable is required",
        )
    })?;
    let plan = std::env::var("ITERABLE_PLAN").unwrap_or_else(|_| "free".to_owned());

    let client = IterableClient::from_env()?;
    let update = UserUpdate::by_email(email.clone())?.data_field("plan", plan);
    let response = client.users().update(&update).await?;
    println!("update: {:?}", response.code);

    let profile = client.users().get(&email).await?;
    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}
