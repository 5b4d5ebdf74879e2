use iterable_api::IterableClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = IterableClient::from_env()?;

    for list in client.lists().get().await? {
        println!("{}\t{}", list["id"], list["name"]);
    }

    Ok(())
}
