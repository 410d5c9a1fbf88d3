#[tokio::main]
async fn main() -> anyhow::Result<()> {
    powercast_server::start().await
}
