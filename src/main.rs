#[tokio::main]
async fn main() -> std::io::Result<()> {
    boss_rush_client::run_with_config().await
}
