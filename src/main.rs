use gamers_api::server::{self, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_logging("info");

    let config = ServerConfig::from_env()?;
    server::serve(config).await?;

    Ok(())
}
