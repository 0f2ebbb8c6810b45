use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobfetch::config::Config;
use jobfetch::get_provider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobfetch=info")),
        )
        .init();

    let config = Config::parse();

    let provider = get_provider(&config.provider, config.search_params())
        .ok_or_else(|| anyhow::anyhow!("Unknown provider: {}", config.provider))?;

    let client = reqwest::Client::builder().build()?;
    let jobs = provider.collect(&client).await?;
    tracing::info!("Fetched {} jobs from '{}'", jobs.len(), provider.source());

    if config.json {
        println!("{}", serde_json::to_string_pretty(&jobs)?);
    } else {
        for job in &jobs {
            println!("{} | {} | {}", job.title, job.company, job.location);
        }
    }

    Ok(())
}
