use clap::Parser;
use research_digest::{
    build_prompt, deliver, render, EnvCredentials, FeedAggregator, RankingClient, Result, RunConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "research-digest")]
#[command(about = "Scan RSS feeds and deliver a personalized research digest")]
struct Args {
    /// Path to the run configuration file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let args = Args::parse();

    match run(&args).await {
        Ok(()) => {
            info!("Digest generation complete!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    info!("Starting Research Digest Generator...");

    let config = RunConfig::load(&args.config)?;
    info!("Configuration loaded for: {}", config.email);

    let credentials = EnvCredentials;

    let aggregator = FeedAggregator::new();
    let papers = aggregator.aggregate(&config.feeds).await?;
    info!(
        "Fetched {} papers from {} sources",
        papers.len(),
        config.feeds.len()
    );

    info!("Analyzing papers with AI...");
    let ranking = RankingClient::new(&credentials)?;
    let prompt = build_prompt(&papers, &config.research_interests, config.max_papers);
    let digest = ranking.rank(&prompt).await?;

    let html = render(&digest);

    deliver(&html, &config, &credentials)?;

    Ok(())
}
