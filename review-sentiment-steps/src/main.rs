mod analysis_step;
mod utils;

use {
    std::{fs, path::{Path, PathBuf}, process::ExitCode},
    clap::Parser,
    tracing::{info, warn, error},
    review_sentiment_core::{
        config::Config,
        source::SourceRef,
    },
    crate::{
        analysis_step::analysis_step,
        utils::init_logging,
    },
};

/// Sentiment analysis of scraped Amazon reviews and YouTube comments.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Amazon product or YouTube video url the records were scraped from.
    url: String,

    /// Scraper output to analyze. Defaults to the scraper's file for this url.
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the analysis report as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let (config, fallback_reason) = match &args.config {
        Some(path) => match Config::load_from(path) {
            Ok(v) => (v, None),
            Err(err) => {
                eprintln!("invalid config: {}", err);
                return ExitCode::from(2);
            }
        },
        None => match Config::load() {
            Ok(v) => (v, None),
            Err(err) => (Config::default(), Some(err)),
        },
    };
    init_logging(config.logging.json);

    if let Some(reason) = fallback_reason {
        warn!("failed to read config, using defaults: {}", reason);
    }

    let source = match SourceRef::parse(&args.url) {
        Ok(v) => v,
        Err(err) => {
            error!("rejected input: {}", err);
            eprintln!("Invalid URL. Please enter a valid Amazon product or YouTube video url ({}).", err);
            return ExitCode::from(2);
        }
    };

    let input = args.input.clone()
        .unwrap_or_else(|| source.scraped_csv_path(&config.pipeline.scrape_dir()));

    match run(&config, &source, &input, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("analysis failed: {:?}", err);
            eprintln!("Failed to process the data. Please try again.");
            ExitCode::from(1)
        }
    }
}

async fn run(config: &Config, source: &SourceRef, input: &Path, args: &Args) -> anyhow::Result<()> {
    let report = analysis_step(config, source, input).await?;
    info!(
        "{} source {}: {} records classified",
        report.platform(),
        report.source_id(),
        report.summary().total(),
    );

    if let Some(path) = &args.report {
        fs::write(path, report.to_json()?)?;
        info!("report saved to {}", path.display());
    }

    println!("{}", serde_json::to_string(report.summary().counts())?);
    Ok(())
}
