use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lob_core::FeatureRecord;
use lob_runner::persistence::{OutputDir, read_json};
use lob_runner::{AnalysisConfig, Dataset, DatasetSummary, generate_dataset, run_analysis};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(
    name = "lob-runner",
    about = "Synthetic order-book generation and time-series model analysis",
    version
)]
struct Cli {
    /// JSON configuration file; defaults apply when omitted
    #[arg(long, short, global = true, env = "LOB_RUNNER_CONFIG")]
    config: Option<PathBuf>,
    /// Directory receiving every JSON artifact
    #[arg(long, short, global = true, env = "LOB_RUNNER_OUTPUT_DIR", default_value = "output")]
    output_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate snapshots and persist them with their features
    Generate(SimulationArgs),
    /// Run the model analysis on a saved features file
    Analyze(AnalyzeArgs),
    /// Generate a dataset and analyse it
    Run(SimulationArgs),
}

#[derive(Args, Debug, Clone)]
struct SimulationArgs {
    #[arg(long)]
    num_records: Option<usize>,
    #[arg(long)]
    symbol: Option<String>,
    #[arg(long, env = "LOB_RUNNER_SEED")]
    seed: Option<u64>,
}

impl SimulationArgs {
    fn apply(&self, config: &mut AnalysisConfig) {
        if let Some(n) = self.num_records {
            config.simulation.num_records = n;
        }
        if let Some(symbol) = &self.symbol {
            config.simulation.symbol = symbol.clone();
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
    }
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    /// Features file written by `generate`
    #[arg(long)]
    features: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            AnalysisConfig::from_file(path)?
        }
        None => AnalysisConfig::default(),
    };

    match &cli.command {
        Commands::Generate(args) => {
            args.apply(&mut config);
            config.validate()?;
            let output = OutputDir::create(&cli.output_dir)?;
            let dataset = simulate(&config)?;
            output.write_dataset(&dataset, config.output.persist_limit)?;
            DatasetSummary::from_features(Some(dataset.snapshots.len()), &dataset.features).log();
        }
        Commands::Analyze(args) => {
            config.validate()?;
            let output = OutputDir::create(&cli.output_dir)?;
            let features: Vec<FeatureRecord> = read_json(&args.features)
                .with_context(|| format!("loading features from {}", args.features.display()))?;
            let summary = DatasetSummary::from_features(None, &features);
            summary.log();
            let result = run_analysis(&features, &config)?;
            output.write_results(&result, &summary)?;
        }
        Commands::Run(args) => {
            args.apply(&mut config);
            config.validate()?;
            let output = OutputDir::create(&cli.output_dir)?;
            let dataset = simulate(&config)?;
            output.write_dataset(&dataset, config.output.persist_limit)?;
            let summary =
                DatasetSummary::from_features(Some(dataset.snapshots.len()), &dataset.features);
            summary.log();
            let result = run_analysis(&dataset.features, &config)?;
            output.write_results(&result, &summary)?;
        }
    }

    log::info!("Done. Artifacts in {}", cli.output_dir.display());
    Ok(())
}

fn simulate(config: &AnalysisConfig) -> Result<Dataset> {
    let mut rng = match config.simulation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dataset = generate_dataset(config, &mut rng).context("generating dataset")?;
    Ok(dataset)
}
