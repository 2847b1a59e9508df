//! Shot Charts CLI
//!
//! CSV shot log → corner / non-corner three / two-pointer efficiency charts

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "shot_charts")]
#[command(about = "Compare two teams' shooting efficiency by court zone", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(clap::Args)]
struct AnalysisArgs {
    /// Input CSV file path (columns: team, x, y, fgmade)
    #[arg(long)]
    csv: PathBuf,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Configuration preset (reference, strict); overrides SHOT_ZONE_PROFILE
    #[arg(long)]
    profile: Option<String>,

    /// First team identifier
    #[arg(long)]
    team_a: Option<String>,

    /// Second team identifier
    #[arg(long)]
    team_b: Option<String>,

    /// Fail on the first malformed row instead of skipping it
    #[arg(long, default_value = "false")]
    strict: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build the six FG% / eFG% comparison charts
    Compare {
        #[command(flatten)]
        args: AnalysisArgs,

        /// Write chart requests to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,

        /// Skip charts for zones where a team has no attempts
        #[arg(long, default_value = "false")]
        skip_empty: bool,

        /// Do not print charts to the terminal
        #[arg(long, default_value = "false")]
        quiet: bool,

        /// Output run metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Print per-zone attempt counts for both teams
    Zones {
        #[command(flatten)]
        args: AnalysisArgs,
    },
}

#[cfg(feature = "cli")]
impl AnalysisArgs {
    fn load_config(&self) -> Result<shot_core::AnalysisConfig> {
        use anyhow::Context;
        use shot_core::AnalysisConfig;

        let mut config = match (&self.config, &self.profile) {
            (Some(path), _) => AnalysisConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            (None, Some(profile)) => AnalysisConfig::from_profile(profile)?,
            (None, None) => AnalysisConfig::from_env_or_default(),
        };
        if let Some(team) = &self.team_a {
            config.team_a = team.clone();
        }
        if let Some(team) = &self.team_b {
            config.team_b = team.clone();
        }
        Ok(config)
    }

    fn mode(&self) -> shot_charts::LoadMode {
        if self.strict {
            shot_charts::LoadMode::Strict
        } else {
            shot_charts::LoadMode::Lenient
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use shot_charts::{JsonFileSink, RunOptions, TableSink};
    use shot_core::report::render_all;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            args,
            json,
            skip_empty,
            quiet,
            metadata,
        } => {
            let config = args.load_config()?;
            println!("🏀 Comparing shot zones...");
            println!("   Input:  {}", args.csv.display());
            println!("   Teams:  {} vs {}", config.team_a, config.team_b);

            let options = RunOptions {
                mode: args.mode(),
                skip_undefined: skip_empty,
            };
            let outcome = shot_charts::run_comparison(&args.csv, &config, options)?;

            if !quiet {
                render_all(&mut TableSink::stdout(), &outcome.requests)?;
            }

            if let Some(path) = json {
                let mut sink = JsonFileSink::new(path);
                render_all(&mut sink, &outcome.requests)?;
                println!("\n📄 Chart requests saved to: {}", sink.path().display());
            }

            print_metadata(&outcome.metadata);

            if let Some(path) = metadata {
                outcome.metadata.save(&path)?;
                println!("\n📄 Metadata saved to: {}", path.display());
            }
        }

        Commands::Zones { args } => {
            let config = args.load_config()?;
            let summaries = shot_charts::zone_summaries(&args.csv, &config, args.mode())?;

            println!(
                "{:<16} {:>8} {:>8} {:>10} {:>12} {:>8}",
                "team", "2PT", "corner3", "noncorner3", "unclassified", "total"
            );
            for summary in summaries {
                println!(
                    "{:<16} {:>8} {:>8} {:>10} {:>12} {:>8}",
                    summary.team,
                    summary.two_point,
                    summary.corner_three,
                    summary.non_corner_three,
                    summary.unclassified,
                    summary.total()
                );
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &shot_charts::RunMetadata) {
    println!("\n✅ Comparison complete!");
    println!("   Rows:          {} ({} parsed, {} skipped)", meta.rows, meta.parsed, meta.failed);
    println!("   Unclassified:  {}", meta.unclassified);
    println!("   Charts:        {} ({} undefined)", meta.charts, meta.undefined_charts);
    println!("   Checksum:      {}", meta.input_checksum);
    println!("   Created:       {}", meta.created_at);
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("shot_charts CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
