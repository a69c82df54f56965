//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use labelgrade::config::Config;
use labelgrade::output::OutputMode;
use labelgrade::paths::{DEFAULT_REPORT_FILE, DEFAULT_TASKS_FILE};

/// labelgrade - Quality grading for image-labeling tasks
#[derive(Parser, Debug)]
#[command(
    name = "labelgrade",
    version,
    about = "Quality grading for image-labeling tasks",
    long_about = "Grade machine-annotated image-labeling tasks.\n\n\
                  Each task is scored on audit rejections, bounding-box area outliers,\n\
                  label validity and occlusion, then given a Gold, Silver or Bronze grade.\n\
                  Results go to a CSV report alongside annotated images."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/labelgrade/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rate every task in a task file and write the CSV report
    Rate(RateArgs),

    /// Fetch task records from the labeling API into a task file
    Fetch(FetchArgs),

    /// Write a default config file
    Init {
        /// Where to write it (default: ~/.config/labelgrade/config.toml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective rating policy
    Policy,

    /// Show version
    Version,
}

#[derive(Args, Debug)]
pub struct RateArgs {
    /// Task file (JSON array of task records)
    #[arg(default_value = DEFAULT_TASKS_FILE)]
    pub input: PathBuf,

    /// CSV report path
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    pub output: PathBuf,

    /// Do not download or draw images
    #[arg(long)]
    pub skip_images: bool,

    /// Worker threads (0 = one per CPU, 1 = sequential); overrides the config
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Exit with an error if any task could not be rated
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Task ids to fetch
    pub ids: Vec<String>,

    /// File with one task id per line (`#` starts a comment)
    #[arg(long)]
    pub ids_file: Option<PathBuf>,

    /// Where to write the fetched records
    #[arg(short, long, default_value = DEFAULT_TASKS_FILE)]
    pub output: PathBuf,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let load_config = || Config::load(cli.config.as_deref());

    match cli.command {
        Some(Command::Rate(args)) => commands::rate(&args, &load_config()?, output_mode),
        Some(Command::Fetch(args)) => commands::fetch(&args, &load_config()?, output_mode),
        Some(Command::Init { ref path, force }) => {
            commands::init(path.as_deref().or(cli.config.as_deref()), force, output_mode)
        },
        Some(Command::Policy) => commands::policy(&load_config()?, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("labelgrade v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("labelgrade v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'labelgrade --help' for usage");
                println!("Run 'labelgrade rate <tasks.json>' to grade a task file");
            }
            Ok(())
        },
    }
}
