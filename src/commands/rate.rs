//! Rate a task file

use anyhow::Context;

use labelgrade::adapters::csv::CsvReportWriter;
use labelgrade::adapters::image::{CachingImageAnnotator, SkipImages};
use labelgrade::adapters::json;
use labelgrade::config::Config;
use labelgrade::core::models::{Task, TaskError};
use labelgrade::core::ports::{ImageAnnotator, ReportSink};
use labelgrade::core::services::{Report, assemble};
use labelgrade::output::{OutputMode, RunSummary};

use crate::cli::RateArgs;

/// Rate every task in the input file and write the CSV report
pub fn rate(args: &RateArgs, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let records = json::load_tasks(&args.input)
        .with_context(|| format!("Failed to load tasks from {}", args.input.display()))?;

    let annotator: Box<dyn ImageAnnotator> = if args.skip_images {
        Box::new(SkipImages)
    } else {
        Box::new(CachingImageAnnotator::new(&config.image)?)
    };

    let workers = args.workers.unwrap_or(config.workers);
    let report = run_pipeline(records, config, annotator.as_ref(), workers)?;

    let mut writer = CsvReportWriter::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    writer.write_report(&report)?;

    RunSummary::from_report(&report, &args.output.display().to_string()).render(mode);

    if args.strict && !report.is_complete() {
        anyhow::bail!(
            "{} of {} task(s) could not be rated",
            report.failures.len(),
            report.total
        );
    }

    Ok(())
}

fn run_pipeline(
    records: Vec<Result<Task, TaskError>>,
    config: &Config,
    annotator: &dyn ImageAnnotator,
    workers: usize,
) -> anyhow::Result<Report> {
    match workers {
        1 => Ok(assemble(records, &config.policy, annotator, false)),
        0 => Ok(assemble(records, &config.policy, annotator, true)),
        n => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            Ok(pool.install(|| assemble(records, &config.policy, annotator, true)))
        },
    }
}
