//! Fetch task records from the labeling API

use std::fs;
use std::path::Path;

use anyhow::Context;

use labelgrade::adapters::json;
use labelgrade::adapters::scale::ApiTaskSource;
use labelgrade::config::Config;
use labelgrade::core::services::collect_tasks;
use labelgrade::output::{FetchSummary, OutputMode};

use crate::cli::FetchArgs;

/// Read task ids from a file, one per line, ignoring blanks and `#` comments
fn read_ids_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read task ids from {}", path.display()))?;
    Ok(content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect())
}

/// Fetch the requested tasks and write them to the output file
pub fn fetch(args: &FetchArgs, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let mut ids = args.ids.clone();
    if let Some(path) = &args.ids_file {
        ids.extend(read_ids_file(path)?);
    }

    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));

    if ids.is_empty() {
        anyhow::bail!("No task ids given. Pass ids as arguments or use --ids-file");
    }

    let source = ApiTaskSource::new(&config.api, config.api_key())?;
    let outcome = collect_tasks(&source, &ids);

    json::save_records(&args.output, &outcome.records)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    FetchSummary::from_outcome(ids.len(), &outcome, &args.output.display().to_string())
        .render(mode);

    Ok(())
}
