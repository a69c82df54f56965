//! Show the effective rating policy

use labelgrade::config::Config;
use labelgrade::output::OutputMode;

/// Print the policy the `rate` command would use
pub fn policy(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&config.policy)?),
        OutputMode::Human => print!("{}", toml::to_string_pretty(&config.policy)?),
    }
    Ok(())
}
