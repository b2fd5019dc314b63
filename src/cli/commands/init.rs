use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
///
/// An existing file is left untouched unless `--force` is given. In test
/// mode nothing is written.
pub fn handle(cli: &Cli, path: &Path) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });

    info("Initializing rWorkHours…");

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
        return Ok(());
    }

    if path.exists() && !force {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "configuration written");

    success(format!("Config file: {}", path.display()));
    Ok(())
}
