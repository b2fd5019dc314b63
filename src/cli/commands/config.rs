use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use, run `rworkhours init`)",
                    path.display()
                ));
            } else {
                let content = fs::read_to_string(path)?;
                match serde_yaml::from_str::<Config>(&content) {
                    Err(e) => warning(format!("Configuration file cannot be parsed: {}", e)),
                    Ok(parsed) => {
                        if let Err(e) = parsed.validate() {
                            warning(format!("{} (fix it with `rworkhours config --edit`)", e));
                        }
                        report_missing_keys(&content)?;
                    }
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            // a fresh file gets the defaults, not the session's `--url` override
            if !path.exists() {
                Config::default().save_to(path)?;
            }

            match Command::new(&editor_to_use).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited successfully using fallback '{}'",
                            default_editor
                        )),
                        Ok(_) | Err(_) => error(format!(
                            "Failed to edit configuration file using fallback '{}'",
                            default_editor
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}

fn report_missing_keys(content: &str) -> AppResult<()> {
    let missing = Config::missing_keys(content)?;
    if missing.is_empty() {
        success("Configuration file is complete");
    } else {
        warning(format!(
            "Missing fields (defaults used): {}",
            missing.join(", ")
        ));
    }
    Ok(())
}
