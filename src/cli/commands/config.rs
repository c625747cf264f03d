use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            print_current(&path, cfg)?;
        }

        if *edit_config {
            edit_in_editor(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

/// Print what is on disk. A fresh install has no config file yet, so
/// the effective defaults are shown instead.
fn print_current(path: &Path, cfg: &Config) -> AppResult<()> {
    header(format!("Configuration ({})", path.display()));

    if path.exists() {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{content}");
    } else {
        info("No configuration file yet; showing the defaults.");
        println!("{}", serde_yaml::to_string(cfg).unwrap_or_default());
    }

    Ok(())
}

/// Open the config file in an editor: `--editor` first, then
/// `$EDITOR` / `$VISUAL`, then the platform default.
fn edit_in_editor(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let mut candidates: Vec<String> = Vec::new();
    if let Some(ed) = requested {
        candidates.push(ed.to_string());
    }
    if let Ok(ed) = std::env::var("EDITOR").or_else(|_| std::env::var("VISUAL")) {
        candidates.push(ed);
    }
    candidates.push(if cfg!(target_os = "windows") {
        "notepad".to_string()
    } else {
        "nano".to_string()
    });

    for editor in &candidates {
        match Command::new(editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{editor}'."));
                return Ok(());
            }
            _ => warning(format!("Editor '{editor}' is not available.")),
        }
    }

    Err(AppError::Config(format!(
        "no usable editor among: {}",
        candidates.join(", ")
    )))
}
