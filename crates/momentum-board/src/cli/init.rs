/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML board configuration file
[POS]:    CLI initialization layer
[UPDATE]: When BoardConfig schema changes
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use momentum_adapter::DEFAULT_BASE_URL;
use momentum_board::TaskSource;
use momentum_board::config::{ApiConfig, BoardConfig, BoardSettings, LogConfig};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Momentum board setup").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a board configuration.").dim()
    );

    let theme = ColorfulTheme::default();

    println!("\n{}", style("--- API ---").bold());
    let base_url: String = Input::with_theme(&theme)
        .with_prompt("API base URL")
        .default(DEFAULT_BASE_URL.to_string())
        .interact_text()?;

    let token: String = Input::with_theme(&theme)
        .with_prompt("API token (leave empty to set MOMENTUM__API__TOKEN later)")
        .allow_empty(true)
        .interact_text()?;

    println!("\n{}", style("--- Board ---").bold());
    let sources = ["remote", "mock"];
    let source_selection = Select::with_theme(&theme)
        .with_prompt("Task source")
        .items(&sources)
        .default(0)
        .interact()?;
    let task_source = if source_selection == 1 {
        TaskSource::Mock
    } else {
        TaskSource::Remote
    };

    println!("\n{}", style("--- Logging ---").bold());
    let level_selection = Select::with_theme(&theme)
        .with_prompt("Log level")
        .items(&LOG_LEVELS)
        .default(2)
        .interact()?;

    let log_file: String = Input::with_theme(&theme)
        .with_prompt("Log file (leave empty to keep logs in the Logs tab only)")
        .allow_empty(true)
        .interact_text()?;

    let config = BoardConfig {
        api: ApiConfig {
            base_url,
            token: non_empty(token),
            ..ApiConfig::default()
        },
        board: BoardSettings { task_source },
        log: LogConfig {
            level: LOG_LEVELS[level_selection].to_string(),
            file: non_empty(log_file).map(PathBuf::from),
        },
    };
    write_config(&config, &output)?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn write_config(config: &BoardConfig, output: &Path) -> Result<()> {
    config.validate()?;
    let yaml = config.to_yaml()?;

    if let Some(parent) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_config_loads_back() {
        let dir = std::env::temp_dir().join(format!("momentum-init-{}", std::process::id()));
        let output = dir.join("nested").join("board.yaml");
        let config = BoardConfig {
            api: ApiConfig {
                token: non_empty("  secret ".to_string()),
                ..ApiConfig::default()
            },
            board: BoardSettings {
                task_source: TaskSource::Mock,
            },
            log: LogConfig::default(),
        };

        write_config(&config, &output).expect("write config");
        let loaded = BoardConfig::from_file(&output).expect("read config");
        assert_eq!(loaded, config);
        assert_eq!(loaded.api.token.as_deref(), Some("secret"));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_blank_answers_are_dropped() {
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty(" x ".to_string()), Some("x".to_string()));
    }
}
