use bijou::api::{BijouApi, CmdMessage, CmdResult, ConfigAction, MessageLevel};
use bijou::config::{BijouConfig, CONFIG_KEYS};
use bijou::error::{BijouError, Result};
use bijou::metal::PurityPrice;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

mod args;
mod logging;
use args::{Cli, Commands};

const HOME_ENV: &str = "BIJOU_HOME";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but reported problems.
fn run(cli: Cli) -> Result<bool> {
    let config_dir = resolve_config_dir(cli.config_dir)?;
    tracing::debug!(dir = %config_dir.display(), "using config dir");
    let api = BijouApi::new(config_dir)?;

    let result = match cli.command {
        Commands::Render { file, escape, raw } => {
            let escape = match (escape, raw) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let result = api.render_description(&read_input(&file)?, escape)?;
            if let Some(html) = &result.html {
                println!("{}", html);
            }
            result
        }
        Commands::Text {
            file,
            preview,
            width,
        } => {
            let result = api.plain_text(&read_input(&file)?, width, preview)?;
            if let Some(text) = &result.text {
                println!("{}", text);
            }
            result
        }
        Commands::Price {
            file,
            karat,
            base,
            metal,
        } => {
            let result = api.price(&read_input(&file)?, metal.as_deref(), &karat, base)?;
            print_prices(&result, api.settings());
            result
        }
        Commands::Levels {
            file,
            base,
            metal,
            active,
        } => {
            let result = api.price_table(&read_input(&file)?, metal.as_deref(), base, active)?;
            print_prices(&result, api.settings());
            result
        }
        Commands::Check { file } => api.check_metals(&read_input(&file)?)?,
        Commands::Config { key, value } => handle_config(&api, key, value)?,
    };

    print_messages(&result.messages);
    Ok(!result.has_errors())
}

fn handle_config(api: &BijouApi, key: Option<String>, value: Option<String>) -> Result<CmdResult> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        for key in CONFIG_KEYS {
            println!("{} = {}", key, config.get(key)?);
        }
    }
    Ok(result)
}

fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "bijou", "bijou")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BijouError::Config("Could not determine config dir".to_string()))
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        BijouError::Api(format!("Could not read {}: {}", path.display(), e))
    })
}

fn print_prices(result: &CmdResult, config: &BijouConfig) {
    if let Some(metal) = &result.metal {
        println!("{}", metal.bold());
    }
    for row in &result.prices {
        println!("{}", format_price_row(row, config));
    }
}

fn format_price_row(row: &PurityPrice, config: &BijouConfig) -> String {
    let karat = format!("{:>7}", row.karat.to_string());
    let line = format!(
        "{}  x{:<8.4}  {}",
        karat,
        row.multiplier,
        config.format_price(row.price)
    );
    if row.active {
        line
    } else {
        format!("{} {}", line.dimmed(), "(inactive)".dimmed())
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
