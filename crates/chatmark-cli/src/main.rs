use anyhow::{Context, Result};
use chatmark_config::{Config, OutputFormat};
use chatmark_engine::format_message;
use std::{
    env, fs,
    io::{self, Read, Write},
    process,
};

mod args;
mod output;

use args::{Command, Input};

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let command = match args::parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", args::USAGE);
            process::exit(1);
        }
    };

    match command {
        Command::Help => println!("{}", args::USAGE),
        Command::Format { input, format } => {
            if let Err(e) = run(&input, format) {
                log::error!("Formatting failed: {e:#}");
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        }
    }
}

fn run(input: &Input, format: Option<OutputFormat>) -> Result<()> {
    let config = load_config();
    let raw = read_input(input)?;

    let nodes = format_message(&raw);
    log::debug!("Formatted {} bytes into {} blocks", raw.len(), nodes.len());

    let format = format.unwrap_or(config.output);
    let rendered = output::render_output(&nodes, format, &config)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write output")?;
    Ok(())
}

/// Loads the config file, falling back to defaults if it is missing or broken.
fn load_config() -> Config {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path) {
        Ok(Some(config)) => {
            log::info!("Loaded config: {config:?}");
            config
        }
        Ok(None) => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            log::warn!("{e}");
            log::warn!("Using default config");
            Config::default()
        }
    }
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            log::info!("Reading message from stdin");
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read message from stdin")?;
            Ok(raw)
        }
        Input::File(path) => {
            log::info!("Reading message from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read message from {}", path.display()))
        }
    }
}
