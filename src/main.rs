use anyhow::{Context, Result};
use chef_rb::{EntityLoader, ToDsl};
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read document from stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}

fn main() -> Result<()> {
    let matches = Command::new("chef-rb")
        .about("Convert Chef role and environment JSON to Ruby DSL")
        .arg(
            Arg::new("input")
                .help("Role or environment JSON file, or - for stdin")
                .default_value("-")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the DSL to this file instead of stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or("-");

    let content = read_input(input)?;
    let entity = EntityLoader::load_str(&content)
        .with_context(|| format!("Failed to load entity from {}", input))?;
    debug!(kind = entity.kind_name(), name = entity.name(), "loaded entity");

    let output = entity
        .to_dsl()
        .with_context(|| format!("Failed to render {} {}", entity.kind_name(), entity.name()))?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, format!("{}\n", output)).with_context(|| format!("Failed to write {}", path))?
        }
        None => println!("{}", output),
    }

    Ok(())
}
