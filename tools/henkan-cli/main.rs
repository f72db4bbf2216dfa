use clap::{Parser, Subcommand};
use henkan::kind::transformer_sources;
use henkan::prelude::*;
use std::fs;

#[derive(Parser)]
#[command(name = "henkan-cli")]
#[command(about = "Inspect, merge and validate transformer catalog JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in transformer kinds with their metadata.
    Kinds,
    /// Merge a system catalog file and a custom catalog file and print the
    /// resulting catalog in presentation order.
    Merge {
        /// Path to the system catalog JSON (array of system transformer records).
        system: String,
        /// Path to the custom catalog JSON (array of persisted custom records).
        custom: String,
    },
    /// Validate a stored transformer config against its kind's editor contract.
    Validate {
        /// Path to a `{case, value}` config JSON file.
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Kinds => {
            for source in transformer_sources() {
                let meta = transformer_metadata(Some(source));
                println!("{:<18} {:<20} {}", source, meta.name, meta.value_type);
            }
        }
        Command::Merge { system, custom } => {
            let system: Vec<SystemTransformer> =
                serde_json::from_str(&fs::read_to_string(&system)?)?;
            let custom: Vec<CustomTransformerRecord> =
                serde_json::from_str(&fs::read_to_string(&custom)?)?;

            let catalog = merge_transformers(
                &system,
                custom.into_iter().map(Into::into).collect(),
            );

            println!("Merged catalog ({} entries):", catalog.len());
            for definition in &catalog {
                let origin = match definition.id() {
                    Some(id) => format!("custom:{}", id),
                    None => "system".to_string(),
                };
                println!(
                    "  {:<24} {:<18} {:<12} {}",
                    definition.name, definition.source, definition.value_type, origin
                );
            }
        }
        Command::Validate { path } => {
            let config: TransformerConfig = serde_json::from_str(&fs::read_to_string(&path)?)?;
            let (source, config) = decode(config);
            let contract = resolve_editor(source);

            match contract.validate(&config) {
                Ok(()) => println!("'{}' config is valid", source),
                Err(err) => {
                    eprintln!("'{}' config is invalid: {}", source, err);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
