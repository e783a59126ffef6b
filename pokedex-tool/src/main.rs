mod config;
mod display;
mod error;
mod logging;
mod print;

#[cfg(feature = "browse")]
mod browse;

use clap::{Parser, Subcommand};
use pokedex_api::PokedexClient;

use crate::config::{default_log_path, load_config, resolve_base_url};
use crate::logging::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(name = "pkdx")]
#[command(about = "Browse the PokeAPI catalog from the terminal", long_about = None)]
struct Cli {
    /// API root, e.g. https://pokeapi.co/api/v2
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the first page of the catalog
    List,

    /// Print the detail view of one item
    Show {
        /// Name or number, e.g. pikachu or 25
        identifier: String,
    },

    #[cfg(feature = "browse")]
    /// Start the interactive browser
    Browse,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    let target = match cli.command {
        #[cfg(feature = "browse")]
        Command::Browse => LogTarget::File(config.log_file.clone().unwrap_or_else(default_log_path)),
        _ => LogTarget::Stderr,
    };
    init_tracing(config.log_level.as_deref(), target)?;

    let client = PokedexClient::with_base_url(resolve_base_url(cli.base_url, &config));

    match cli.command {
        Command::List => {
            print!("{}", print::listing_report(&client).await?);
        }
        Command::Show { identifier } => {
            print!(
                "{}",
                print::detail_report(&client, &identifier, &config.locale).await?
            );
        }
        #[cfg(feature = "browse")]
        Command::Browse => {
            browse::run(client, config.locale, config.show_errors).await?;
        }
    }

    Ok(())
}
