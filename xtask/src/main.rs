//! See <https://github.com/matklad/cargo-xtask/>
//!
//! This binary defines auxiliary commands for the catalogstore repository
//! which are not expressible with just `cargo`.
//!
//! The binary is integrated into the `cargo` command line by using an
//! alias in `.cargo/config`.

use clap::Parser;

mod catalog;
mod prelude;

/// Development tasks for the catalogstore repository
#[derive(Debug, Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for catalogstore", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: Global,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Silence the command output
    #[clap(long, global = true)]
    pub silent: bool,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Manage the product catalog table
    Catalog(catalog::CatalogCommand),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Cost records from the storage layer surface as tracing events.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalogstore=info".into()),
        )
        .init();

    match cli.command {
        Commands::Catalog(catalog_cmd) => {
            catalog::run(catalog_cmd, cli.global).await?;
        }
    }

    Ok(())
}
