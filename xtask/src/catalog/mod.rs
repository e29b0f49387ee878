//! Product catalog management commands.

mod error;
mod seed;

pub use error::{CatalogError, Result};

use catalogstore::storage::dynamodb::StoreConfig;
use catalogstore::storage::DynamoDbCatalog;
use catalogstore_core::storage::{CatalogRepository, StoreError};

use crate::prelude::*;
use dialoguer::Confirm;

/// Product catalog management commands.
#[derive(Debug, clap::Parser)]
pub struct CatalogCommand {
    #[command(subcommand)]
    pub action: CatalogAction,
}

/// Available catalog actions.
#[derive(Debug, clap::Subcommand)]
pub enum CatalogAction {
    /// Create the catalog table schema.
    Deploy(DeployCommand),

    /// Seed the catalog with sample items.
    Seed(SeedCommand),

    /// Run one of the four lookup strategies.
    Lookup(LookupCommand),
}

/// Create the catalog table schema.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Create the products DynamoDB table.

Defines the (Id, Category) primary key and the AmountIndex global
secondary index, billed on demand. Schema creation is one-time: running
this against an existing table reports that nothing is left to do.

Environment variables:
  AWS_ENDPOINT_URL     - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION           - AWS region (defaults to us-east-1)
  AWS_PROFILE          - AWS profile to use for credentials
  DYNAMODB_TABLE_NAME  - Table name (defaults to products)")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Seed the catalog with sample items.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert deterministic sample items.

Several items share an id across categories, and values repeat across
items, so every lookup strategy has data worth querying. Inserting the
same (id, category) pair again replaces the earlier item.")]
pub struct SeedCommand {
    /// Number of items to generate.
    #[arg(long, default_value = "12")]
    pub count: u32,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Run one of the four lookup strategies.
#[derive(Debug, clap::Parser)]
pub struct LookupCommand {
    #[command(subcommand)]
    pub strategy: LookupAction,
}

/// One subcommand per access strategy; the emitted cost record shows what
/// each one scanned.
#[derive(Debug, clap::Subcommand)]
pub enum LookupAction {
    /// Lookup by partition key alone (first match wins).
    PrimaryKey {
        /// Item id to look up.
        #[arg(long)]
        id: String,
    },

    /// Lookup by the full (id, category) key.
    CompositeKey {
        /// Item id to look up.
        #[arg(long)]
        id: String,

        /// Category within the id partition.
        #[arg(long)]
        category: String,
    },

    /// Lookup every item with exactly this value through the index.
    IndexValue {
        /// Value to match in the secondary index.
        #[arg(long)]
        value: i64,
    },

    /// Index lookup with a residual status filter (the expensive path).
    IndexStatus {
        /// Status to filter by after the key condition.
        #[arg(long)]
        status: i64,

        /// Value to match in the secondary index.
        #[arg(long)]
        value: i64,
    },
}

/// Main entry point for the catalog command.
pub async fn run(command: CatalogCommand, global: crate::Global) -> Result<()> {
    match command.action {
        CatalogAction::Deploy(cmd) => run_deploy(cmd, &global).await,
        CatalogAction::Seed(cmd) => run_seed(cmd, &global).await,
        CatalogAction::Lookup(cmd) => run_lookup(cmd, &global).await,
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let config = StoreConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), config.target_display());
        aprintln!("{} {}", p_b("Table:"), config.table_name);
        aprintln!();
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt("Create the table schema?")
            .default(true)
            .interact()?;

        if !confirmed {
            return Err(CatalogError::UserCancelled);
        }
    }

    let catalog = DynamoDbCatalog::from_env().await;

    match catalog.create_schema().await {
        Ok(()) => {
            if !global.is_silent() {
                aprintln!(
                    "{}",
                    p_g("Schema created. The table may take a moment to become active.")
                );
            }
            Ok(())
        }
        Err(StoreError::SchemaAlreadyExists { table }) => {
            if !global.is_silent() {
                aprintln!(
                    "{}",
                    p_y(&format!("Schema already exists for table: {}.", table))
                );
            }
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let config = StoreConfig::default();
    let items = seed::generate_seed_items(cmd.count);

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), config.target_display());
        aprintln!("{} {}", p_b("Table:"), config.table_name);
        aprintln!();
        aprintln!("{}", p_c("Items to insert:"));
        for item in items.iter().take(5) {
            aprintln!(
                "  {}/{} (value: {}, status: {})",
                item.id,
                item.category,
                item.value,
                item.status
            );
        }
        if items.len() > 5 {
            aprintln!("  ... and {} more", items.len() - 5);
        }
        aprintln!();
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Insert {} items?", items.len()))
            .default(true)
            .interact()?;

        if !confirmed {
            return Err(CatalogError::UserCancelled);
        }
    }

    let catalog = DynamoDbCatalog::from_env().await;

    let mut inserted = 0;
    for item in &items {
        catalog.insert_item(item).await?;
        inserted += 1;
    }

    if !global.is_silent() {
        aprintln!("{} {} items inserted.", p_g("Success:"), inserted);
    }

    Ok(())
}

async fn run_lookup(cmd: LookupCommand, global: &crate::Global) -> Result<()> {
    let catalog = DynamoDbCatalog::from_env().await;

    let items = match cmd.strategy {
        LookupAction::PrimaryKey { id } => catalog
            .lookup_by_primary_key(&id)
            .await?
            .into_iter()
            .collect(),
        LookupAction::CompositeKey { id, category } => {
            catalog.lookup_by_composite_key(&id, &category).await?
        }
        LookupAction::IndexValue { value } => catalog.lookup_by_index_value(value).await?,
        LookupAction::IndexStatus { status, value } => {
            catalog.lookup_by_index_value_and_status(status, value).await?
        }
    };

    if global.is_silent() {
        return Ok(());
    }

    if items.is_empty() {
        aprintln!("{}", p_y("No items matched."));
        return Ok(());
    }

    for item in &items {
        aprintln!(
            "  {} {} (value: {}, status: {})",
            p_c(&item.id),
            item.category,
            item.value,
            item.status
        );
    }
    aprintln!("{} {} item(s).", p_g("Matched:"), items.len());

    Ok(())
}
