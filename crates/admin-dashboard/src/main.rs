//! # Admin Dashboard
//!
//! Runs one store operation against the configured admin API and prints the result.
//!
//! ```bash
//! RUST_LOG=info admin-dashboard users
//! admin-dashboard --config config/default.toml delete-order 7
//! ```
//!
//! The exit code is 1 when the operation ends in `Status::Error`.

use admin_dashboard::api::HttpApi;
use admin_dashboard::config::DashboardConfig;
use admin_dashboard::data_slice::DataState;
use admin_dashboard::lifecycle::DashboardSystem;
use admin_dashboard::model::{Product, Status};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slice_framework::tracing::setup_tracing;
use std::sync::Arc;
use tracing::{info, Instrument};

/// Shop admin dashboard
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via ADMIN_DASHBOARD_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print the users table
    Users,
    /// Fetch and print all products
    Products,
    /// Fetch and print all orders
    Orders,
    /// Fetch and print one product
    Product { id: String },
    /// Create a product from a JSON object
    AddProduct { json: String },
    /// Delete a product by id
    DeleteProduct { id: String },
    /// Delete an order by id
    DeleteOrder { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing();

    let config = DashboardConfig::load(args.config.as_deref())?;
    info!(base_url = %config.api.base_url, id_path_style = ?config.api.id_path_style, "Configuration loaded");

    let api = HttpApi::new(&config.api)?;
    let system = DashboardSystem::new(Arc::new(api), config.api.id_path_style);

    let span = tracing::info_span!("command", command = ?args.command);
    let output = run(&system, args.command).instrument(span).await?;

    let status = system.store.state().status;
    if let Some(output) = output {
        println!("{output}");
    }
    println!("status: {status}");

    system.shutdown().await.map_err(anyhow::Error::msg)?;

    if status == Status::Error {
        std::process::exit(1);
    }
    Ok(())
}

async fn run(system: &DashboardSystem, command: Command) -> Result<Option<String>> {
    let store = &system.store;
    let service = &system.service;

    let output = match command {
        Command::Users => {
            let table = system.users_table();
            if let Some(handle) = table.mount() {
                handle.await.context("Users fetch task failed")?;
            }
            Some(table.render())
        }
        Command::Products => {
            service.fetch_products(store).await;
            Some(to_json(store, |s| serde_json::to_string_pretty(&s.products))?)
        }
        Command::Orders => {
            service.fetch_orders(store).await;
            Some(to_json(store, |s| serde_json::to_string_pretty(&s.orders))?)
        }
        Command::Product { id } => {
            service.single_product(store, id).await;
            Some(to_json(store, |s| serde_json::to_string_pretty(&s.single_product))?)
        }
        Command::AddProduct { json } => {
            let product: Product =
                serde_json::from_str(&json).context("Product must be a JSON object")?;
            service.add_product(store, product).await;
            None
        }
        Command::DeleteProduct { id } => {
            service.delete_product(store, id).await;
            None
        }
        Command::DeleteOrder { id } => {
            service.delete_order(store, id).await;
            None
        }
    };
    Ok(output)
}

fn to_json<F>(store: &slice_framework::SliceClient<DataState>, f: F) -> Result<String>
where
    F: FnOnce(&DataState) -> serde_json::Result<String>,
{
    store
        .with_state(f)
        .context("Failed to serialize store contents")
}
