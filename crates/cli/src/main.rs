//! GoMarket CLI - Inspect and mutate a file-backed cart.
//!
//! # Usage
//!
//! ```bash
//! # Print the cart
//! gomarket show
//!
//! # Add a product
//! gomarket add --id sku-1 --title "Espresso Beans" \
//!     --image-url https://img.example.com/beans.png --price 12.50
//!
//! # Change quantities
//! gomarket increment sku-1
//! gomarket decrement sku-1
//!
//! # Empty the cart
//! gomarket clear
//! ```
//!
//! # Commands
//!
//! - `show` - Print the cart contents
//! - `add` - Add a product (or bump its quantity if already present)
//! - `increment` / `decrement` - Adjust a product's quantity
//! - `clear` - Empty the cart and delete its storage entry
//!
//! The cart file location resolves from `--store`, then the
//! `GOMARKET_CART_PATH` environment variable, then the platform data
//! directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use gomarket_cart::{CartStore, FileStorage};
use gomarket_core::{NewCartItem, Price, ProductId};

#[derive(Parser)]
#[command(name = "gomarket")]
#[command(author, version, about = "GoMarket cart tools")]
struct Cli {
    /// Path of the cart storage file
    #[arg(long, value_name = "PATH", env = "GOMARKET_CART_PATH", global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cart contents
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Display title
        #[arg(long)]
        title: String,

        /// Display image URL
        #[arg(long)]
        image_url: String,

        /// Unit price, e.g. 12.50
        #[arg(long)]
        price: Decimal,
    },
    /// Raise a product's quantity by one
    Increment {
        /// Product id
        id: String,
    },
    /// Lower a product's quantity by one
    Decrement {
        /// Product id
        id: String,
    },
    /// Empty the cart and delete its storage entry
    Clear,
}

/// Errors resolving the CLI configuration.
#[derive(Debug, thiserror::Error)]
enum ConfigError {
    /// No flag, no environment variable, and no platform data directory.
    #[error(
        "no cart path: pass --store, set GOMARKET_CART_PATH, or run on a platform with a data directory"
    )]
    NoStorePath,
}

#[tokio::main]
async fn main() {
    // Load .env before clap reads GOMARKET_CART_PATH
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gomarket=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let path = resolve_store_path(cli.store)?;
    tracing::debug!("using cart storage at {}", path.display());

    let storage = Arc::new(FileStorage::new(path));
    let cart = CartStore::hydrate(storage).await?;

    match cli.command {
        Commands::Show => show(&cart).await,
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => {
            cart.add_to_cart(NewCartItem {
                id: ProductId::new(id),
                title,
                image_url,
                price: Price::new(price),
            })
            .await?;
            show(&cart).await;
        }
        Commands::Increment { id } => {
            cart.increment(&ProductId::new(id)).await?;
            show(&cart).await;
        }
        Commands::Decrement { id } => {
            cart.decrement(&ProductId::new(id)).await?;
            show(&cart).await;
        }
        Commands::Clear => {
            cart.clear().await?;
            tracing::info!("Cart cleared");
        }
    }
    Ok(())
}

/// Resolve the cart file location: flag and environment first, platform
/// data directory otherwise.
fn resolve_store_path(flag: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = flag {
        return Ok(path);
    }
    dirs::data_dir()
        .map(|dir| dir.join("gomarket").join("cart.json"))
        .ok_or(ConfigError::NoStorePath)
}

/// Print the cart contents to stdout.
#[allow(clippy::print_stdout)]
async fn show(cart: &CartStore) {
    let items = cart.items().await;
    if items.is_empty() {
        println!("Cart is empty");
        return;
    }

    for item in &items {
        let line_total = format!("{:.2}", item.line_total());
        println!(
            "{:<16} x{:<4} ${:<10} {}",
            item.id.as_str(),
            item.quantity,
            line_total,
            item.title
        );
    }
    println!(
        "{} items, subtotal ${:.2}",
        cart.item_count().await,
        cart.subtotal().await
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_store_path_prefers_flag() {
        let path = resolve_store_path(Some(PathBuf::from("/tmp/cart.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/cart.json"));
    }

    #[test]
    fn test_cli_parses_add() {
        let cli = Cli::parse_from([
            "gomarket",
            "add",
            "--id",
            "sku-1",
            "--title",
            "Espresso Beans",
            "--image-url",
            "https://img.example.com/beans.png",
            "--price",
            "12.50",
        ]);

        match cli.command {
            Commands::Add { id, price, .. } => {
                assert_eq!(id, "sku-1");
                assert_eq!(price, Decimal::new(1250, 2));
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_cli_parses_store_flag_anywhere() {
        let cli = Cli::parse_from(["gomarket", "show", "--store", "/tmp/cart.json"]);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/cart.json")));
    }
}
