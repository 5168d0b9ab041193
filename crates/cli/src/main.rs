//! Clementine CLI - storefront front-end.
//!
//! Each invocation restores session and cart from `~/.clementine` (or
//! `CLEMENTINE_HOME`), fetches the catalog, runs one operation, and persists
//! any state change, so a shopping trip can span many invocations.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! clem products
//!
//! # Log in (the configured admin email gets product-management rights)
//! clem login -e user@example.com -p secret
//!
//! # Shop
//! clem cart add <product-id> --quantity 2
//! clem cart show
//! clem checkout
//!
//! # Admin: create a product
//! clem add-product --name "Crate" --price 12.99 --stock 10
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "clem")]
#[command(author, version, about = "Clementine storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Products,
    /// Log in and open a session
    Login {
        /// Login email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Close the session
    Logout,
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Commit the cart quantities as stock decrements and empty it
    Checkout,
    /// Create a product (requires an admin session)
    AddProduct {
        /// Product name
        #[arg(long)]
        name: String,

        /// Unit price, e.g. 12.99
        #[arg(long)]
        price: Decimal,

        /// Units in stock (default 0)
        #[arg(long)]
        stock: Option<u32>,

        /// One-line description
        #[arg(long, default_value = "")]
        short_desc: String,

        /// Full description
        #[arg(long, default_value = "")]
        description: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add a catalog product to the cart
    Add {
        /// Product id (see `clem products`)
        id: String,

        /// How many to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Default to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clementine_storefront=info,clementine_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Products => commands::catalog::list().await?,
        Commands::Login { email, password } => {
            commands::session::login(&email, password).await?;
        }
        Commands::Logout => commands::session::logout().await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show().await?,
            CartAction::Add { id, quantity } => commands::cart::add(&id, quantity).await?,
            CartAction::Remove { id } => commands::cart::remove(&id).await?,
            CartAction::Clear => commands::cart::clear().await?,
        },
        Commands::Checkout => commands::cart::checkout().await?,
        Commands::AddProduct {
            name,
            price,
            stock,
            short_desc,
            description,
        } => {
            commands::catalog::add_product(name, price, stock, short_desc, description).await?;
        }
    }
    Ok(())
}
