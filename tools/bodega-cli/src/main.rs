//! Bodega CLI - terminal storefront for the demo cart.
//!
//! Commands:
//! - `bodega add` - Add a product to the cart
//! - `bodega list` - Show the cart lines and total
//! - `bodega remove` - Remove a line by index
//! - `bodega qty` - Change a line's quantity
//! - `bodega count` - Show the total quantity (badge number)
//! - `bodega total` - Show the cart total
//! - `bodega checkout` - Run the demo checkout
//! - `bodega clear` - Empty the cart

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, CheckoutArgs, QtyArgs, RemoveArgs};

/// Bodega - a small demo storefront cart
#[derive(Parser)]
#[command(name = "bodega")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding the cart slot
    #[arg(short, long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart
    Add(AddArgs),

    /// Show the cart lines and total
    List,

    /// Remove a cart line by index
    Remove(RemoveArgs),

    /// Change the quantity of a cart line
    Qty(QtyArgs),

    /// Show the total quantity across all lines
    Count,

    /// Show the cart total
    Total,

    /// Run the demo checkout (login, payment method, confirmation)
    Checkout(CheckoutArgs),

    /// Empty the cart
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Open the cart store
    let mut ctx = context::Context::load(cli.data_dir.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Add(args) => commands::add::run(args, &mut ctx),
        Commands::List => commands::list::run(&mut ctx),
        Commands::Remove(args) => commands::remove::run(args, &mut ctx),
        Commands::Qty(args) => commands::qty::run(args, &mut ctx),
        Commands::Count => commands::totals::count(&mut ctx),
        Commands::Total => commands::totals::total(&mut ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &mut ctx),
        Commands::Clear => commands::clear::run(&mut ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
