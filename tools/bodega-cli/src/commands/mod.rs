//! CLI command implementations.

pub mod add;
pub mod checkout;
pub mod clear;
pub mod list;
pub mod qty;
pub mod remove;
pub mod totals;

use clap::Args;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product name.
    pub name: String,

    /// Unit price, e.g. 25.50.
    pub price: f64,

    /// Product image URL or path.
    #[arg(short, long)]
    pub image: Option<String>,

    /// Number of units to add.
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub qty: i64,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Line index, as shown by `bodega list`.
    pub index: usize,
}

/// Arguments for the qty command.
#[derive(Args)]
pub struct QtyArgs {
    /// Line index, as shown by `bodega list`.
    pub index: usize,

    /// New quantity (must be at least 1).
    #[arg(allow_negative_numbers = true)]
    pub qty: i64,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Email for the demo login (prompted when omitted).
    #[arg(long)]
    pub email: Option<String>,

    /// Password for the demo login (prompted when omitted; never stored).
    #[arg(long)]
    pub password: Option<String>,

    /// Payment method: card, wallet or cash (prompted when omitted).
    #[arg(short, long)]
    pub method: Option<String>,
}
