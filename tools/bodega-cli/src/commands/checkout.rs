//! Run the demo checkout: login, payment method, confirmation.

use std::str::FromStr;

use anyhow::{bail, Result};
use bodega_checkout::{CheckoutError, CheckoutFlow, PaymentMethod};
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &mut Context) -> Result<()> {
    // Empty-cart checkout is rejected before anything is asked.
    let mut flow = CheckoutFlow::begin(ctx.store.cart())?;
    flow.advance()?;

    ctx.output.header("Checkout");
    login(&args, ctx, &mut flow)?;
    flow.advance()?;

    let method = select_method(&args)?;
    flow.select_payment(method);

    let spinner = ctx.output.spinner("Processing payment...");
    std::thread::sleep(std::time::Duration::from_millis(600));
    spinner.finish_and_clear();

    let confirmation = flow.complete(ctx.store.cart())?;
    ctx.store.clear()?;

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output
        .success("Order confirmed. Thank you for your purchase!");
    ctx.output.kv("order", confirmation.order_id.as_str());
    ctx.output.kv("email", &confirmation.email);
    ctx.output
        .kv("payment", confirmation.payment_method.display_name());
    ctx.output
        .kv("items", &confirmation.item_count().to_string());
    ctx.output.kv("total", &confirmation.total.display());
    Ok(())
}

/// Demo login. Blank fields re-prompt, the way the original form keeps its
/// dialog open; with flags there is nothing to re-ask, so they fail hard.
fn login(args: &CheckoutArgs, ctx: &Context, flow: &mut CheckoutFlow) -> Result<()> {
    let scripted = args.email.is_some() || args.password.is_some();
    loop {
        let email = match &args.email {
            Some(email) => email.clone(),
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Email")
                .allow_empty(true)
                .interact_text()?,
        };
        let password = match &args.password {
            Some(password) => password.clone(),
            None => Password::with_theme(&ColorfulTheme::default())
                .with_prompt("Password")
                .allow_empty_password(true)
                .interact()?,
        };

        match flow.login(&email, &password) {
            Ok(()) => return Ok(()),
            Err(e @ CheckoutError::MissingCredentials) => {
                if scripted {
                    bail!(e);
                }
                ctx.output.warn(&e.to_string());
            }
            Err(e) => bail!(e),
        }
    }
}

/// Payment method from the flag, or an interactive selection.
fn select_method(args: &CheckoutArgs) -> Result<PaymentMethod> {
    if let Some(raw) = &args.method {
        return match PaymentMethod::from_str(raw) {
            Ok(method) => Ok(method),
            Err(()) => bail!("unknown payment method: {raw} (expected card, wallet or cash)"),
        };
    }

    let names: Vec<&str> = PaymentMethod::ALL
        .iter()
        .map(|m| m.display_name())
        .collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Payment method")
        .items(&names)
        .default(0)
        .interact()?;
    Ok(PaymentMethod::ALL[index])
}
