//! Cart commands: show, add, remove, clear, checkout.

use clementine_core::ProductId;
use clementine_storefront::StorefrontError;

use crate::commands::{CliError, boot};

/// Print cart lines and derived totals.
pub async fn show() -> Result<(), CliError> {
    let front = boot().await?;
    let cart = front.cart();

    if cart.is_empty() {
        println!("No item in cart!");
        return Ok(());
    }

    for line in cart.lines() {
        println!(
            "{}  {}  ${} x {} = ${}",
            line.product.id,
            line.product.name,
            line.product.price,
            line.quantity,
            line.line_total()
        );
    }
    println!(
        "{} line(s), {} item(s), subtotal ${}",
        cart.line_count(),
        cart.total_quantity(),
        cart.subtotal()
    );
    Ok(())
}

/// Add a catalog product to the cart.
pub async fn add(id: &str, quantity: u32) -> Result<(), CliError> {
    let mut front = boot().await?;
    let id = ProductId::from(id);

    let Some(product) = front.product(&id).cloned() else {
        return Err(CliError::Usage(format!("no product with id {id}")));
    };

    front.add_to_cart(&product, quantity)?;

    // the stored quantity may be clamped below what was asked for
    if let Some(line) = front.cart().get(&id) {
        println!("{} x {} in cart", line.quantity, line.product.name);
    }
    Ok(())
}

/// Remove a line from the cart.
pub async fn remove(id: &str) -> Result<(), CliError> {
    let mut front = boot().await?;
    front.remove_from_cart(&ProductId::from(id))?;
    println!("Removed.");
    Ok(())
}

/// Empty the cart.
pub async fn clear() -> Result<(), CliError> {
    let mut front = boot().await?;
    front.clear_cart()?;
    println!("Cart cleared.");
    Ok(())
}

/// Commit the cart as stock decrements.
pub async fn checkout() -> Result<(), CliError> {
    let mut front = boot().await?;

    let outcome = match front.checkout().await {
        Ok(outcome) => outcome,
        Err(StorefrontError::AuthenticationRequired) => {
            return Err(CliError::Usage(
                "checkout requires a session - run `clem login` first".to_owned(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    for product in &outcome.updated {
        println!("{}: stock now {}", product.name, product.stock);
    }
    for failure in &outcome.failed {
        println!(
            "{}: stock update not confirmed ({})",
            failure.product_id, failure.error
        );
    }
    println!("Checkout complete, cart emptied.");
    Ok(())
}
