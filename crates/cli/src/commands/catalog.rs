//! Catalog commands: listing and product creation.

use rust_decimal::Decimal;

use clementine_storefront::models::ProductDraft;

use crate::commands::{CliError, boot};

/// Print the product catalog in server order.
pub async fn list() -> Result<(), CliError> {
    let front = boot().await?;

    if front.products().is_empty() {
        println!("No products.");
        return Ok(());
    }

    for product in front.products() {
        let availability = if product.stock > 0 {
            format!("{} available", product.stock)
        } else {
            "out of stock".to_owned()
        };
        println!(
            "{}  {}  ${}  ({availability})",
            product.id, product.name, product.price
        );
        if !product.short_desc.is_empty() {
            println!("    {}", product.short_desc);
        }
    }
    Ok(())
}

/// Create a product and print the server-confirmed record.
pub async fn add_product(
    name: String,
    price: Decimal,
    stock: Option<u32>,
    short_desc: String,
    description: String,
) -> Result<(), CliError> {
    let mut front = boot().await?;

    // The form is admin-only; the state manager itself doesn't gate this
    if !front.session().is_some_and(|s| s.is_admin()) {
        return Err(CliError::Usage(
            "add-product requires an admin session (clem login)".to_owned(),
        ));
    }

    let draft = ProductDraft {
        name,
        price: Some(price),
        stock,
        short_desc,
        description,
    };
    let created = front.add_product(draft).await?;

    println!("Created {} ({})", created.name, created.id);
    Ok(())
}
