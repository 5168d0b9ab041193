//! End-to-end storefront flows against a mock catalog server.
//!
//! Each test scripts the catalog API with mockito, drives the state manager
//! through the public operations, and asserts both the visible state and the
//! requests the server actually received.

#![allow(clippy::unwrap_used)]

use clementine_core::{AccessLevel, ProductId};
use clementine_integration_tests::{TestContext, product_json};
use clementine_storefront::StorefrontError;
use clementine_storefront::storage::{StateKey, StateStore};
use mockito::Matcher;
use secrecy::SecretString;

fn secret(s: &str) -> SecretString {
    SecretString::from(s)
}

#[tokio::test]
async fn shopping_flow_decrements_stock_and_empties_cart() {
    let mut ctx = TestContext::new().await;

    let products = ctx
        .server
        .mock("GET", "/products")
        .with_status(200)
        .with_body(
            serde_json::json!([
                product_json("p-a", "Apple crate", "2.50", 5),
                product_json("p-b", "Pear crate", "4.00", 2),
            ])
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let login = ctx
        .server
        .mock("POST", "/login")
        .match_body(Matcher::Json(serde_json::json!({
            "email": "shopper@example.com",
            "password": "hunter2",
        })))
        .with_status(200)
        .with_body(r#"{"accessToken":"tok-1"}"#)
        .expect(1)
        .create_async()
        .await;

    // checkout must PUT the full record with the decremented stock
    let put = ctx
        .server
        .mock("PUT", "/products/p-a")
        .match_body(Matcher::Json(product_json("p-a", "Apple crate", "2.50", 3)))
        .with_status(200)
        .with_body(product_json("p-a", "Apple crate", "2.50", 3).to_string())
        .expect(1)
        .create_async()
        .await;

    let mut front = ctx.storefront();
    front.initialize().await.unwrap();
    assert_eq!(front.products().len(), 2);

    assert!(
        front
            .authenticate("shopper@example.com", &secret("hunter2"))
            .await
            .unwrap()
    );
    assert_eq!(
        front.session().unwrap().access_level,
        AccessLevel::Customer
    );

    let apple = front.product(&ProductId::new("p-a")).cloned().unwrap();
    front.add_to_cart(&apple, 2).unwrap();

    let outcome = front.checkout().await.unwrap();

    assert!(outcome.is_clean());
    assert_eq!(outcome.updated.len(), 1);
    assert_eq!(front.product(&ProductId::new("p-a")).unwrap().stock, 3);
    // the untouched product was not PUT
    assert_eq!(front.product(&ProductId::new("p-b")).unwrap().stock, 2);
    assert!(front.cart().is_empty());

    products.assert_async().await;
    login.assert_async().await;
    put.assert_async().await;
}

#[tokio::test]
async fn admin_identity_gets_admin_session() {
    let mut ctx = TestContext::new().await;

    ctx.server
        .mock("GET", "/products")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    ctx.server
        .mock("POST", "/login")
        .with_status(200)
        .with_body(r#"{"accessToken":"tok-admin"}"#)
        .create_async()
        .await;

    let mut front = ctx.storefront();
    front.initialize().await.unwrap();

    assert!(
        front
            .authenticate("admin@example.com", &secret("hunter2"))
            .await
            .unwrap()
    );
    assert!(front.session().unwrap().is_admin());
}

#[tokio::test]
async fn rejected_login_leaves_no_durable_session() {
    let mut ctx = TestContext::new().await;

    ctx.server
        .mock("GET", "/products")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    ctx.server
        .mock("POST", "/login")
        .with_status(401)
        .create_async()
        .await;

    let mut front = ctx.storefront();
    front.initialize().await.unwrap();

    let ok = front
        .authenticate("shopper@example.com", &secret("wrong"))
        .await
        .unwrap();

    assert!(!ok);
    assert!(front.session().is_none());
    assert!(!ctx.state_dir.path().join("user.json").exists());
}

#[tokio::test]
async fn cart_survives_restart() {
    let mut ctx = TestContext::new().await;

    ctx.server
        .mock("GET", "/products")
        .with_status(200)
        .with_body(
            serde_json::json!([product_json("p-a", "Apple crate", "2.50", 5)]).to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    {
        let mut front = ctx.storefront();
        front.initialize().await.unwrap();
        let apple = front.product(&ProductId::new("p-a")).cloned().unwrap();
        front.add_to_cart(&apple, 3).unwrap();
    }

    // a second storefront over the same state dir is a fresh process
    let mut front = ctx.storefront();
    front.initialize().await.unwrap();

    let line = front.cart().get(&ProductId::new("p-a")).unwrap();
    assert_eq!(line.quantity, 3);
}

#[tokio::test]
async fn cleared_cart_stays_empty_after_restart() {
    let mut ctx = TestContext::new().await;

    ctx.server
        .mock("GET", "/products")
        .with_status(200)
        .with_body(
            serde_json::json!([product_json("p-a", "Apple crate", "2.50", 5)]).to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    {
        let mut front = ctx.storefront();
        front.initialize().await.unwrap();
        let apple = front.product(&ProductId::new("p-a")).cloned().unwrap();
        front.add_to_cart(&apple, 2).unwrap();
        front.clear_cart().unwrap();
    }

    let mut front = ctx.storefront();
    front.initialize().await.unwrap();
    assert!(front.cart().is_empty());
}

#[tokio::test]
async fn catalog_outage_is_reported_but_state_survives() {
    let mut ctx = TestContext::new().await;

    ctx.server
        .mock("GET", "/products")
        .with_status(503)
        .with_body("down for maintenance")
        .create_async()
        .await;

    // a cart persisted by an earlier run
    let store = clementine_storefront::storage::FileStore::new(
        ctx.state_dir.path().to_path_buf(),
    )
    .unwrap();
    let cart_record = serde_json::json!({
        "p-a": { "product": product_json("p-a", "Apple crate", "2.50", 5), "quantity": 2 }
    });
    store
        .set(StateKey::Cart, &cart_record.to_string())
        .unwrap();

    let mut front = ctx.storefront();
    let err = front.initialize().await.unwrap_err();

    assert!(matches!(err, StorefrontError::CatalogUnavailable(_)));
    assert!(front.products().is_empty());
    // the persisted cart is still restored
    assert_eq!(front.cart().line_count(), 1);
}

#[tokio::test]
async fn created_product_appears_in_catalog() {
    let mut ctx = TestContext::new().await;

    ctx.server
        .mock("GET", "/products")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    // the server echoes the created record back
    let post = ctx
        .server
        .mock("POST", "/products")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "name": "Quince crate",
            "price": "9.99",
            "stock": 4,
        })))
        .with_status(200)
        .with_body(product_json("p-server", "Quince crate", "9.99", 4).to_string())
        .expect(1)
        .create_async()
        .await;

    let mut front = ctx.storefront();
    front.initialize().await.unwrap();

    let draft = clementine_storefront::models::ProductDraft {
        name: "Quince crate".to_owned(),
        price: Some(rust_decimal::Decimal::new(999, 2)),
        stock: Some(4),
        ..Default::default()
    };
    let created = front.add_product(draft).await.unwrap();

    // the in-memory catalog holds the server-confirmed record
    assert_eq!(created.id, ProductId::new("p-server"));
    assert_eq!(front.products().len(), 1);
    post.assert_async().await;
}
