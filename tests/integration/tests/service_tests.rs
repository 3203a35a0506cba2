//! Service Integration Tests
//!
//! Each test drives the full service stack against its own in-memory
//! SQLite database, so no external services are required.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use integration_tests::{fixtures::*, viewer_of, TestApp};
use pos_common::config::AuthConfig;
use pos_core::value_objects::{LockoutPolicy, ProductId, Role, SaleId, UserId};
use pos_service::dto::{PurchaseLine, PurchaseRequest};
use pos_service::services::{AuthOutcome, ServiceError};
use rust_decimal::Decimal;

fn decimal(raw: &str) -> Decimal {
    raw.parse().expect("valid decimal literal")
}

// ============================================================================
// Registration and Login Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    let app = TestApp::start().await.expect("Failed to start app");
    let email = unique_email("alice");

    let user = app
        .auth()
        .register(register_request(&email, "StorePass123"))
        .await
        .expect("Registration failed");

    assert_eq!(user.email, email);
    assert_eq!(user.role, Role::Customer);
    assert_eq!(user.full_name, "Alice Reyes");
    assert!(!user.is_locked);

    let outcome = app
        .auth()
        .authenticate(login_request(&email, "StorePass123"))
        .await
        .expect("Login failed");

    match outcome {
        AuthOutcome::Valid(logged_in) => assert_eq!(logged_in.email, email),
        other => panic!("expected Valid, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::start().await.expect("Failed to start app");
    let email = unique_email("dup");

    app.auth()
        .register(register_request(&email, "StorePass123"))
        .await
        .expect("Registration failed");

    let err = app
        .auth()
        .register(register_request(&email, "OtherPass456"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
async fn test_register_rejects_weak_passwords() {
    let app = TestApp::start().await.expect("Failed to start app");

    for password in ["Sh0rt", "alllowercase1", "ALLUPPERCASE1", "NoDigitsHere"] {
        let err = app
            .auth()
            .register(register_request(&unique_email("weak"), password))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400, "password {password:?} got through");
    }
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::start().await.expect("Failed to start app");
    let email = unique_email("carol");

    app.auth()
        .register(register_request(&email, "StorePass123"))
        .await
        .expect("Registration failed");

    // An unknown account and a wrong password answer the same way.
    let unknown = app
        .auth()
        .authenticate(login_request("nobody@example.com", "StorePass123"))
        .await
        .expect("Login failed");
    let wrong = app
        .auth()
        .authenticate(login_request(&email, "WrongPass123"))
        .await
        .expect("Login failed");

    assert!(matches!(unknown, AuthOutcome::Invalid));
    assert!(matches!(wrong, AuthOutcome::Invalid));
}

// ============================================================================
// Lockout Tests
// ============================================================================

#[tokio::test]
async fn test_account_locks_after_consecutive_failures() {
    let app = TestApp::start().await.expect("Failed to start app");
    let email = unique_email("locked");

    app.auth()
        .register(register_request(&email, "StorePass123"))
        .await
        .expect("Registration failed");

    for _ in 0..3 {
        let outcome = app
            .auth()
            .authenticate(login_request(&email, "WrongPass123"))
            .await
            .expect("Login failed");
        assert!(matches!(outcome, AuthOutcome::Invalid));
    }

    // The correct password no longer helps; the gate answers before any
    // credential check.
    let outcome = app
        .auth()
        .authenticate(login_request(&email, "StorePass123"))
        .await
        .expect("Login failed");
    assert!(matches!(outcome, AuthOutcome::Locked));

    let outcome = app
        .auth()
        .authenticate(login_request(&email, "WrongPass123"))
        .await
        .expect("Login failed");
    assert!(matches!(outcome, AuthOutcome::Locked));
}

#[tokio::test]
async fn test_successful_login_resets_the_counter() {
    let app = TestApp::start().await.expect("Failed to start app");
    let email = unique_email("reset");

    app.auth()
        .register(register_request(&email, "StorePass123"))
        .await
        .expect("Registration failed");

    // Two rounds of two failures each, separated by a success; the account
    // never reaches three consecutive failures.
    for _ in 0..2 {
        for _ in 0..2 {
            let outcome = app
                .auth()
                .authenticate(login_request(&email, "WrongPass123"))
                .await
                .expect("Login failed");
            assert!(matches!(outcome, AuthOutcome::Invalid));
        }

        let outcome = app
            .auth()
            .authenticate(login_request(&email, "StorePass123"))
            .await
            .expect("Login failed");
        assert!(matches!(outcome, AuthOutcome::Valid(_)));
    }
}

#[tokio::test]
async fn test_admin_unlock_restores_access() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");
    let seller = app
        .seed_user(&unique_email("seller"), Role::Seller, "SellerPass123")
        .await
        .expect("Failed to seed seller");

    let email = unique_email("victim");
    let user = app
        .auth()
        .register(register_request(&email, "StorePass123"))
        .await
        .expect("Registration failed");
    let user_id = UserId::new(user.id.parse().expect("numeric id"));

    for _ in 0..3 {
        app.auth()
            .authenticate(login_request(&email, "WrongPass123"))
            .await
            .expect("Login failed");
    }
    let outcome = app
        .auth()
        .authenticate(login_request(&email, "StorePass123"))
        .await
        .expect("Login failed");
    assert!(matches!(outcome, AuthOutcome::Locked));

    // Only user managers may unlock.
    let err = app.users().unlock_account(&seller, user_id).await.unwrap_err();
    assert_eq!(err.status_code(), 403);

    app.users()
        .unlock_account(&admin, user_id)
        .await
        .expect("Unlock failed");

    let outcome = app
        .auth()
        .authenticate(login_request(&email, "StorePass123"))
        .await
        .expect("Login failed");
    assert!(matches!(outcome, AuthOutcome::Valid(_)));
}

#[tokio::test]
async fn test_lowered_threshold_locks_on_next_login() {
    let app = TestApp::start_with_policy(LockoutPolicy::new(5))
        .await
        .expect("Failed to start app");
    let email = unique_email("policy");

    app.auth()
        .register(register_request(&email, "StorePass123"))
        .await
        .expect("Registration failed");

    // Three failures: under this policy the account stays active.
    for _ in 0..3 {
        let outcome = app
            .auth()
            .authenticate(login_request(&email, "WrongPass123"))
            .await
            .expect("Login failed");
        assert!(matches!(outcome, AuthOutcome::Invalid));
    }

    // After a restart with a stricter configured threshold the stored
    // counter already meets it, so the next attempt is rejected and the
    // flag persisted.
    let config = AuthConfig {
        max_login_attempts: 3,
    };
    let stricter = app.with_policy(config.lockout_policy());
    let outcome = stricter
        .auth()
        .authenticate(login_request(&email, "StorePass123"))
        .await
        .expect("Login failed");
    assert!(matches!(outcome, AuthOutcome::Locked));

    // The persisted flag holds even under the original lenient policy.
    let outcome = app
        .auth()
        .authenticate(login_request(&email, "StorePass123"))
        .await
        .expect("Login failed");
    assert!(matches!(outcome, AuthOutcome::Locked));
}

// ============================================================================
// User Directory Tests
// ============================================================================

#[tokio::test]
async fn test_admin_manages_the_user_directory() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");

    let email = unique_email("staff");
    let created = app
        .users()
        .create_user(&admin, create_user_request(&email, "SellerPass123", "seller"))
        .await
        .expect("Create failed");
    assert_eq!(created.role, Role::Seller);
    assert_eq!(created.full_name, "Blas Cruz");

    let listed = app.users().list_users(&admin).await.expect("List failed");
    assert!(listed.iter().any(|u| u.email == email));

    let id = UserId::new(created.id.parse().expect("numeric id"));
    let fetched = app.users().get_user(&admin, id).await.expect("Get failed");
    assert_eq!(fetched.email, email);

    // Sellers hold no directory capability.
    let seller = app
        .seed_user(&unique_email("seller"), Role::Seller, "SellerPass123")
        .await
        .expect("Failed to seed seller");
    let err = app.users().list_users(&seller).await.unwrap_err();
    assert_eq!(err.status_code(), 403);
    let err = app
        .users()
        .create_user(
            &seller,
            create_user_request(&unique_email("x"), "SellerPass123", "customer"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::PermissionDenied { .. }));
}

#[tokio::test]
async fn test_admin_updates_and_deletes_accounts() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");

    let created = app
        .users()
        .create_user(
            &admin,
            create_user_request(&unique_email("blas"), "StorePass123", "customer"),
        )
        .await
        .expect("Create failed");
    let id = UserId::new(created.id.parse().expect("numeric id"));

    let moved = unique_email("moved");
    let updated = app
        .users()
        .update_user(&admin, id, update_user_request(&moved, "seller"))
        .await
        .expect("Update failed");
    assert_eq!(updated.email, moved);
    assert_eq!(updated.role, Role::Seller);
    assert_eq!(updated.full_name, "Blas D Cruz");
    assert_eq!(updated.address, "9 Rizal Ave");

    app.users()
        .delete_user(&admin, id)
        .await
        .expect("Delete failed");

    let err = app.users().delete_user(&admin, id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
    let err = app.users().get_user(&admin, id).await.unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_role_is_rejected() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");

    let err = app
        .users()
        .create_user(
            &admin,
            create_user_request(&unique_email("odd"), "StorePass123", "manager"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(err.status_code(), 400);
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_catalog_lifecycle() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");
    let registered = app
        .auth()
        .register(register_request(&unique_email("shopper"), "StorePass123"))
        .await
        .expect("Registration failed");
    let customer = viewer_of(&registered);

    let product = app
        .inventory()
        .add_product(&admin, product_request("Espresso Beans", "SKU-100", 10, "19.99"))
        .await
        .expect("Add failed");
    assert_eq!(product.price, decimal("19.99"));
    assert_eq!(product.quantity, 10);

    // Everyone browses.
    let listed = app
        .inventory()
        .list_products(&customer)
        .await
        .expect("List failed");
    assert_eq!(listed.len(), 1);

    // Customers cannot touch the catalog.
    let err = app
        .inventory()
        .add_product(&customer, product_request("Mug", "SKU-999", 1, "5.00"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);

    let id = ProductId::new(product.id.parse().expect("numeric id"));
    let updated = app
        .inventory()
        .update_product(
            &admin,
            id,
            update_product_request("Espresso Beans 1kg", "SKU-100", 8, "22.00"),
        )
        .await
        .expect("Update failed");
    assert_eq!(updated.name, "Espresso Beans 1kg");
    assert_eq!(updated.quantity, 8);

    app.inventory()
        .remove_product(&admin, id)
        .await
        .expect("Remove failed");
    // Retiring twice is a no-op.
    app.inventory()
        .remove_product(&admin, id)
        .await
        .expect("Second remove failed");

    assert!(app
        .inventory()
        .list_products(&customer)
        .await
        .expect("List failed")
        .is_empty());
    let err = app.inventory().get_product(&customer, id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    // The sku is free again for a replacement product.
    app.inventory()
        .add_product(&admin, product_request("Espresso Beans v2", "SKU-100", 4, "21.99"))
        .await
        .expect("Sku reuse failed");
}

#[tokio::test]
async fn test_duplicate_sku_is_a_conflict() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");

    app.inventory()
        .add_product(&admin, product_request("Espresso Beans", "SKU-200", 10, "19.99"))
        .await
        .expect("Add failed");

    let err = app
        .inventory()
        .add_product(&admin, product_request("Other Beans", "SKU-200", 3, "9.99"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 409);
    assert_eq!(err.error_code(), "DUPLICATE_SKU");
}

#[tokio::test]
async fn test_price_strings_are_validated() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");

    for bad in ["free", "", "-1.00"] {
        let sku = format!("SKU-{}", unique_suffix());
        let err = app
            .inventory()
            .add_product(&admin, product_request("Mystery Item", &sku, 1, bad))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400, "price {bad:?} got through");
    }
}

// ============================================================================
// Purchase Tests
// ============================================================================

#[tokio::test]
async fn test_purchase_snapshots_prices_and_decrements_stock() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");
    let registered = app
        .auth()
        .register(register_request(&unique_email("buyer"), "StorePass123"))
        .await
        .expect("Registration failed");
    let customer = viewer_of(&registered);

    let product = app
        .inventory()
        .add_product(&admin, product_request("Espresso Beans", "SKU-300", 5, "19.99"))
        .await
        .expect("Add failed");
    let product_id: i64 = product.id.parse().expect("numeric id");

    let sale = app
        .sales()
        .purchase(&customer, purchase_of(product_id, 2))
        .await
        .expect("Purchase failed");
    assert_eq!(sale.total, decimal("39.98"));
    assert_eq!(sale.customer_email, customer.email);

    let remaining = app
        .inventory()
        .get_product(&customer, ProductId::new(product_id))
        .await
        .expect("Get failed");
    assert_eq!(remaining.quantity, 3);

    // Reprice after the sale; history keeps the old number.
    app.inventory()
        .update_product(
            &admin,
            ProductId::new(product_id),
            update_product_request("Espresso Beans", "SKU-300", 3, "25.00"),
        )
        .await
        .expect("Update failed");

    let sale_id = SaleId::new(sale.id.parse().expect("numeric id"));
    let detail = app
        .sales()
        .sale_detail(&customer, sale_id)
        .await
        .expect("Detail failed");
    assert_eq!(detail.sale.total, decimal("39.98"));
    assert_eq!(detail.lines.len(), 1);
    assert_eq!(detail.lines[0].price, decimal("19.99"));
    assert_eq!(detail.lines[0].subtotal, decimal("39.98"));
}

#[tokio::test]
async fn test_oversell_leaves_nothing_behind() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");
    let seller = app
        .seed_user(&unique_email("seller"), Role::Seller, "SellerPass123")
        .await
        .expect("Failed to seed seller");

    let beans = app
        .inventory()
        .add_product(&admin, product_request("Espresso Beans", "SKU-400", 5, "19.99"))
        .await
        .expect("Add failed");
    let grinder = app
        .inventory()
        .add_product(&admin, product_request("Burr Grinder", "SKU-401", 1, "54.50"))
        .await
        .expect("Add failed");
    let beans_id: i64 = beans.id.parse().expect("numeric id");
    let grinder_id: i64 = grinder.id.parse().expect("numeric id");

    let request = PurchaseRequest {
        customer: None,
        lines: vec![
            PurchaseLine {
                product_id: beans_id,
                quantity: 1,
            },
            PurchaseLine {
                product_id: grinder_id,
                quantity: 3,
            },
        ],
    };
    let err = app.sales().purchase(&seller, request).await.unwrap_err();
    assert_eq!(err.status_code(), 409);
    assert_eq!(err.error_code(), "INSUFFICIENT_STOCK");

    // Stock untouched, no sale recorded.
    let beans_now = app
        .inventory()
        .get_product(&seller, ProductId::new(beans_id))
        .await
        .expect("Get failed");
    assert_eq!(beans_now.quantity, 5);
    let grinder_now = app
        .inventory()
        .get_product(&seller, ProductId::new(grinder_id))
        .await
        .expect("Get failed");
    assert_eq!(grinder_now.quantity, 1);
    assert!(app
        .sales()
        .list_sales(&seller)
        .await
        .expect("List failed")
        .is_empty());
}

#[tokio::test]
async fn test_last_unit_cannot_sell_twice() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");
    let alice = viewer_of(
        &app.auth()
            .register(register_request(&unique_email("alice"), "StorePass123"))
            .await
            .expect("Registration failed"),
    );
    let bob = viewer_of(
        &app.auth()
            .register(register_request(&unique_email("bob"), "StorePass123"))
            .await
            .expect("Registration failed"),
    );

    let grinder = app
        .inventory()
        .add_product(&admin, product_request("Burr Grinder", "SKU-450", 1, "54.50"))
        .await
        .expect("Add failed");
    let grinder_id: i64 = grinder.id.parse().expect("numeric id");

    app.sales()
        .purchase(&alice, purchase_of(grinder_id, 1))
        .await
        .expect("Purchase failed");

    // The shelf is empty now; the same request from a second buyer is
    // turned away and stock never goes negative.
    let err = app
        .sales()
        .purchase(&bob, purchase_of(grinder_id, 1))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "INSUFFICIENT_STOCK");

    let grinder_now = app
        .inventory()
        .get_product(&admin, ProductId::new(grinder_id))
        .await
        .expect("Get failed");
    assert_eq!(grinder_now.quantity, 0);
}

#[tokio::test]
async fn test_purchase_validation() {
    let app = TestApp::start().await.expect("Failed to start app");
    let registered = app
        .auth()
        .register(register_request(&unique_email("buyer"), "StorePass123"))
        .await
        .expect("Registration failed");
    let customer = viewer_of(&registered);

    let err = app
        .sales()
        .purchase(
            &customer,
            PurchaseRequest {
                customer: None,
                lines: vec![],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    let err = app
        .sales()
        .purchase(&customer, purchase_of(1, 0))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    let err = app
        .sales()
        .purchase(&customer, purchase_of(999_999, 1))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_walk_in_identity_rules() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");
    let seller = app
        .seed_user(&unique_email("seller"), Role::Seller, "SellerPass123")
        .await
        .expect("Failed to seed seller");
    let registered = app
        .auth()
        .register(register_request(&unique_email("buyer"), "StorePass123"))
        .await
        .expect("Registration failed");
    let customer = viewer_of(&registered);

    let product = app
        .inventory()
        .add_product(&admin, product_request("Espresso Beans", "SKU-500", 10, "19.99"))
        .await
        .expect("Add failed");
    let product_id: i64 = product.id.parse().expect("numeric id");

    // Customers cannot buy under someone else's name.
    let err = app
        .sales()
        .purchase(
            &customer,
            walk_in_purchase("Bob Cruz", "bob@example.com", product_id, 1),
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);

    // Staff record walk-in buyers.
    let sale = app
        .sales()
        .purchase(
            &seller,
            walk_in_purchase("Bob Cruz", "bob@example.com", product_id, 1),
        )
        .await
        .expect("Purchase failed");
    assert_eq!(sale.customer_name, "Bob Cruz");
    assert_eq!(sale.customer_email, "bob@example.com");

    // The sale belongs to the walk-in buyer, not to the seller's history.
    let all = app.sales().list_sales(&seller).await.expect("List failed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].recorded_by.as_deref(), Some("Test Seller"));
    assert!(app
        .sales()
        .list_sales(&customer)
        .await
        .expect("List failed")
        .is_empty());
}

// ============================================================================
// Sales Visibility Tests
// ============================================================================

#[tokio::test]
async fn test_sales_visibility_is_scoped_by_role() {
    let app = TestApp::start().await.expect("Failed to start app");
    let admin = app
        .seed_user(&unique_email("admin"), Role::Admin, "AdminPass123")
        .await
        .expect("Failed to seed admin");

    let alice = viewer_of(
        &app.auth()
            .register(register_request(&unique_email("alice"), "StorePass123"))
            .await
            .expect("Registration failed"),
    );
    let bob = viewer_of(
        &app.auth()
            .register(register_request(&unique_email("bob"), "StorePass123"))
            .await
            .expect("Registration failed"),
    );

    let product = app
        .inventory()
        .add_product(&admin, product_request("Espresso Beans", "SKU-600", 10, "19.99"))
        .await
        .expect("Add failed");
    let product_id: i64 = product.id.parse().expect("numeric id");

    app.sales()
        .purchase(&alice, purchase_of(product_id, 1))
        .await
        .expect("Purchase failed");
    app.sales()
        .purchase(&bob, purchase_of(product_id, 2))
        .await
        .expect("Purchase failed");

    // Customers see their own purchases, without the recording user.
    let mine = app.sales().list_sales(&alice).await.expect("List failed");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].customer_email, alice.email);
    assert!(mine[0].recorded_by.is_none());

    // Staff see everything.
    let all = app.sales().list_sales(&admin).await.expect("List failed");
    assert_eq!(all.len(), 2);

    let bobs_sale = all
        .iter()
        .find(|s| s.customer_email == bob.email)
        .expect("Bob's sale missing");
    let bobs_id = SaleId::new(bobs_sale.id.parse().expect("numeric id"));

    // Customers cannot open someone else's sale.
    let err = app.sales().sale_detail(&alice, bobs_id).await.unwrap_err();
    assert_eq!(err.status_code(), 403);

    let detail = app
        .sales()
        .sale_detail(&admin, bobs_id)
        .await
        .expect("Detail failed");
    assert_eq!(detail.sale.customer_email, bob.email);
    assert_eq!(detail.lines.len(), 1);
}
