// metro-client/tests/client_integration.rs
// Integration tests: config, local storage, cart session

use metro_client::{CartSession, CartStorage, ClientConfig, HttpClient, Session, SessionStorage};
use shared::models::{Account, CartItem, TicketKind, Voucher, VoucherStatus};
use tempfile::TempDir;

fn account() -> Account {
    Account {
        id: "acc-1".to_string(),
        username: "rider1".to_string(),
        full_name: "Test Rider".to_string(),
        phone: None,
        email: Some("rider1@example.com".to_string()),
        is_member: true,
        created_at: 0,
    }
}

fn journey_line(quantity: i32, unit_price: f64) -> CartItem {
    CartItem::new(TicketKind::PointToPoint, "journey-1", "Central → Harbour", quantity, unit_price)
}

fn valid_voucher(discount: f64, minimum: f64) -> Voucher {
    Voucher {
        id: "v1".to_string(),
        code: "WELCOME5".to_string(),
        title: Some("Welcome".to_string()),
        discount_amount: discount,
        min_transaction_amount: minimum,
        status: VoucherStatus::Valid,
        valid_until: None,
    }
}

#[tokio::test]
async fn test_session_storage() {
    let temp_dir = TempDir::new().unwrap();
    let storage = SessionStorage::new(temp_dir.path(), "session.json");

    let session = Session::new("test-token".to_string(), account(), None);

    storage.save(&session).unwrap();
    assert!(storage.exists());

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.token, "test-token");
    assert_eq!(loaded.account.username, "rider1");

    storage.delete().unwrap();
    assert!(!storage.exists());
    assert!(storage.load().is_none());
}

#[tokio::test]
async fn test_session_is_expired() {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();

    // Session without expiry
    let s1 = Session::new("token".to_string(), account(), None);
    assert!(!s1.is_expired());

    // Session with future expiry
    let s2 = Session::new("token".to_string(), account(), Some(now + 3600));
    assert!(!s2.is_expired());

    // Session with past expiry
    let s3 = Session::new("token".to_string(), account(), Some(now - 3600));
    assert!(s3.is_expired());
}

#[tokio::test]
async fn test_client_config_builder() {
    let config = ClientConfig::new("http://localhost:9000/")
        .with_token("abc")
        .with_timeout(5);
    assert_eq!(config.base_url, "http://localhost:9000/");
    assert_eq!(config.token.as_deref(), Some("abc"));
    assert_eq!(config.timeout, 5);

    let client = config.build_http_client().unwrap();
    assert_eq!(client.base_url(), "http://localhost:9000");
    assert_eq!(client.token().as_deref(), Some("abc"));

    client.set_token(Some("rotated".to_string()));
    assert_eq!(client.token().as_deref(), Some("rotated"));
    client.set_token(None);
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_cart_add_merges_same_reference() {
    let mut cart = CartSession::new();
    cart.add_item(journey_line(1, 10.0)).unwrap();
    cart.add_item(journey_line(2, 10.0)).unwrap();

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 3);
    assert_eq!(cart.totals().subtotal, 30.0);
}

#[tokio::test]
async fn test_cart_update_remove_clear() {
    let mut cart = CartSession::new();
    cart.add_item(journey_line(2, 10.0)).unwrap();
    let instance_id = cart.items()[0].instance_id.clone();

    cart.update_quantity(&instance_id, 5).unwrap();
    assert_eq!(cart.totals().subtotal, 50.0);

    assert!(cart.update_quantity(&instance_id, 0).is_err());
    assert!(cart.update_quantity("missing", 1).is_err());

    assert!(cart.remove_item(&instance_id));
    assert!(!cart.remove_item(&instance_id));
    assert!(cart.items().is_empty());

    cart.add_item(journey_line(1, 10.0)).unwrap();
    cart.clear();
    assert!(cart.items().is_empty());
    assert_eq!(cart.totals().subtotal, 0.0);
}

#[tokio::test]
async fn test_cart_voucher_selection_gate() {
    let mut cart = CartSession::new();
    cart.add_item(journey_line(2, 10.0)).unwrap();

    // Below the voucher minimum: selection is a no-op
    assert!(!cart.select_voucher(valid_voucher(5.0, 50.0)));
    assert!(cart.selected_voucher().is_none());
    assert_eq!(cart.totals().voucher_deduction, 0.0);

    // At the minimum: selection sticks and deducts
    assert!(cart.select_voucher(valid_voucher(5.0, 20.0)));
    assert!(cart.selected_voucher().is_some());
    let totals = cart.totals();
    assert_eq!(totals.voucher_deduction, 5.0);
    assert_eq!(totals.final_total, 15.0);

    // Non-valid voucher never selects
    let mut used = valid_voucher(5.0, 0.0);
    used.status = VoucherStatus::Used;
    assert!(!cart.select_voucher(used));
}

#[tokio::test]
async fn test_cart_voucher_deduction_drops_when_subtotal_falls() {
    let mut cart = CartSession::new();
    cart.add_item(journey_line(5, 10.0)).unwrap();
    assert!(cart.select_voucher(valid_voucher(5.0, 40.0)));

    // Mutating the cart below the minimum keeps the selection but the
    // deduction goes to zero.
    let instance_id = cart.items()[0].instance_id.clone();
    cart.update_quantity(&instance_id, 2).unwrap();
    let totals = cart.totals();
    assert_eq!(totals.subtotal, 20.0);
    assert_eq!(totals.voucher_deduction, 0.0);
    assert_eq!(totals.final_total, 20.0);
}

#[tokio::test]
async fn test_cart_membership_and_snapshot_observation() {
    let mut cart = CartSession::new();
    let rx = cart.subscribe();

    cart.add_item(journey_line(2, 10.0)).unwrap();
    cart.set_membership_percentage(Some(0.1));

    let snapshot = rx.borrow().clone();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.totals.subtotal, 20.0);
    assert_eq!(snapshot.totals.membership_deduction, 2.0);
    assert_eq!(snapshot.totals.final_total, 18.0);
}

#[tokio::test]
async fn test_cart_persistence_round_trip() {
    let temp_dir = TempDir::new().unwrap();

    {
        let storage = CartStorage::new(temp_dir.path(), "cart.json");
        let mut cart = CartSession::with_storage(storage);
        cart.add_item(journey_line(2, 10.0)).unwrap();
    }

    // A new session against the same file restores the lines
    let storage = CartStorage::new(temp_dir.path(), "cart.json");
    let cart = CartSession::with_storage(storage.clone());
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 2);
    assert_eq!(cart.totals().subtotal, 20.0);

    storage.delete().unwrap();
    assert!(!storage.exists());
}
