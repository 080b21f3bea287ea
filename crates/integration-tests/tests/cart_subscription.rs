//! Change notification across tasks.

use std::time::Duration;

use sushi_shop_core::ProductId;
use sushi_shop_integration_tests::{line, test_state};
use sushi_shop_storefront::cart::{CartStore, selectors};

#[tokio::test]
async fn test_subscriber_observes_final_state() {
    let cart = CartStore::new();
    let mut sub = cart.subscribe();

    let reader = tokio::spawn(async move {
        let mut last_count = 0;
        while sub.changed().await {
            last_count = sub.select(selectors::item_count);
        }
        last_count
    });

    for _ in 0..5 {
        cart.add_item(line("A", "Roll", 999));
    }
    cart.set_quantity(&ProductId::new("A"), 7);
    drop(cart);

    let last = tokio::time::timeout(Duration::from_secs(5), reader)
        .await
        .expect("reader finished")
        .expect("reader did not panic");
    assert_eq!(last, 7);
}

#[tokio::test]
async fn test_no_op_commands_do_not_wake_subscribers() {
    let cart = CartStore::new();
    let mut sub = cart.subscribe();

    cart.remove_item(&ProductId::new("ghost"));
    cart.set_quantity(&ProductId::new("ghost"), 2);
    cart.set_open(false);
    cart.set_loading(false);
    cart.clear();

    let woke = tokio::time::timeout(Duration::from_millis(50), sub.changed()).await;
    assert!(woke.is_err(), "no-op commands must not notify");
}

#[tokio::test]
async fn test_many_subscribers_share_one_view() {
    let state = test_state().expect("test config");
    let cart = state.open_cart();
    let mut first = cart.subscribe();
    let mut second = cart.subscribe();
    assert_eq!(cart.subscriber_count(), 2);

    state
        .add_to_cart(&cart, &ProductId::new("8"))
        .expect("known product");

    assert!(first.changed().await);
    assert!(second.changed().await);
    assert_eq!(first.current(), second.current());
    assert_eq!(first.current(), cart.snapshot());
}
