//! Sessions over a real storage directory.

use amrong_commerce::prelude::*;
use amrong_store::Store;

fn open(dir: &std::path::Path) -> Storefront<StoreCartRepository, RecordingSink> {
    let store = Store::open_dir(dir).unwrap();
    Storefront::open(store, RecordingSink::new()).unwrap()
}

#[test]
fn cart_survives_a_new_session() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut shop = open(dir.path());
        shop.order_now("original-chicken").unwrap();
        shop.order_now("original-chicken").unwrap();
        shop.order_now("french-fries").unwrap();
        shop.order_now("cola-drink").unwrap();
        shop.remove(&ItemId::new("cola-drink")).unwrap();
    }

    let shop = open(dir.path());
    let lines: Vec<(&str, u32)> = shop
        .cart()
        .items()
        .iter()
        .map(|i| (i.id.as_str(), i.quantity))
        .collect();
    assert_eq!(lines, vec![("original-chicken", 2), ("french-fries", 1)]);
    assert_eq!(shop.cart().compute_total().display(), "$26.97");
}

#[test]
fn corrupt_cart_file_starts_empty_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "definitely not json").unwrap();

    let mut shop = open(dir.path());
    assert!(shop.cart().is_empty());

    shop.order_now("honey-wings").unwrap();
    let reopened = open(dir.path());
    assert_eq!(reopened.cart().len(), 1);
}

#[test]
fn reads_cart_written_by_the_browser_storefront() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("cart.json"),
        r#"[{"id":"spicy-chicken","name":"Spicy Chicken","price":11.99,"quantity":2,"details":{}},
            {"id":"orange-juice","name":"Orange Juice","price":3.99,"quantity":1,"details":{}}]"#,
    )
    .unwrap();

    let mut shop = open(dir.path());
    assert_eq!(shop.cart().compute_total().display(), "$27.97");

    shop.order_now("spicy-chicken").unwrap();
    assert_eq!(shop.cart().get(&ItemId::new("spicy-chicken")).unwrap().quantity, 3);
}

#[test]
fn checkout_clears_the_stored_cart() {
    let dir = tempfile::tempdir().unwrap();

    let mut shop = open(dir.path());
    shop.order_now("bbq-chicken").unwrap();
    let summary = shop.checkout().unwrap();
    assert_eq!(summary.total.display(), "$13.99");
    assert!(summary.to_string().contains("BBQ Chicken x1: $13.99"));

    let reopened = open(dir.path());
    assert!(reopened.cart().is_empty());
}

#[test]
fn submissions_land_in_their_own_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut shop = open(dir.path());

    shop.submit_reservation(ReservationForm {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        date: "2026-10-20".to_string(),
        time: "19:00".to_string(),
        guests: "3".to_string(),
        phone: "+1 555 123 4567".to_string(),
    })
    .unwrap();
    shop.submit_contact(ContactForm {
        name: "Sam".to_string(),
        email: "sam@example.org".to_string(),
        message: "Gluten free options?".to_string(),
    })
    .unwrap();

    assert!(dir.path().join("reservations.json").is_file());
    assert!(dir.path().join("contactMessages.json").is_file());
    // Submissions never touch the cart.
    assert!(!dir.path().join("cart.json").exists());

    let reopened = open(dir.path());
    assert_eq!(reopened.reservations().entries().unwrap().len(), 1);
    assert_eq!(reopened.contacts().entries().unwrap()[0].name, "Sam");
}

#[test]
fn failed_submissions_leave_no_trace() {
    let dir = tempfile::tempdir().unwrap();
    let mut shop = open(dir.path());

    let err = shop
        .submit_reservation(ReservationForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            date: "2026-10-20".to_string(),
            time: "19:00".to_string(),
            guests: "3".to_string(),
            phone: "call me".to_string(),
        })
        .unwrap_err();

    assert!(err.is_user_facing());
    assert!(shop.sink().last().unwrap().is_error());
    assert!(!dir.path().join("reservations.json").exists());
}

#[test]
fn reservation_history_from_the_browser_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("reservations.json"),
        r#"[{"name":"Ann","email":"ann@example.com","date":"2026-10-01","time":"18:00","guests":"2","phone":"5551234567","timestamp":"2026-09-30T10:00:00.000Z"},
            {"name":"Bo","email":"bo@example.com","date":"2026-10-02","time":"19:00","guests":4,"phone":"5557654321","timestamp":"2026-09-30T11:00:00.000Z"}]"#,
    )
    .unwrap();

    let mut shop = open(dir.path());
    shop.submit_reservation(ReservationForm {
        name: "Cy".to_string(),
        email: "cy@example.com".to_string(),
        date: "2026-10-20".to_string(),
        time: "20:00".to_string(),
        guests: "5".to_string(),
        phone: "555 000 1111".to_string(),
    })
    .unwrap();

    let stored: Vec<serde_json::Value> =
        serde_json::from_slice(&std::fs::read(dir.path().join("reservations.json")).unwrap())
            .unwrap();
    let names: Vec<&str> = stored.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Ann", "Bo", "Cy"]);
    assert_eq!(stored[1]["guests"], 4);
}

#[test]
fn unparseable_reservation_log_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reservations.json");
    std::fs::write(&path, "{not a list").unwrap();

    let mut shop = open(dir.path());
    let result = shop.submit_reservation(ReservationForm {
        name: "Cy".to_string(),
        email: "cy@example.com".to_string(),
        date: "2026-10-20".to_string(),
        time: "20:00".to_string(),
        guests: "5".to_string(),
        phone: "555 000 1111".to_string(),
    });

    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not a list");
}

#[test]
fn menu_items_are_stored_with_empty_details() {
    let dir = tempfile::tempdir().unwrap();
    let mut shop = open(dir.path());
    shop.order_now("french-fries").unwrap();

    let stored: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("cart.json")).unwrap()).unwrap();
    assert_eq!(stored[0]["details"], serde_json::json!({}));
}
