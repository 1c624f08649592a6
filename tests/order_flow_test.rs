use go_restaurant_rs::error::OrderError;
use go_restaurant_rs::models::{Extra, FavoriteRequest, Food};
use go_restaurant_rs::screen::DetailScreen;

fn sample_food() -> Food {
    Food {
        id: 3,
        name: "A la Camponesa".to_string(),
        description: "Macarrao com pimenta e alho".to_string(),
        category: "1".to_string(),
        price: 21.9,
        image_url: "http://example.com/camponesa.png".to_string(),
        thumbnail_url: Some("http://example.com/camponesa_thumb.png".to_string()),
        extras: vec![
            Extra {
                id: 6,
                name: "Bacon".to_string(),
                value: 1.5,
                quantity: 0,
            },
            Extra {
                id: 7,
                name: "Frango frito".to_string(),
                value: 2.0,
                quantity: 0,
            },
        ],
    }
}

#[test]
fn test_order_payload_reflects_selection() {
    let mut screen = DetailScreen::new(sample_food(), false);
    screen.increment_extra(6);
    screen.increment_extra(6);
    screen.increment_quantity();

    let order = screen.build_order();
    assert_eq!(order.product_id, 3);
    assert_eq!(order.name, "A la Camponesa");
    assert_eq!(order.category, "1");

    // The full-size image becomes the order thumbnail, regardless of the
    // food's own thumbnail field.
    assert_eq!(order.thumbnail_url, "http://example.com/camponesa.png");

    // Every extra is carried, with chosen quantities.
    assert_eq!(order.extras.len(), 2);
    assert_eq!(order.extras[0].quantity, 2);
    assert_eq!(order.extras[1].quantity, 0);
}

#[test]
fn test_order_payload_serializes_expected_shape() {
    let screen = DetailScreen::new(sample_food(), false);
    let json = serde_json::to_value(screen.build_order()).unwrap();

    assert_eq!(json["product_id"], 3);
    assert_eq!(json["price"], 21.9);
    assert!(json["extras"].is_array());
    // Orders carry no top-level quantity field on the wire.
    assert!(json.get("quantity").is_none());
}

#[test]
fn test_failed_submission_leaves_state_intact() {
    let mut screen = DetailScreen::new(sample_food(), false);
    screen.increment_extra(6);
    screen.increment_quantity();
    let total_before = screen.total();

    // A submission attempt that settles with an error keeps the selection.
    screen.begin_submission().unwrap();
    screen.end_submission();

    assert_eq!(screen.extra_quantity(6), Some(1));
    assert_eq!(screen.quantity(), 2);
    assert!((screen.total() - total_before).abs() < 0.001);
    assert!(!screen.is_submitting());
}

#[test]
fn test_double_submission_is_rejected() {
    let mut screen = DetailScreen::new(sample_food(), false);

    screen.begin_submission().unwrap();
    assert!(matches!(
        screen.begin_submission(),
        Err(OrderError::SubmissionInFlight)
    ));
}

#[test]
fn test_favorite_request_mirrors_food() {
    let food = sample_food();
    let favorite = FavoriteRequest::new(&food);

    assert_eq!(favorite.id, food.id);
    assert_eq!(favorite.description, food.description);
    assert_eq!(favorite.image_url, food.image_url);
    assert_eq!(favorite.thumbnail_url, food.thumbnail_url);
}
