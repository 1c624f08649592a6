use serde::Serialize;

use crate::models::{Extra, Food};

/// Body of `POST /orders`.
///
/// Matches the backend's order record: the food's descriptive fields plus
/// the extras list with the quantities chosen on the screen. The food's
/// full-size image doubles as the order thumbnail.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub product_id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub thumbnail_url: String,
    pub extras: Vec<Extra>,
}

impl OrderRequest {
    pub fn new(food: &Food, extras: Vec<Extra>) -> Self {
        Self {
            product_id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            category: food.category.clone(),
            thumbnail_url: food.image_url.clone(),
            extras,
        }
    }
}

/// Body of `POST /favorites`: the food's descriptive fields under its own id.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteRequest {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl FavoriteRequest {
    pub fn new(food: &Food) -> Self {
        Self {
            id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            category: food.category.clone(),
            image_url: food.image_url.clone(),
            thumbnail_url: food.thumbnail_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> Food {
        Food {
            id: 7,
            name: "Veggie Temaki".to_string(),
            description: "Pepino, cenoura e rucula".to_string(),
            category: "3".to_string(),
            price: 12.0,
            image_url: "http://example.com/temaki.png".to_string(),
            thumbnail_url: None,
            extras: vec![Extra {
                id: 1,
                name: "Cream cheese".to_string(),
                value: 2.5,
                quantity: 0,
            }],
        }
    }

    #[test]
    fn test_order_uses_image_as_thumbnail() {
        let food = sample_food();
        let order = OrderRequest::new(&food, food.extras.clone());
        assert_eq!(order.product_id, 7);
        assert_eq!(order.thumbnail_url, food.image_url);
        assert_eq!(order.extras.len(), 1);
    }

    #[test]
    fn test_favorite_carries_descriptive_fields() {
        let food = sample_food();
        let favorite = FavoriteRequest::new(&food);
        assert_eq!(favorite.id, food.id);
        assert_eq!(favorite.name, food.name);
        assert_eq!(favorite.image_url, food.image_url);

        // Absent thumbnail is omitted from the payload entirely.
        let json = serde_json::to_string(&favorite).unwrap();
        assert!(!json.contains("thumbnail_url"));
    }
}
