use serde::{Deserialize, Serialize};

/// A food item as served by `GET /foods/{id}`.
///
/// Immutable after loading; all per-visit state (extra quantities, order
/// quantity, favorite flag) lives in the detail screen instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

/// An optional add-on with its own unit price and a per-order quantity.
///
/// The backend may send a quantity with the food record; the screen discards
/// it and starts every extra at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extra {
    pub id: u64,
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub quantity: u32,
}

impl Extra {
    /// Price contribution of this extra: unit value times quantity.
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.value * self.quantity as f64
    }

    /// Copy of this extra with its quantity reset to zero.
    pub fn reset(&self) -> Extra {
        Extra {
            quantity: 0,
            ..self.clone()
        }
    }
}
