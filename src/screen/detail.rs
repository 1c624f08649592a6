use crate::error::{OrderError, Result};
use crate::models::{Extra, Food, OrderRequest};
use crate::money::format_price;

/// Maximum quantity for a single extra.
pub const MAX_EXTRA_QUANTITY: u32 = 5;

/// Order quantity bounds for the main item.
pub const MIN_ORDER_QUANTITY: u32 = 1;
pub const MAX_ORDER_QUANTITY: u32 = 10;

/// Which backend call a favorite toggle needs, given the current flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Create,
    Delete,
}

/// Local state for one visit to the food detail screen.
///
/// Holds the immutable food record plus everything the user can change:
/// extra quantities, the order quantity, and the favorite flag. All derived
/// values (the running total in particular) are recomputed from this state
/// on demand. Nothing survives past the visit.
pub struct DetailScreen {
    food: Food,
    extras: Vec<Extra>,
    quantity: u32,
    is_favorite: bool,
    submitting: bool,
}

impl DetailScreen {
    /// Build screen state from a freshly loaded food record.
    ///
    /// Extra quantities sent by the backend are discarded; every extra
    /// starts at zero and the order quantity starts at one.
    pub fn new(food: Food, is_favorite: bool) -> Self {
        let extras = food.extras.iter().map(Extra::reset).collect();
        Self {
            food,
            extras,
            quantity: MIN_ORDER_QUANTITY,
            is_favorite,
            submitting: false,
        }
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Increment the named extra's quantity, clamped to `MAX_EXTRA_QUANTITY`.
    ///
    /// Unknown ids and at-bound quantities are no-ops.
    pub fn increment_extra(&mut self, id: u64) {
        if let Some(extra) = self.extras.iter_mut().find(|e| e.id == id) {
            if extra.quantity < MAX_EXTRA_QUANTITY {
                extra.quantity += 1;
            }
        }
    }

    /// Decrement the named extra's quantity, clamped to zero.
    pub fn decrement_extra(&mut self, id: u64) {
        if let Some(extra) = self.extras.iter_mut().find(|e| e.id == id) {
            if extra.quantity > 0 {
                extra.quantity -= 1;
            }
        }
    }

    pub fn extra_quantity(&self, id: u64) -> Option<u32> {
        self.extras.iter().find(|e| e.id == id).map(|e| e.quantity)
    }

    /// Increment the order quantity, clamped to `MAX_ORDER_QUANTITY`.
    pub fn increment_quantity(&mut self) {
        if self.quantity < MAX_ORDER_QUANTITY {
            self.quantity += 1;
        }
    }

    /// Decrement the order quantity, clamped to `MIN_ORDER_QUANTITY`.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > MIN_ORDER_QUANTITY {
            self.quantity -= 1;
        }
    }

    /// Running total: extras subtotal plus item price times order quantity.
    pub fn total(&self) -> f64 {
        let extras_total: f64 = self.extras.iter().map(Extra::subtotal).sum();
        extras_total + self.food.price * self.quantity as f64
    }

    /// The total formatted as BRL, as shown on the screen.
    pub fn formatted_total(&self) -> String {
        format_price(self.total())
    }

    /// The backend call a toggle would need right now.
    pub fn favorite_action(&self) -> FavoriteAction {
        if self.is_favorite {
            FavoriteAction::Delete
        } else {
            FavoriteAction::Create
        }
    }

    /// Record the outcome of a favorite call. The flag only moves here,
    /// after the backend has confirmed, never optimistically.
    pub fn set_favorite(&mut self, value: bool) {
        self.is_favorite = value;
    }

    /// Mark an order submission as in flight.
    ///
    /// Rejects a second submission while one is pending, so a double
    /// confirm cannot send duplicate orders.
    pub fn begin_submission(&mut self) -> Result<()> {
        if self.submitting {
            return Err(OrderError::SubmissionInFlight);
        }
        self.submitting = true;
        Ok(())
    }

    /// Clear the in-flight marker once the submission settles.
    pub fn end_submission(&mut self) {
        self.submitting = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Build the order payload for the current selection.
    pub fn build_order(&self) -> OrderRequest {
        OrderRequest::new(&self.food, self.extras.clone())
    }
}
