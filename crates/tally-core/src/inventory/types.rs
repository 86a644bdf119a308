//! Core data types for the inventory ledger.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{Result, TallyError};

/// A tracked inventory record.
///
/// Fields are private: the price is fixed at creation and the quantity only
/// changes through [`Ledger`](super::Ledger) operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: i64,
    name: String,
    quantity: i64,
    price: Decimal,
}

impl Item {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Quantity on hand times unit price.
    ///
    /// Saturates at `Decimal::MAX`; items held by a [`Ledger`](super::Ledger)
    /// never reach it.
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.price)
    }

    pub(super) fn set_quantity(&mut self, quantity: i64) {
        debug_assert!(quantity >= 0);
        self.quantity = quantity;
    }
}

/// Builder for registering new items.
#[derive(Debug, Clone)]
pub struct NewItem {
    /// Positive identifier, unique within a ledger
    pub id: i64,

    /// Display name
    pub name: String,

    /// Opening quantity
    pub quantity: i64,

    /// Unit price
    pub price: Decimal,
}

impl NewItem {
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Check the field rules and build the item.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Validation` if:
    /// - `id` is not positive
    /// - `name` is empty or blank
    /// - `quantity` is negative
    /// - `price` is not positive
    pub fn validate(self) -> Result<Item> {
        if self.id <= 0 {
            return Err(TallyError::validation(format!(
                "item id must be positive (got {})",
                self.id
            )));
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TallyError::validation("item name cannot be empty"));
        }
        if self.quantity < 0 {
            return Err(TallyError::validation(format!(
                "quantity cannot be negative (got {})",
                self.quantity
            )));
        }
        if self.price <= Decimal::ZERO {
            return Err(TallyError::validation(format!(
                "price must be greater than zero (got {})",
                self.price
            )));
        }

        Ok(Item {
            id: self.id,
            name: name.to_string(),
            quantity: self.quantity,
            price: self.price,
        })
    }
}

/// Filter for inventory reports.
///
/// Every criterion that is set must hold for an item to match; an empty
/// filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Quantity strictly below this value
    pub quantity_below: Option<i64>,

    /// Minimum unit price (inclusive)
    pub price_min: Option<Decimal>,

    /// Maximum unit price (inclusive)
    pub price_max: Option<Decimal>,

    /// Case-insensitive substring of the name
    pub name_contains: Option<String>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity_below(mut self, threshold: i64) -> Self {
        self.quantity_below = Some(threshold);
        self
    }

    pub fn price_between(mut self, min: Decimal, max: Decimal) -> Self {
        self.price_min = Some(min);
        self.price_max = Some(max);
        self
    }

    pub fn name_contains(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = Some(needle.into().to_lowercase());
        self
    }

    /// Whether `item` satisfies every configured criterion.
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(threshold) = self.quantity_below {
            if item.quantity() >= threshold {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if item.price() < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if item.price() > max {
                return false;
            }
        }
        if let Some(ref needle) = self.name_contains {
            if !item.name().to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_accepts_valid_item() {
        let item = NewItem::new(1, "Soap", 10, dec!(5.00)).validate().unwrap();
        assert_eq!(item.id(), 1);
        assert_eq!(item.name(), "Soap");
        assert_eq!(item.quantity(), 10);
        assert_eq!(item.price(), dec!(5.00));
        assert_eq!(item.stock_value(), dec!(50.00));
    }

    #[test]
    fn test_validate_trims_name() {
        let item = NewItem::new(3, "  Rope ", 0, dec!(1.5)).validate().unwrap();
        assert_eq!(item.name(), "Rope");
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let cases = [
            NewItem::new(0, "Soap", 1, dec!(1)),
            NewItem::new(-4, "Soap", 1, dec!(1)),
            NewItem::new(1, "", 1, dec!(1)),
            NewItem::new(1, "   ", 1, dec!(1)),
            NewItem::new(1, "Soap", -1, dec!(1)),
            NewItem::new(1, "Soap", 1, dec!(0)),
            NewItem::new(1, "Soap", 1, dec!(-0.01)),
        ];
        for case in cases {
            let err = case.clone().validate().unwrap_err();
            assert!(err.is_validation(), "{:?} -> {:?}", case, err);
        }
    }

    #[test]
    fn test_item_filter_builder() {
        let filter = ItemFilter::new()
            .quantity_below(10)
            .price_between(dec!(5.0), dec!(10.0))
            .name_contains("SO");

        assert_eq!(filter.quantity_below, Some(10));
        assert_eq!(filter.price_min, Some(dec!(5.0)));
        assert_eq!(filter.price_max, Some(dec!(10.0)));
        assert_eq!(filter.name_contains, Some("so".to_string()));
    }

    #[test]
    fn test_item_filter_matches() {
        let soap = NewItem::new(1, "Soap", 7, dec!(5.00)).validate().unwrap();
        let ball = NewItem::new(2, "Ball", 15, dec!(8.00)).validate().unwrap();

        let low = ItemFilter::new().quantity_below(10);
        assert!(low.matches(&soap));
        assert!(!low.matches(&ball));

        let band = ItemFilter::new().price_between(dec!(5.0), dec!(8.0));
        assert!(band.matches(&soap));
        assert!(band.matches(&ball));

        let named = ItemFilter::new().name_contains("ba");
        assert!(!named.matches(&soap));
        assert!(named.matches(&ball));

        assert!(ItemFilter::new().matches(&soap));
    }
}
