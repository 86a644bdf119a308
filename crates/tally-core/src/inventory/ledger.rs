//! The inventory ledger: an owned, insertion-ordered collection of items.

use rust_decimal::Decimal;

use super::types::{Item, ItemFilter, NewItem};
use crate::error::{Result, TallyError};

/// In-memory collection of [`Item`]s and the operations over it.
///
/// Items are kept in registration order and are never removed. The total
/// stock value always fits in a [`Decimal`]: registrations and restocks
/// that would push it past `Decimal::MAX` are rejected.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    items: Vec<Item>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new item.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Validation` if any field is invalid or the stock
    /// value would be too large, and `TallyError::Duplicate` if the id is
    /// already registered. The ledger is left unchanged on error.
    pub fn register(&mut self, new_item: NewItem) -> Result<&Item> {
        let item = new_item.validate()?;
        if self.get(item.id()).is_some() {
            return Err(TallyError::duplicate(format!(
                "item {} is already registered",
                item.id()
            )));
        }
        self.ensure_value_fits(item.id(), item.quantity(), item.price())?;

        tracing::debug!(
            id = item.id(),
            name = item.name(),
            quantity = item.quantity(),
            price = %item.price(),
            "registered item"
        );
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Withdraw `delta` units of an item.
    ///
    /// # Errors
    ///
    /// - `TallyError::Validation` if `delta` is negative
    /// - `TallyError::NotFound` if no item has `id`
    /// - `TallyError::InsufficientQuantity` if `delta` exceeds the quantity on hand
    pub fn adjust(&mut self, id: i64, delta: i64) -> Result<&Item> {
        if delta < 0 {
            return Err(TallyError::validation(format!(
                "withdrawal cannot be negative (got {}); use restock to add stock",
                delta
            )));
        }
        let item = self.get_mut(id)?;
        let available = item.quantity();
        if delta > available {
            return Err(TallyError::InsufficientQuantity {
                id,
                requested: delta,
                available,
            });
        }

        item.set_quantity(available - delta);
        tracing::debug!(id, delta, remaining = item.quantity(), "adjusted item");
        Ok(item)
    }

    /// Add `amount` units to an item.
    ///
    /// # Errors
    ///
    /// - `TallyError::Validation` if `amount` is not positive or the quantity
    ///   or stock value would overflow
    /// - `TallyError::NotFound` if no item has `id`
    pub fn restock(&mut self, id: i64, amount: i64) -> Result<&Item> {
        if amount <= 0 {
            return Err(TallyError::validation(format!(
                "restock amount must be positive (got {})",
                amount
            )));
        }
        let (quantity, price) = {
            let item = self.get_mut(id)?;
            (item.quantity().checked_add(amount), item.price())
        };
        let quantity = quantity.ok_or_else(|| TallyError::validation("quantity would overflow"))?;
        self.ensure_value_fits(id, quantity, price)?;

        let item = self.get_mut(id)?;
        item.set_quantity(quantity);
        tracing::debug!(id, amount, quantity, "restocked item");
        Ok(item)
    }

    /// Look up an item by id.
    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Check that the ledger total stays representable with item `id` at
    /// `quantity` units of `price`.
    fn ensure_value_fits(&self, id: i64, quantity: i64, price: Decimal) -> Result<()> {
        let total = Decimal::from(quantity).checked_mul(price).and_then(|line| {
            self.items
                .iter()
                .filter(|item| item.id() != id)
                .try_fold(line, |acc, item| acc.checked_add(item.stock_value()))
        });
        if total.is_none() {
            return Err(TallyError::validation(format!(
                "stock value of item {} is too large to record",
                id
            )));
        }
        Ok(())
    }

    fn get_mut(&mut self, id: i64) -> Result<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| TallyError::not_found(format!("no item with id {}", id)))
    }

    /// All items in registration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items satisfying `predicate`, in registration order.
    pub fn report<P>(&self, predicate: P) -> Vec<&Item>
    where
        P: Fn(&Item) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    /// Items matching `filter`, in registration order.
    pub fn report_filtered(&self, filter: &ItemFilter) -> Vec<&Item> {
        self.report(|item| filter.matches(item))
    }

    /// Sum of quantity x price over all items; zero when empty.
    ///
    /// Exact: the ledger never holds stock whose total exceeds `Decimal::MAX`,
    /// so the saturating sum never clamps.
    pub fn total_value(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.stock_value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn seeded() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .register(NewItem::new(1, "Soap", 10, dec!(5.00)))
            .unwrap();
        ledger
            .register(NewItem::new(2, "Ball", 15, dec!(8.00)))
            .unwrap();
        ledger
    }

    #[test]
    fn test_register_appends_in_order() {
        let ledger = seeded();
        let ids: Vec<i64> = ledger.items().iter().map(Item::id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_register_invalid_leaves_ledger_unchanged() {
        let mut ledger = seeded();
        let before = ledger.items().to_vec();

        for bad in [
            NewItem::new(0, "Rope", 1, dec!(1)),
            NewItem::new(3, "", 1, dec!(1)),
            NewItem::new(3, "Rope", -1, dec!(1)),
            NewItem::new(3, "Rope", 1, dec!(0)),
        ] {
            let err = ledger.register(bad).unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(ledger.items(), before.as_slice());
    }

    #[test]
    fn test_register_rejects_duplicate_id() {
        let mut ledger = seeded();
        let err = ledger
            .register(NewItem::new(1, "Towel", 3, dec!(12.00)))
            .unwrap_err();
        assert!(matches!(err, TallyError::Duplicate(_)));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(1).unwrap().name(), "Soap");
    }

    #[test]
    fn test_adjust_decrements_quantity() {
        let mut ledger = seeded();
        let item = ledger.adjust(1, 3).unwrap();
        assert_eq!(item.quantity(), 7);
        assert_eq!(ledger.get(1).unwrap().quantity(), 7);
    }

    #[test]
    fn test_adjust_to_zero_and_zero_delta() {
        let mut ledger = seeded();
        assert_eq!(ledger.adjust(2, 0).unwrap().quantity(), 15);
        assert_eq!(ledger.adjust(2, 15).unwrap().quantity(), 0);
    }

    #[test]
    fn test_adjust_unknown_id_is_not_found() {
        let mut ledger = seeded();
        let before = ledger.items().to_vec();
        let err = ledger.adjust(99, 1).unwrap_err();
        assert!(matches!(err, TallyError::NotFound(_)));
        assert_eq!(ledger.items(), before.as_slice());
    }

    #[test]
    fn test_adjust_beyond_stock_is_insufficient() {
        let mut ledger = seeded();
        let err = ledger.adjust(1, 11).unwrap_err();
        assert_eq!(
            err,
            TallyError::InsufficientQuantity {
                id: 1,
                requested: 11,
                available: 10,
            }
        );
        assert_eq!(ledger.get(1).unwrap().quantity(), 10);
    }

    #[test]
    fn test_adjust_negative_delta_is_rejected() {
        let mut ledger = seeded();
        assert!(ledger.adjust(1, -5).unwrap_err().is_validation());
        assert_eq!(ledger.get(1).unwrap().quantity(), 10);
    }

    #[test]
    fn test_restock() {
        let mut ledger = seeded();
        assert_eq!(ledger.restock(1, 5).unwrap().quantity(), 15);
        assert!(ledger.restock(1, 0).unwrap_err().is_validation());
        assert!(matches!(
            ledger.restock(42, 1).unwrap_err(),
            TallyError::NotFound(_)
        ));
    }

    #[test]
    fn test_unrepresentable_stock_value_is_rejected() {
        let mut ledger = seeded();
        let err = ledger
            .register(NewItem::new(3, "Gold", 2, Decimal::MAX))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.len(), 2);

        // Fits alone, but not next to the existing stock.
        let err = ledger
            .register(NewItem::new(3, "Gold", 1, Decimal::MAX))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.total_value(), dec!(170.00));
    }

    #[test]
    fn test_restock_rejects_unrepresentable_value() {
        let mut ledger = Ledger::new();
        let half = Decimal::MAX / dec!(2);
        ledger.register(NewItem::new(1, "Gold", 1, half)).unwrap();
        assert!(ledger.restock(1, 2).unwrap_err().is_validation());
        assert_eq!(ledger.get(1).unwrap().quantity(), 1);
        assert_eq!(ledger.total_value(), half);
    }

    #[test]
    fn test_report_preserves_order_and_allows_empty() {
        let mut ledger = seeded();
        ledger
            .register(NewItem::new(3, "Rope", 2, dec!(9.99)))
            .unwrap();

        let cheap: Vec<i64> = ledger
            .report(|item| item.price() < dec!(10))
            .into_iter()
            .map(Item::id)
            .collect();
        assert_eq!(cheap, vec![1, 2, 3]);

        assert!(ledger.report(|item| item.quantity() > 1000).is_empty());
    }

    #[test]
    fn test_report_filtered() {
        let mut ledger = seeded();
        ledger.adjust(1, 3).unwrap();

        let low = ledger.report_filtered(&ItemFilter::new().quantity_below(10));
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name(), "Soap");

        let band = ledger.report_filtered(&ItemFilter::new().price_between(dec!(5.0), dec!(10.0)));
        assert_eq!(band.len(), 2);
    }

    #[test]
    fn test_total_value_example() {
        let mut ledger = seeded();
        ledger.adjust(1, 3).unwrap();
        assert_eq!(ledger.total_value(), dec!(155.00));
    }

    #[test]
    fn test_total_value_empty_is_zero() {
        assert_eq!(Ledger::new().total_value(), Decimal::ZERO);
    }
}
