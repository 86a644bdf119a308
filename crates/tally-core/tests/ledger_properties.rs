use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tally_core::inventory::{Item, ItemFilter, Ledger, NewItem};
use tally_core::TallyError;

fn expected_total(items: &[Item]) -> Decimal {
    items
        .iter()
        .map(|item| Decimal::from(item.quantity()) * item.price())
        .sum()
}

prop_compose! {
    fn arb_item(id: i64)(
        quantity in 0i64..10_000,
        cents in 1i64..1_000_000,
        name in "[A-Za-z][A-Za-z ]{0,15}",
    ) -> NewItem {
        NewItem::new(id, name, quantity, Decimal::new(cents, 2))
    }
}

fn arb_items() -> impl Strategy<Value = Vec<NewItem>> {
    (0usize..20).prop_flat_map(|len| {
        (1..=len as i64)
            .map(arb_item)
            .collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn total_value_is_sum_of_line_values(
        items in arb_items(),
        withdrawals in proptest::collection::vec((1i64..25, 0i64..200), 0..30),
    ) {
        let mut ledger = Ledger::new();
        for item in items {
            ledger.register(item).unwrap();
        }
        prop_assert_eq!(ledger.total_value(), expected_total(ledger.items()));

        for (id, delta) in withdrawals {
            let before = ledger.get(id).map(Item::quantity);
            match ledger.adjust(id, delta) {
                Ok(item) => prop_assert_eq!(Some(item.quantity() + delta), before),
                Err(TallyError::NotFound(_)) => prop_assert!(before.is_none()),
                Err(TallyError::InsufficientQuantity { available, .. }) => {
                    prop_assert_eq!(Some(available), before);
                    prop_assert!(delta > available);
                    prop_assert_eq!(ledger.get(id).map(Item::quantity), before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
            prop_assert!(ledger.items().iter().all(|item| item.quantity() >= 0));
            prop_assert_eq!(ledger.total_value(), expected_total(ledger.items()));
        }
    }

    #[test]
    fn invalid_registration_never_changes_ledger(
        id in -5i64..=0,
        quantity in -50i64..0,
        cents in -500i64..=0,
    ) {
        let mut ledger = Ledger::new();
        ledger.register(NewItem::new(1, "Soap", 10, dec!(5.00))).unwrap();
        let before = ledger.items().to_vec();

        let attempts = [
            NewItem::new(id, "Rope", 1, dec!(1.00)),
            NewItem::new(2, "", 1, dec!(1.00)),
            NewItem::new(2, "Rope", quantity, dec!(1.00)),
            NewItem::new(2, "Rope", 1, Decimal::new(cents, 2)),
        ];
        for attempt in attempts {
            let err = ledger.register(attempt).unwrap_err();
            prop_assert!(err.is_validation());
        }
        prop_assert_eq!(ledger.items(), before.as_slice());
    }
}

#[test]
fn soap_and_ball_walkthrough() {
    let mut ledger = Ledger::new();
    ledger
        .register(NewItem::new(1, "Soap", 10, dec!(5.00)))
        .unwrap();
    ledger
        .register(NewItem::new(2, "Ball", 15, dec!(8.00)))
        .unwrap();

    ledger.adjust(1, 3).unwrap();
    assert_eq!(ledger.get(1).unwrap().quantity(), 7);
    assert_eq!(ledger.total_value(), dec!(155.00));

    let low: Vec<&str> = ledger
        .report_filtered(&ItemFilter::new().quantity_below(10))
        .into_iter()
        .map(Item::name)
        .collect();
    assert_eq!(low, vec!["Soap"]);

    let band: Vec<&str> = ledger
        .report_filtered(&ItemFilter::new().price_between(dec!(5.0), dec!(10.0)))
        .into_iter()
        .map(Item::name)
        .collect();
    assert_eq!(band, vec!["Soap", "Ball"]);
}

#[test]
fn items_serialize_for_reports() {
    let mut ledger = Ledger::new();
    let item = ledger
        .register(NewItem::new(7, "Rope", 2, dec!(12.50)))
        .unwrap();
    let value = serde_json::to_value(item).unwrap();
    assert_eq!(value["id"], 7);
    assert_eq!(value["name"], "Rope");
    assert_eq!(value["quantity"], 2);
    assert_eq!(value["price"], "12.50");
}
