//! JSON output formatting for listings and reports.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_core::gym::{Client, Member, Person, Trainer};
use tally_core::inventory::Item;
use tally_core::todo::{Task, TaskStats};

use crate::ui::two_places;

fn money(value: Decimal) -> String {
    two_places(value).to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert an item to JSON for output.
pub fn item_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id(),
        "name": item.name(),
        "quantity": item.quantity(),
        "price": money(item.price()),
        "stock_value": money(item.stock_value()),
    })
}

/// Convert multiple items to a JSON array for output.
pub fn items_json(items: &[&Item]) -> serde_json::Value {
    serde_json::Value::Array(items.iter().map(|item| item_json(item)).collect())
}

/// Total stock value report.
pub fn total_json(total: Decimal, currency: &str) -> serde_json::Value {
    serde_json::json!({
        "total_value": money(total),
        "currency": currency,
    })
}

pub fn task_json(task: &Task) -> serde_json::Value {
    serde_json::json!({
        "id": task.id,
        "title": task.title,
        "description": task.description,
        "due": task.due,
        "completed": task.completed,
    })
}

pub fn tasks_json(tasks: &[&Task]) -> serde_json::Value {
    serde_json::Value::Array(tasks.iter().map(|task| task_json(task)).collect())
}

pub fn stats_json(stats: &TaskStats<'_>) -> serde_json::Value {
    let brief = |task: Option<&Task>| {
        task.map(|t| serde_json::json!({ "title": t.title, "due": t.due }))
    };
    serde_json::json!({
        "total": stats.total,
        "completed": stats.completed,
        "pending": stats.pending,
        "earliest": brief(stats.earliest),
        "latest": brief(stats.latest),
    })
}

pub fn trainers_json(trainers: &[&Trainer], today: NaiveDate) -> serde_json::Value {
    let rows = trainers
        .iter()
        .map(|t| {
            serde_json::json!({
                "name": t.name(),
                "birth_date": t.birth_date(),
                "age": t.person().age_on(today),
                "cpf": t.cpf(),
                "cref": t.cref(),
            })
        })
        .collect();
    serde_json::Value::Array(rows)
}

pub fn clients_json(clients: &[&Client], today: NaiveDate) -> serde_json::Value {
    let rows = clients
        .iter()
        .map(|c| {
            serde_json::json!({
                "name": c.name(),
                "birth_date": c.birth_date(),
                "age": c.person().age_on(today),
                "cpf": c.cpf(),
                "height_m": c.height_m(),
                "weight_kg": c.weight_kg(),
                "bmi": round2(c.bmi()),
            })
        })
        .collect();
    serde_json::Value::Array(rows)
}

pub fn people_json(people: &[&Person]) -> serde_json::Value {
    let rows = people
        .iter()
        .map(|p| serde_json::json!({ "name": p.name, "birth_date": p.birth_date }))
        .collect();
    serde_json::Value::Array(rows)
}

/// Print a JSON document to stdout.
pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tally_core::inventory::NewItem;

    #[test]
    fn test_item_json_uses_two_decimal_strings() {
        let item = NewItem::new(1, "Soap", 7, dec!(5)).validate().unwrap();
        let value = item_json(&item);
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Soap");
        assert_eq!(value["price"], "5.00");
        assert_eq!(value["stock_value"], "35.00");
    }

    #[test]
    fn test_total_json() {
        let value = total_json(dec!(155), "R$");
        assert_eq!(value["total_value"], "155.00");
        assert_eq!(value["currency"], "R$");
    }

    #[test]
    fn test_clients_json_has_age_and_rounded_bmi() {
        let client = Client::new(
            "Carlos",
            NaiveDate::from_ymd_opt(1995, 3, 8).unwrap(),
            "11122233344",
            1.75,
            70.0,
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let value = clients_json(&[&client], today);
        assert_eq!(value[0]["age"], 29);
        assert_eq!(value[0]["bmi"], 22.86);
        assert_eq!(value[0]["cpf"], "11122233344");
        assert_eq!(value[0]["birth_date"], "1995-03-08");
    }
}
