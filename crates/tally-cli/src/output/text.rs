//! Text and table output formatting for listings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_core::gym::{Client, Member, Person, Trainer};
use tally_core::inventory::Item;
use tally_core::todo::{Task, TaskStats};

use crate::ui::theme::symbols;
use crate::ui::{format_date, format_money, kv, single_line, table, truncate, Column, UiContext};

const ITEM_COLUMNS: [Column; 5] = [
    Column::numeric("ID"),
    Column::new("Name"),
    Column::numeric("Qty"),
    Column::numeric("Price"),
    Column::numeric("Value"),
];

/// Render items as a table.
pub fn items_table(ctx: &UiContext, items: &[&Item], currency: &str) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.id().to_string(),
                item.name().to_string(),
                item.quantity().to_string(),
                format_money(item.price(), currency),
                format_money(item.stock_value(), currency),
            ]
        })
        .collect();
    table(ctx, &ITEM_COLUMNS, &rows)
}

/// Render the total stock value line.
pub fn total_line(ctx: &UiContext, total: Decimal, currency: &str) -> String {
    kv(ctx, "Total value", &format_money(total, currency))
}

/// Render tasks as a table.
///
/// Descriptions are truncated in pretty mode only.
pub fn tasks_table(ctx: &UiContext, tasks: &[&Task], date_format: &str) -> String {
    let columns = [
        Column::new(""),
        Column::new("Title"),
        Column::new("Due"),
        Column::new("Description"),
    ];
    let rows: Vec<Vec<String>> = tasks
        .iter()
        .map(|task| {
            let marker = if task.completed {
                symbols::DONE
            } else {
                symbols::PENDING
            };
            let description = single_line(&task.description);
            let description = if ctx.mode.is_pretty() {
                truncate(&description, 40)
            } else {
                description
            };
            vec![
                marker.get(ctx.unicode).to_string(),
                task.title.clone(),
                format_date(&task.due, date_format),
                description,
            ]
        })
        .collect();
    table(ctx, &columns, &rows)
}

/// Render task statistics as key-value lines.
pub fn stats_lines(ctx: &UiContext, stats: &TaskStats<'_>, date_format: &str) -> String {
    let describe = |task: Option<&Task>| match task {
        Some(t) => format!("{} ({})", t.title, format_date(&t.due, date_format)),
        None => "-".to_string(),
    };
    [
        kv(ctx, "Total", &stats.total.to_string()),
        kv(ctx, "Completed", &stats.completed.to_string()),
        kv(ctx, "Pending", &stats.pending.to_string()),
        kv(ctx, "Earliest due", &describe(stats.earliest)),
        kv(ctx, "Latest due", &describe(stats.latest)),
    ]
    .join("\n")
}

/// Render trainers as a table.
pub fn trainers_table(
    ctx: &UiContext,
    trainers: &[&Trainer],
    today: NaiveDate,
    date_format: &str,
) -> String {
    let columns = [
        Column::new("Name"),
        Column::new("Born"),
        Column::numeric("Age"),
        Column::new("CPF"),
        Column::new("CREF"),
    ];
    let rows: Vec<Vec<String>> = trainers
        .iter()
        .map(|t| {
            vec![
                t.name().to_string(),
                format_date(&t.birth_date(), date_format),
                t.person().age_on(today).to_string(),
                t.cpf().to_string(),
                t.cref().to_string(),
            ]
        })
        .collect();
    table(ctx, &columns, &rows)
}

/// Render clients as a table, with BMI to two decimals.
pub fn clients_table(
    ctx: &UiContext,
    clients: &[&Client],
    today: NaiveDate,
    date_format: &str,
) -> String {
    let columns = [
        Column::new("Name"),
        Column::new("Born"),
        Column::numeric("Age"),
        Column::new("CPF"),
        Column::numeric("Height"),
        Column::numeric("Weight"),
        Column::numeric("BMI"),
    ];
    let rows: Vec<Vec<String>> = clients
        .iter()
        .map(|c| {
            vec![
                c.name().to_string(),
                format_date(&c.birth_date(), date_format),
                c.person().age_on(today).to_string(),
                c.cpf().to_string(),
                format!("{:.2}", c.height_m()),
                format!("{:.1}", c.weight_kg()),
                format!("{:.2}", c.bmi()),
            ]
        })
        .collect();
    table(ctx, &columns, &rows)
}

/// Render people (birthday listing) as a table.
pub fn people_table(ctx: &UiContext, people: &[&Person], date_format: &str) -> String {
    let columns = [Column::new("Name"), Column::new("Born")];
    let rows: Vec<Vec<String>> = people
        .iter()
        .map(|p| vec![p.name.clone(), format_date(&p.birth_date, date_format)])
        .collect();
    table(ctx, &columns, &rows)
}
