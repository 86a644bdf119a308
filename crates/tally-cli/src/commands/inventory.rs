use tally_core::inventory::{Item, ItemFilter, NewItem};
use tally_core::{Ledger, TallyError};

use crate::app::{sample_ledger, AppContext};
use crate::config::InventorySection;
use crate::helpers::{parse_decimal, parse_int, parse_text};
use crate::output::{item_json, items_json, items_table, print_json, total_json, total_line};
use crate::ui::{badge, blank_line, format_money, print, two_places, Badge, UiContext};

use super::menu::{banner, confirm, listing, settle, Console, MenuAction, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Register,
    Adjust,
    Restock,
    List,
    LowStock,
    PriceBand,
    Total,
    Exit,
}

impl MenuAction for Action {
    const ALL: &'static [Self] = &[
        Self::Register,
        Self::Adjust,
        Self::Restock,
        Self::List,
        Self::LowStock,
        Self::PriceBand,
        Self::Total,
        Self::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register item",
            Self::Adjust => "Withdraw stock",
            Self::Restock => "Restock item",
            Self::List => "List items",
            Self::LowStock => "Low stock report",
            Self::PriceBand => "Price band report",
            Self::Total => "Total stock value",
            Self::Exit => "Exit",
        }
    }

    fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

pub fn handle_inventory(ctx: &AppContext) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let ledger = if ctx.seed() {
        sample_ledger()?
    } else {
        Ledger::new()
    };
    let mut session = Session {
        console: Console::new(ctx.ui(), ctx.prompter()),
        settings: &config.inventory,
        currency: &config.ui.currency,
        ledger,
    };

    let count = format!("{} items", session.ledger.len());
    banner(ctx.ui(), "inventory", Some(&count));
    session.run()
}

struct Session<'a> {
    console: Console<'a>,
    settings: &'a InventorySection,
    currency: &'a str,
    ledger: Ledger,
}

impl Session<'_> {
    fn run(&mut self) -> anyhow::Result<()> {
        while let Some(action) = self.console.choose::<Action>()? {
            let outcome = match action {
                Action::Register => self.register(),
                Action::Adjust => self.adjust(),
                Action::Restock => self.restock(),
                Action::List => self.list(),
                Action::LowStock => self.low_stock(),
                Action::PriceBand => self.price_band(),
                Action::Total => self.total(),
                Action::Exit => break,
            };
            if settle(self.console.ui, outcome)? == Step::InputEnded {
                break;
            }
            blank_line(self.console.ui);
        }
        tracing::debug!(items = self.ledger.len(), "inventory menu closed");
        Ok(())
    }

    fn register(&mut self) -> anyhow::Result<Step> {
        let Some(id) = self.console.ask("Item id", None, parse_int)? else {
            return Ok(Step::InputEnded);
        };
        let Some(name) = self.console.ask("Name", None, parse_text)? else {
            return Ok(Step::InputEnded);
        };
        let Some(quantity) = self.console.ask("Quantity", None, parse_int)? else {
            return Ok(Step::InputEnded);
        };
        let Some(price) = self.console.ask("Unit price", None, parse_decimal)? else {
            return Ok(Step::InputEnded);
        };

        let item = self.ledger.register(NewItem::new(id, name, quantity, price))?;
        report_item(self.console.ui, "Registered item", item, self.currency)?;
        Ok(Step::Done)
    }

    fn adjust(&mut self) -> anyhow::Result<Step> {
        let Some(id) = self.console.ask("Item id", None, parse_int)? else {
            return Ok(Step::InputEnded);
        };
        let Some(delta) = self.console.ask("Quantity to withdraw", None, parse_int)? else {
            return Ok(Step::InputEnded);
        };

        let item = self.ledger.adjust(id, delta)?;
        report_item(self.console.ui, "Stock withdrawn", item, self.currency)?;
        Ok(Step::Done)
    }

    fn restock(&mut self) -> anyhow::Result<Step> {
        let Some(id) = self.console.ask("Item id", None, parse_int)? else {
            return Ok(Step::InputEnded);
        };
        let Some(amount) = self.console.ask("Quantity to add", None, parse_int)? else {
            return Ok(Step::InputEnded);
        };

        let item = self.ledger.restock(id, amount)?;
        report_item(self.console.ui, "Item restocked", item, self.currency)?;
        Ok(Step::Done)
    }

    fn list(&mut self) -> anyhow::Result<Step> {
        let items: Vec<&Item> = self.ledger.items().iter().collect();
        self.show("Items", &items)?;
        Ok(Step::Done)
    }

    fn low_stock(&mut self) -> anyhow::Result<Step> {
        let default = self.settings.low_stock_threshold.to_string();
        let Some(threshold) = self.console.ask("Below quantity", Some(&default), parse_int)?
        else {
            return Ok(Step::InputEnded);
        };

        let filter = ItemFilter::new().quantity_below(threshold);
        let items = self.ledger.report_filtered(&filter);
        self.show(&format!("Quantity below {}", threshold), &items)?;

        let ui = self.console.ui;
        if ui.mode.is_pretty() && ui.chatty() && !items.is_empty() {
            let message = format!("{} item(s) need restocking", items.len());
            print(ui, &badge(ui, Badge::Warn, &message));
        }
        Ok(Step::Done)
    }

    fn price_band(&mut self) -> anyhow::Result<Step> {
        let default_min = two_places(self.settings.price_band_min).to_string();
        let default_max = two_places(self.settings.price_band_max).to_string();
        let Some(min) = self.console.ask("Minimum price", Some(&default_min), parse_decimal)?
        else {
            return Ok(Step::InputEnded);
        };
        let Some(max) = self.console.ask("Maximum price", Some(&default_max), parse_decimal)?
        else {
            return Ok(Step::InputEnded);
        };
        if min > max {
            return Err(TallyError::validation(format!(
                "minimum price {} exceeds maximum {}",
                min, max
            ))
            .into());
        }

        let items = self.ledger.report(|item| item.price() >= min && item.price() <= max);
        let heading = format!(
            "Price between {} and {}",
            format_money(min, self.currency),
            format_money(max, self.currency)
        );
        self.show(&heading, &items)?;
        Ok(Step::Done)
    }

    fn total(&mut self) -> anyhow::Result<Step> {
        let ui = self.console.ui;
        let total = self.ledger.total_value();
        if ui.mode.is_json() {
            print_json(&total_json(total, self.currency))?;
        } else {
            print(ui, &total_line(ui, total, self.currency));
        }
        Ok(Step::Done)
    }

    fn show(&self, heading: &str, items: &[&Item]) -> anyhow::Result<()> {
        let ui = self.console.ui;
        if ui.mode.is_json() {
            return print_json(&items_json(items));
        }
        listing(ui, heading, &items_table(ui, items, self.currency), items.len());
        Ok(())
    }
}

fn report_item(ui: &UiContext, message: &str, item: &Item, currency: &str) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        return print_json(&item_json(item));
    }
    confirm(
        ui,
        message,
        &[
            ("ID", item.id().to_string()),
            ("Name", item.name().to_string()),
            ("Quantity", item.quantity().to_string()),
            ("Price", format_money(item.price(), currency)),
        ],
    );
    Ok(())
}

