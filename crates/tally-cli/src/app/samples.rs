//! Sample records the menus start with.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_core::gym::{Client, Trainer};
use tally_core::inventory::NewItem;
use tally_core::{Gym, Ledger};

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::anyhow!("Invalid sample date: {}-{}-{}", year, month, day))
}

/// Soap and ball, the two stock lines of the walkthrough.
pub fn sample_ledger() -> anyhow::Result<Ledger> {
    let mut ledger = Ledger::new();
    ledger.register(NewItem::new(1, "Soap", 10, Decimal::new(500, 2)))?;
    ledger.register(NewItem::new(2, "Ball", 15, Decimal::new(800, 2)))?;
    Ok(ledger)
}

/// Two trainers and two clients.
pub fn sample_gym() -> anyhow::Result<Gym> {
    let mut gym = Gym::new();
    gym.add_trainer(Trainer::new(
        "João",
        date(1980, 5, 15)?,
        "12345678901",
        "ABC123",
    )?)?;
    gym.add_trainer(Trainer::new(
        "Maria",
        date(1990, 10, 20)?,
        "98765432101",
        "DEF456",
    )?)?;
    gym.add_client(Client::new(
        "Carlos",
        date(1995, 3, 8)?,
        "11122233344",
        1.75,
        70.0,
    )?)?;
    gym.add_client(Client::new(
        "Ana",
        date(1985, 7, 12)?,
        "55566677788",
        1.60,
        60.0,
    )?)?;
    Ok(gym)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_ledger_total() {
        let ledger = sample_ledger().unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total_value(), dec!(170.00));
    }

    #[test]
    fn test_sample_gym() {
        let gym = sample_gym().unwrap();
        assert_eq!(gym.trainers().len(), 2);
        assert_eq!(gym.clients().len(), 2);
        assert_eq!(gym.birthdays_in_month(5).unwrap().len(), 1);
    }
}
