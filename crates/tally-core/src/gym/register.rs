//! The gym membership register.

use chrono::{Datelike, NaiveDate};

use super::types::{Client, Member, Person, Trainer};
use crate::error::{Result, TallyError};

/// In-memory register of trainers and clients.
#[derive(Debug, Clone, Default)]
pub struct Gym {
    trainers: Vec<Trainer>,
    clients: Vec<Client>,
}

impl Gym {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trainer.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Duplicate` if another trainer already has the same
    /// CPF or the same CREF.
    pub fn add_trainer(&mut self, trainer: Trainer) -> Result<&Trainer> {
        if self
            .trainers
            .iter()
            .any(|t| t.cpf() == trainer.cpf() || t.cref() == trainer.cref())
        {
            return Err(TallyError::duplicate(
                "CPF or CREF already registered for another trainer",
            ));
        }

        tracing::debug!(name = trainer.name(), cref = trainer.cref(), "added trainer");
        self.trainers.push(trainer);
        Ok(&self.trainers[self.trainers.len() - 1])
    }

    /// Register a client.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Duplicate` if another client already has the same
    /// CPF.
    pub fn add_client(&mut self, client: Client) -> Result<&Client> {
        if self.clients.iter().any(|c| c.cpf() == client.cpf()) {
            return Err(TallyError::duplicate(
                "CPF already registered for another client",
            ));
        }

        tracing::debug!(name = client.name(), "added client");
        self.clients.push(client);
        Ok(&self.clients[self.clients.len() - 1])
    }

    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Trainers whose age on `today` lies in `min..=max`.
    pub fn trainers_aged_between(&self, min: i32, max: i32, today: NaiveDate) -> Vec<&Trainer> {
        aged_between(&self.trainers, min, max, today)
    }

    /// Clients whose age on `today` lies in `min..=max`.
    pub fn clients_aged_between(&self, min: i32, max: i32, today: NaiveDate) -> Vec<&Client> {
        aged_between(&self.clients, min, max, today)
    }

    /// Clients with a BMI strictly above `threshold`, lowest BMI first.
    pub fn clients_with_bmi_above(&self, threshold: f64) -> Vec<&Client> {
        let mut matches: Vec<&Client> = self
            .clients
            .iter()
            .filter(|client| client.bmi() > threshold)
            .collect();
        matches.sort_by(|a, b| a.bmi().total_cmp(&b.bmi()));
        matches
    }

    /// Clients ordered by name, ignoring case. Equal names keep insertion order.
    pub fn clients_alphabetical(&self) -> Vec<&Client> {
        let mut clients: Vec<&Client> = self.clients.iter().collect();
        clients.sort_by_cached_key(|client| client.name().to_lowercase());
        clients
    }

    /// Clients ordered by birth date, oldest first.
    pub fn clients_oldest_first(&self) -> Vec<&Client> {
        let mut clients: Vec<&Client> = self.clients.iter().collect();
        clients.sort_by_key(|client| client.birth_date());
        clients
    }

    /// Trainers, then clients, born in `month` (1 to 12).
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Validation` if `month` is out of range.
    pub fn birthdays_in_month(&self, month: u32) -> Result<Vec<&Person>> {
        if !(1..=12).contains(&month) {
            return Err(TallyError::validation(format!(
                "month must be between 1 and 12 (got {})",
                month
            )));
        }

        let trainers = self.trainers.iter().map(Member::person);
        let clients = self.clients.iter().map(Member::person);
        Ok(trainers
            .chain(clients)
            .filter(|person| person.birth_date.month() == month)
            .collect())
    }
}

fn aged_between<M: Member>(members: &[M], min: i32, max: i32, today: NaiveDate) -> Vec<&M> {
    members
        .iter()
        .filter(|member| {
            let age = member.person().age_on(today);
            age >= min && age <= max
        })
        .collect()
}
