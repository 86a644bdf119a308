//! Core data types for the gym register.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::metrics::{age_on, bmi};
use crate::error::{Result, TallyError};

/// Brazilian taxpayer number: exactly 11 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.len() != 11 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TallyError::validation(format!(
                "CPF must be exactly 11 digits (got \"{}\")",
                value
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields shared by trainers and clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub name: String,
    pub birth_date: NaiveDate,
}

impl Person {
    fn new(name: &str, birth_date: NaiveDate) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TallyError::validation("name cannot be empty"));
        }
        Ok(Self {
            name: name.to_string(),
            birth_date,
        })
    }

    /// Age in completed years on `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_on(self.birth_date, today)
    }
}

/// Anyone registered at the gym.
pub trait Member {
    fn person(&self) -> &Person;

    fn name(&self) -> &str {
        &self.person().name
    }

    fn birth_date(&self) -> NaiveDate {
        self.person().birth_date
    }
}

/// A trainer, identified by CPF and by CREF (professional registration).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trainer {
    #[serde(flatten)]
    person: Person,
    cpf: Cpf,
    cref: String,
}

impl Trainer {
    /// Build a trainer, validating every field.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Validation` for an empty name, a malformed CPF or
    /// a blank CREF.
    pub fn new(name: &str, birth_date: NaiveDate, cpf: &str, cref: &str) -> Result<Self> {
        let person = Person::new(name, birth_date)?;
        let cpf = Cpf::parse(cpf)?;
        let cref = cref.trim();
        if cref.is_empty() {
            return Err(TallyError::validation("CREF cannot be empty"));
        }
        Ok(Self {
            person,
            cpf,
            cref: cref.to_string(),
        })
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn cref(&self) -> &str {
        &self.cref
    }
}

impl Member for Trainer {
    fn person(&self) -> &Person {
        &self.person
    }
}

/// A client, identified by CPF, with body measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    #[serde(flatten)]
    person: Person,
    cpf: Cpf,
    height_m: f64,
    weight_kg: f64,
}

impl Client {
    /// Build a client, validating every field.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Validation` for an empty name, a malformed CPF or
    /// a height or weight that is not a positive number.
    pub fn new(
        name: &str,
        birth_date: NaiveDate,
        cpf: &str,
        height_m: f64,
        weight_kg: f64,
    ) -> Result<Self> {
        let person = Person::new(name, birth_date)?;
        let cpf = Cpf::parse(cpf)?;
        if !(height_m.is_finite() && height_m > 0.0) {
            return Err(TallyError::validation("height must be greater than zero"));
        }
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(TallyError::validation("weight must be greater than zero"));
        }
        Ok(Self {
            person,
            cpf,
            height_m,
            weight_kg,
        })
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Body mass index (kg/m²).
    pub fn bmi(&self) -> f64 {
        bmi(self.weight_kg, self.height_m)
    }
}

impl Member for Client {
    fn person(&self) -> &Person {
        &self.person
    }
}
