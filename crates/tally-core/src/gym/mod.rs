//! Gym membership register.
//!
//! Trainers and clients share the [`Person`] fields through the [`Member`]
//! trait. Ages are computed against an explicit `today` so queries stay
//! deterministic.

mod metrics;
mod register;
mod types;

pub use metrics::{age_on, bmi};
pub use register::Gym;
pub use types::{Client, Cpf, Member, Person, Trainer};
