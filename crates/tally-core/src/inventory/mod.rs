//! Inventory ledger.
//!
//! Items carry a positive id, a name, a non-negative quantity and a fixed
//! unit price. The [`Ledger`] owns them and enforces those rules on every
//! mutation.

mod ledger;
mod types;

pub use ledger::Ledger;
pub use types::{Item, ItemFilter, NewItem};
