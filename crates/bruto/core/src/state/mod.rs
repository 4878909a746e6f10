//! Combatant records read by the engine.
//!
//! Brutos are owned by the persistence layer. The engine only borrows them.
mod bruto;

pub use bruto::{Attributes, Bruto, BrutoId};
