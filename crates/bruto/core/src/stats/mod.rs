//! Stat System
//!
//! # Architecture
//!
//! ```text
//! [ Stat names (closed enumerations) ]
//!      ↓
//! [ Arithmetic: percentage_of / sum_modifiers ]
//!      ↓
//! [ WeaponModifiers (sparse) ] → [ CombatStats (dense) ]
//! ```
//!
//! ## Principles
//!
//! 1. **Non-compounding**: every percentage is taken of the pre-modification
//!    base, so several modifiers on one stat add up instead of multiplying
//! 2. **Absent is not zero**: a sparse modifier set keeps "no effect" apart
//!    from "net-zero effect", even though both resolve to the same number
//! 3. **No rounding**: stats stay exact `f64`; display precision belongs to
//!    the consumer

pub mod arithmetic;
pub mod combat;
pub mod modifiers;
pub mod name;

pub use arithmetic::{percentage_of, sum_modifiers};
pub use combat::CombatStats;
pub use modifiers::WeaponModifiers;
pub use name::{AttributeName, StatName};
