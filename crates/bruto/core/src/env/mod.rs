//! Capabilities injected into the engine.
//!
//! The engine never reaches for a global random generator. Callers hand a
//! [`RandomSource`] to the weapon draw, so tests can substitute a seeded or
//! scripted stream and replay the same outcomes.
pub mod rng;

pub use rng::{PcgSource, RandSource, RandomSource, ScriptedSource, compute_seed};
