//! Dealer personalities and their tricks.
//!
//! - `registry`: the five profiles and uniform per-room selection
//! - `trick`: the per-hit trick dispatcher

pub mod registry;
pub mod trick;

pub use registry::{DealerKind, DealerProfile, DealerRegistry};
pub use trick::{apply_trick, TrickEffect, TrickOutcome, SNEAKY_SAM_THRESHOLD};
