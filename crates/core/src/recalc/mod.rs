//! Recalculation orchestrator: decides which lines to recompute for a trigger
//! and keeps the header totals in step with the lines.

pub mod service;
pub mod trigger;

#[cfg(test)]
mod service_props;

pub use service::Recalculator;
pub use trigger::{LineChange, RecalcOutcome, RecalcTrigger, SkipReason};
