//! Core amount engine for Ledgercalc.
//!
//! This crate contains pure calculation logic with ZERO I/O dependencies.
//! The form layer owns documents and raises triggers; everything here is a
//! deterministic function of the document, the trigger and the tenant's
//! [`DecimalProfile`].
//!
//! # Modules
//!
//! - `arithmetic` - Rounded decimal primitives
//! - `sanitize` - Lenient coercion of missing or malformed numbers
//! - `currency` - Exchange context and tier conversion
//! - `document` - Document, line and header total types
//! - `calc` - Line calculator and header aggregator
//! - `recalc` - Trigger-driven recalculation orchestrator

pub mod arithmetic;
pub mod calc;
pub mod currency;
pub mod document;
pub mod recalc;
pub mod sanitize;

pub use calc::{
    aggregate_header, apply_edit, recalculate_line, recalculate_line_in_place, round_entry,
};
pub use currency::{ExchangeContext, convert_amount};
pub use document::{Document, DocumentKind, HeaderTotals, LineAmount, LineEdit, TierTotals};
pub use ledgercalc_shared::{CurrencyTier, DecimalProfile};
pub use recalc::{LineChange, RecalcOutcome, RecalcTrigger, Recalculator, SkipReason};
