//! Document model shared by every subledger.
//!
//! A document is one header (exchange context, visibility flag, cached totals)
//! plus an ordered collection of lines keyed by a stable line number.
//! Subledger-specific fields stay with the calling form layer.

pub mod kind;
pub mod line;
pub mod totals;

use serde::{Deserialize, Serialize};

use crate::currency::ExchangeContext;

pub use kind::{DocumentKind, Subledger};
pub use line::{LineAmount, LineEdit};
pub use totals::{HeaderDrift, HeaderTotals, TierDrift, TierTotals};

/// A financial document under edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document type.
    pub kind: DocumentKind,
    /// Rates in force.
    #[serde(default)]
    pub exchange: ExchangeContext,
    /// Whether the tax field applies to this document / transaction type.
    #[serde(default = "default_tax_field_visible")]
    pub tax_field_visible: bool,
    /// Line collection.
    #[serde(default)]
    pub lines: Vec<LineAmount>,
    /// Cached aggregation of `lines`.
    #[serde(default)]
    pub totals: HeaderTotals,
}

const fn default_tax_field_visible() -> bool {
    true
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new(kind: DocumentKind, exchange: ExchangeContext) -> Self {
        Self {
            kind,
            exchange,
            tax_field_visible: true,
            lines: Vec::new(),
            totals: HeaderTotals::ZERO,
        }
    }

    /// Position of the line numbered `line_no`.
    #[must_use]
    pub fn line_index(&self, line_no: u32) -> Option<usize> {
        self.lines.iter().position(|line| line.line_no == line_no)
    }

    /// Next free line number (one past the highest in use).
    #[must_use]
    pub fn next_line_no(&self) -> u32 {
        self.lines
            .iter()
            .map(|line| line.line_no)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }
}
