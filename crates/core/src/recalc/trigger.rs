//! Recalculation triggers and outcomes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sanitize::{lenient_decimal, lenient_opt_decimal};

/// Which line of the collection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineChange {
    /// A line was appended / inserted at `index`.
    Added {
        /// Position in the line collection.
        index: usize,
    },
    /// The line at `index` was edited.
    Edited {
        /// Position in the line collection.
        index: usize,
    },
    /// A line was removed; the collection already reflects it.
    Deleted,
}

impl LineChange {
    /// Position of the line to recompute, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Added { index } | Self::Edited { index } => Some(*index),
            Self::Deleted => None,
        }
    }
}

/// Event raised by the form layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecalcTrigger {
    /// Header exchange rate(s) edited.
    ExchangeRateChanged {
        /// New document-to-local rate.
        #[serde(default, deserialize_with = "lenient_decimal")]
        rate: Decimal,
        /// New document-to-country rate, when it changed too.
        #[serde(default, deserialize_with = "lenient_opt_decimal")]
        country_rate: Option<Decimal>,
    },
    /// A single line was added, edited or deleted.
    LineChanged {
        /// What happened to the line.
        change: LineChange,
    },
    /// The tax field was shown or hidden for the document type.
    VisibilityChanged {
        /// Whether the tax field is visible.
        tax_field_visible: bool,
    },
}

impl RecalcTrigger {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ExchangeRateChanged { .. } => "exchange_rate_changed",
            Self::LineChanged { .. } => "line_changed",
            Self::VisibilityChanged { .. } => "visibility_changed",
        }
    }
}

/// Why a trigger left the document untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A zero or negative exchange rate was supplied.
    NonPositiveRate,
    /// The referenced line number is not on the document.
    UnknownLine,
}

/// Result of handling one trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecalcOutcome {
    /// Lines and header were recomputed.
    Applied {
        /// Number of lines run through the line calculator.
        lines_recalculated: usize,
    },
    /// Nothing changed.
    Skipped {
        /// Why the trigger was ignored.
        reason: SkipReason,
    },
}

impl RecalcOutcome {
    /// Returns true if the document was recomputed.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}
