//! Recalculation orchestrator.
//!
//! The form layer reports one of three triggers; the orchestrator picks the
//! affected lines, recomputes them, then re-aggregates the header from the
//! whole collection. Lines are always recomputed before the header, and every
//! call leaves the header consistent with the lines before it returns.

use ledgercalc_shared::DecimalProfile;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::trigger::{LineChange, RecalcOutcome, RecalcTrigger, SkipReason};
use crate::calc::{aggregate_header, apply_edit, recalculate_line_in_place, round_entry};
use crate::currency::ExchangeContext;
use crate::document::{Document, LineAmount, LineEdit};

/// Drives recalculation of documents for one tenant.
///
/// Holds the tenant's precision profile; it never reads settings from
/// anywhere else.
#[derive(Debug, Clone, Copy)]
pub struct Recalculator {
    profile: DecimalProfile,
}

impl Recalculator {
    /// Creates an orchestrator for the given precision profile.
    #[must_use]
    pub const fn new(profile: DecimalProfile) -> Self {
        Self { profile }
    }

    /// The precision profile in use.
    #[must_use]
    pub const fn profile(&self) -> &DecimalProfile {
        &self.profile
    }

    /// Dispatches a trigger to its handler.
    #[tracing::instrument(
        skip_all,
        fields(trigger = trigger.name(), subledger = ?doc.kind.subledger())
    )]
    pub fn apply(&self, doc: &mut Document, trigger: &RecalcTrigger) -> RecalcOutcome {
        match *trigger {
            RecalcTrigger::ExchangeRateChanged { rate, country_rate } => {
                self.on_exchange_rate_changed(doc, rate, country_rate)
            }
            RecalcTrigger::LineChanged { change } => self.on_line_changed(doc, change),
            RecalcTrigger::VisibilityChanged { tax_field_visible } => {
                self.on_visibility_changed(doc, tax_field_visible)
            }
        }
    }

    /// Applies new header exchange rate(s) and recomputes every line.
    ///
    /// A zero or negative rate leaves the document exactly as it was. With the
    /// country currency off, the country rate is forced to the transaction rate.
    #[tracing::instrument(
        skip_all,
        fields(kind = %doc.kind, subledger = ?doc.kind.subledger(), lines = doc.lines.len())
    )]
    pub fn on_exchange_rate_changed(
        &self,
        doc: &mut Document,
        new_rate: Decimal,
        new_country_rate: Option<Decimal>,
    ) -> RecalcOutcome {
        let enabled = doc.exchange.country_currency_enabled;
        let candidate = ExchangeContext {
            transaction_rate: new_rate,
            country_rate: new_country_rate.unwrap_or(doc.exchange.country_rate),
            country_currency_enabled: enabled,
        }
        .normalized(self.profile.exchange_rate_decimals);

        let country_degenerate =
            enabled && new_country_rate.is_some() && candidate.country_rate <= Decimal::ZERO;
        if !candidate.is_live() || country_degenerate {
            warn!(
                rate = %new_rate,
                country_rate = ?new_country_rate,
                "Non-positive exchange rate, recalculation skipped"
            );
            return RecalcOutcome::Skipped {
                reason: SkipReason::NonPositiveRate,
            };
        }

        doc.exchange = candidate;

        for line in &mut doc.lines {
            recalculate_line_in_place(line, &doc.exchange, &self.profile);
        }
        self.refresh_header(doc);

        debug!(
            rate = %candidate.transaction_rate,
            country_rate = %candidate.country_rate,
            "Exchange rate applied"
        );
        RecalcOutcome::Applied {
            lines_recalculated: doc.lines.len(),
        }
    }

    /// Recomputes the changed line (if any) and re-aggregates the header.
    ///
    /// An index outside the collection is logged and only the header is
    /// refreshed.
    #[tracing::instrument(
        skip_all,
        fields(kind = %doc.kind, subledger = ?doc.kind.subledger(), change = ?change)
    )]
    pub fn on_line_changed(&self, doc: &mut Document, change: LineChange) -> RecalcOutcome {
        let mut lines_recalculated = 0;

        if let Some(index) = change.index() {
            if let Some(line) = doc.lines.get_mut(index) {
                recalculate_line_in_place(line, &doc.exchange, &self.profile);
                lines_recalculated = 1;
            } else {
                warn!(index, lines = doc.lines.len(), "Changed line not found");
            }
        }

        self.refresh_header(doc);
        RecalcOutcome::Applied { lines_recalculated }
    }

    /// Shows or hides the tax field.
    ///
    /// Hiding zeroes every tax figure on every line. Showing recomputes every
    /// line from its current figures; zeroed tax amounts are not restored.
    #[tracing::instrument(
        skip_all,
        fields(
            kind = %doc.kind,
            subledger = ?doc.kind.subledger(),
            tax_field_visible = tax_field_visible
        )
    )]
    pub fn on_visibility_changed(
        &self,
        doc: &mut Document,
        tax_field_visible: bool,
    ) -> RecalcOutcome {
        doc.tax_field_visible = tax_field_visible;

        let lines_recalculated = if tax_field_visible {
            for line in &mut doc.lines {
                recalculate_line_in_place(line, &doc.exchange, &self.profile);
            }
            doc.lines.len()
        } else {
            0
        };

        self.refresh_header(doc);
        RecalcOutcome::Applied { lines_recalculated }
    }

    /// Brings a document loaded from storage or the wire in line with the
    /// profile: rounds the rates and every entry figure, recomputes every line
    /// and rebuilds the header.
    #[tracing::instrument(
        skip_all,
        fields(kind = %doc.kind, subledger = ?doc.kind.subledger(), lines = doc.lines.len())
    )]
    pub fn open_document(&self, doc: &mut Document) -> RecalcOutcome {
        doc.exchange = doc.exchange.normalized(self.profile.exchange_rate_decimals);
        for line in &mut doc.lines {
            round_entry(line, &self.profile);
            recalculate_line_in_place(line, &doc.exchange, &self.profile);
        }
        self.refresh_header(doc);
        RecalcOutcome::Applied {
            lines_recalculated: doc.lines.len(),
        }
    }

    /// Appends `line` and recomputes it.
    ///
    /// Entry figures are rounded to their precisions. A `line_no` of zero, or
    /// one already on the document, is replaced by the next free line number.
    pub fn add_line(&self, doc: &mut Document, mut line: LineAmount) -> RecalcOutcome {
        if line.line_no == 0 || doc.line_index(line.line_no).is_some() {
            let assigned = doc.next_line_no();
            if line.line_no != 0 {
                warn!(requested = line.line_no, assigned, "Line number in use, reassigned");
            }
            line.line_no = assigned;
        }
        round_entry(&mut line, &self.profile);

        doc.lines.push(line);
        let index = doc.lines.len() - 1;
        self.on_line_changed(doc, LineChange::Added { index })
    }

    /// Applies a raw field edit to the line numbered `line_no` and recomputes it.
    pub fn edit_line(&self, doc: &mut Document, line_no: u32, edit: LineEdit) -> RecalcOutcome {
        let Some(index) = doc.line_index(line_no) else {
            warn!(line_no, "Edit for unknown line ignored");
            return RecalcOutcome::Skipped {
                reason: SkipReason::UnknownLine,
            };
        };

        apply_edit(&mut doc.lines[index], edit, &self.profile);
        self.on_line_changed(doc, LineChange::Edited { index })
    }

    /// Removes the line numbered `line_no` and re-aggregates the header.
    pub fn remove_line(&self, doc: &mut Document, line_no: u32) -> RecalcOutcome {
        let Some(index) = doc.line_index(line_no) else {
            warn!(line_no, "Removal of unknown line ignored");
            return RecalcOutcome::Skipped {
                reason: SkipReason::UnknownLine,
            };
        };

        doc.lines.remove(index);
        self.on_line_changed(doc, LineChange::Deleted)
    }

    /// Enforces tax visibility, then rebuilds the header from the lines.
    fn refresh_header(&self, doc: &mut Document) {
        if !doc.tax_field_visible {
            doc.lines.iter_mut().for_each(LineAmount::clear_tax);
        }

        let enabled = doc.exchange.country_currency_enabled;
        doc.totals = aggregate_header(&doc.lines, &self.profile, enabled);

        debug!(
            lines = doc.lines.len(),
            total = %doc.totals.transaction.total_amount_after_tax,
            local_total = %doc.totals.local.total_amount_after_tax,
            country_total = %doc.totals.country.total_amount_after_tax,
            "Header re-aggregated"
        );
    }
}
