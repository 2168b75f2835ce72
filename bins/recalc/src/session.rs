//! Replay of form events against a single document.

use std::io::Read;

use ledgercalc_core::{
    Document, LineAmount, LineEdit, RecalcOutcome, RecalcTrigger, Recalculator,
};
use ledgercalc_shared::{AppError, AppResult};
use serde::Deserialize;
use tracing::info;

/// One event raised by the form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SessionEvent {
    /// One of the three recalculation triggers.
    Trigger(RecalcTrigger),
    /// A line added, edited or removed by stable line number.
    Line(LineOperation),
}

/// Line operations addressed by line number.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineOperation {
    /// Append a line; a `line_no` of 0 gets the next free number.
    AddLine {
        /// The new line.
        line: LineAmount,
    },
    /// Edit one raw field of a line.
    EditLine {
        /// Stable line number.
        line_no: u32,
        /// The edited field and its value.
        edit: LineEdit,
    },
    /// Remove a line.
    RemoveLine {
        /// Stable line number.
        line_no: u32,
    },
}

/// A document plus the events to replay against it.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Document as last saved by the form.
    pub document: Document,
    /// Events in the order they were raised.
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

impl Session {
    /// Reads a session from JSON.
    ///
    /// Numeric fields decode leniently; only structural problems (unknown
    /// event type, missing `document`) are errors.
    pub fn read(reader: impl Read) -> AppResult<Self> {
        serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                AppError::Io(e.to_string())
            } else {
                AppError::Parse(e.to_string())
            }
        })
    }

    /// Opens the document, then replays every event in order, returning the
    /// final document and one outcome per event.
    pub fn replay(self, recalc: &Recalculator) -> (Document, Vec<RecalcOutcome>) {
        let Self {
            mut document,
            events,
        } = self;
        recalc.open_document(&mut document);

        let outcomes = events
            .into_iter()
            .enumerate()
            .map(|(seq, event)| {
                let outcome = dispatch(recalc, &mut document, event);
                info!(seq, outcome = ?outcome, "Event handled");
                outcome
            })
            .collect();

        (document, outcomes)
    }
}

fn dispatch(recalc: &Recalculator, doc: &mut Document, event: SessionEvent) -> RecalcOutcome {
    match event {
        SessionEvent::Trigger(trigger) => recalc.apply(doc, &trigger),
        SessionEvent::Line(LineOperation::AddLine { line }) => recalc.add_line(doc, line),
        SessionEvent::Line(LineOperation::EditLine { line_no, edit }) => {
            recalc.edit_line(doc, line_no, edit)
        }
        SessionEvent::Line(LineOperation::RemoveLine { line_no }) => {
            recalc.remove_line(doc, line_no)
        }
    }
}
