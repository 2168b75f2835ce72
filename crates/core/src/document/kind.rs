//! Document classification across the four subledgers.

use serde::{Deserialize, Serialize};

/// Subledger a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subledger {
    /// Accounts receivable.
    Ar,
    /// Accounts payable.
    Ap,
    /// Cash book.
    Cb,
    /// General ledger.
    Gl,
}

/// Transactional document types sharing the amount engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Sales invoice.
    ArInvoice,
    /// Customer debit note.
    ArDebitNote,
    /// Customer credit note.
    ArCreditNote,
    /// Customer receipt.
    ArReceipt,
    /// Supplier invoice.
    ApInvoice,
    /// Supplier debit note.
    ApDebitNote,
    /// Supplier credit note.
    ApCreditNote,
    /// Supplier payment.
    ApPayment,
    /// Cash-book receipt.
    CbReceipt,
    /// Cash-book payment.
    CbPayment,
    /// General journal.
    GlJournal,
}

impl DocumentKind {
    /// Returns the subledger that owns this document type.
    #[must_use]
    pub const fn subledger(&self) -> Subledger {
        match self {
            Self::ArInvoice | Self::ArDebitNote | Self::ArCreditNote | Self::ArReceipt => {
                Subledger::Ar
            }
            Self::ApInvoice | Self::ApDebitNote | Self::ApCreditNote | Self::ApPayment => {
                Subledger::Ap
            }
            Self::CbReceipt | Self::CbPayment => Subledger::Cb,
            Self::GlJournal => Subledger::Gl,
        }
    }

    /// Stable snake_case code, as used on the wire.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ArInvoice => "ar_invoice",
            Self::ArDebitNote => "ar_debit_note",
            Self::ArCreditNote => "ar_credit_note",
            Self::ArReceipt => "ar_receipt",
            Self::ApInvoice => "ap_invoice",
            Self::ApDebitNote => "ap_debit_note",
            Self::ApCreditNote => "ap_credit_note",
            Self::ApPayment => "ap_payment",
            Self::CbReceipt => "cb_receipt",
            Self::CbPayment => "cb_payment",
            Self::GlJournal => "gl_journal",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
