use thiserror::Error;

use crate::forms::FormKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    #[error("Page not found: {0}")]
    SectionNotFound(String),

    #[error("Modal not found: {0}")]
    ModalNotFound(String),

    #[error("{0} submission already in flight")]
    SubmissionInFlight(FormKind),

    #[error("no open modal hosts the {0} form, submission skipped")]
    NoActiveModal(FormKind),

    #[error("{kind} form invalid: {message}")]
    Validation { kind: FormKind, message: String },
}
