//! Error types for the wizard engine

use crate::state::{FieldKey, FieldKind, SubmissionStatus};
use thiserror::Error;

/// A catalog key that does not name any configured industry or plan.
///
/// The key sets are closed, so this only surfaces at the parsing boundary
/// (seed parameters, config file) and is treated as fatal by callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown industry key: {0:?}")]
    UnknownIndustry(String),
    #[error("unknown plan key: {0:?}")]
    UnknownPlan(String),
    #[error("unknown billing cycle: {0:?}")]
    UnknownBillingCycle(String),
}

/// Rejected field mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("field {key} holds {expected:?} values, got {actual:?}")]
    FieldKindMismatch {
        key: FieldKey,
        expected: FieldKind,
        actual: FieldKind,
    },
    #[error("form is locked while submission is {0}")]
    Locked(SubmissionStatus),
}

/// Failure reported by a registration submitter
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The registration service refused the payload; the message is user-facing
    #[error("{0}")]
    Rejected(String),
    #[error("registration was interrupted before it completed")]
    Interrupted,
    #[error("could not store registration: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode registration: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a submission attempt did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("submission is only available on the final step")]
    NotOnFinalStep,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the account is already activated")]
    AlreadyActivated,
    #[error("the consent step has validation errors")]
    Invalid,
}
