use std::fmt;

use crate::workspace::draft::{AccessControlType, WorkspaceDraft};
use crate::workspace::step::WizardStep;

/// Fields a validation error can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WorkspaceName,
    Password,
    PasswordConfirm,
    AutoCloseDate,
    PeerLimit,
    Contacts,
}

/// Field-level validation failures, worded as shown inline next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Workspace name is required")]
    NameRequired,

    #[error("Password is required")]
    PasswordRequired,
    #[error("Confirm password is required")]
    PasswordConfirmRequired,
    #[error("Passwords must match")]
    PasswordMismatch,

    #[error("Auto close date is required")]
    AutoCloseDateRequired,
    #[error("Number of peers is required")]
    PeerLimitRequired,
    #[error("Only numbers allowed")]
    PeerLimitNotNumeric,
    #[error("Only positive numbers allowed")]
    PeerLimitNotPositive,
    #[error("Maximum number of peers is 100")]
    PeerLimitTooLarge,

    #[error("At least 1 contact is required")]
    ContactsRequired,
}

impl ValidationError {
    pub fn field(self) -> Field {
        match self {
            Self::NameRequired => Field::WorkspaceName,
            Self::PasswordRequired => Field::Password,
            Self::PasswordConfirmRequired | Self::PasswordMismatch => Field::PasswordConfirm,
            Self::AutoCloseDateRequired => Field::AutoCloseDate,
            Self::PeerLimitRequired
            | Self::PeerLimitNotNumeric
            | Self::PeerLimitNotPositive
            | Self::PeerLimitTooLarge => Field::PeerLimit,
            Self::ContactsRequired => Field::Contacts,
        }
    }
}

/// Non-empty set of field errors blocking a step transition or a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepErrors(pub Vec<ValidationError>);

impl StepErrors {
    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }
}

impl fmt::Display for StepErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for StepErrors {}

/// Validate the current step of the draft.
///
/// Validation is strictly step-local: a later step's invalid state never
/// blocks navigation elsewhere. Returns every failing rule of the step so
/// all affected fields can be marked at once.
pub fn validate_step(step: WizardStep, draft: &WorkspaceDraft) -> Result<(), StepErrors> {
    let errors = match step {
        WizardStep::Params => validate_params(draft),
        WizardStep::Security => validate_security(draft),
        WizardStep::Permissions => validate_permissions(draft),
        // Pure display steps carry no field validation.
        WizardStep::Review | WizardStep::Success => Vec::new(),
    };

    if errors.is_empty() {
        Ok(())
    } else {
        Err(StepErrors(errors))
    }
}

fn validate_params(draft: &WorkspaceDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(ValidationError::NameRequired);
    }

    errors
}

fn validate_security(draft: &WorkspaceDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match draft.access_type {
        AccessControlType::Password => {
            if draft.password.is_empty() {
                errors.push(ValidationError::PasswordRequired);
            }
            if draft.password_confirm.is_empty() {
                errors.push(ValidationError::PasswordConfirmRequired);
            } else if draft.password_confirm.expose() != draft.password.expose() {
                errors.push(ValidationError::PasswordMismatch);
            }
        }
        // The selection minimum is checked when the submission payload is
        // built, not when leaving the security step.
        AccessControlType::SpecificContacts => {}
    }

    errors
}

fn validate_permissions(draft: &WorkspaceDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let permissions = &draft.permissions;

    if permissions.auto_close.active && permissions.auto_close.date.is_none() {
        errors.push(ValidationError::AutoCloseDateRequired);
    }

    if permissions.peer_limit.active {
        if let Some(error) = validate_peer_limit(&permissions.peer_limit.limit) {
            errors.push(error);
        }
    }

    if permissions.additional_owners.active && permissions.additional_owners.contacts.is_empty() {
        errors.push(ValidationError::ContactsRequired);
    }

    errors
}

fn validate_peer_limit(limit: &str) -> Option<ValidationError> {
    if limit.is_empty() {
        return Some(ValidationError::PeerLimitRequired);
    }
    if !limit.chars().all(|c| c.is_ascii_digit()) {
        return Some(ValidationError::PeerLimitNotNumeric);
    }

    // Digits-only input that overflows u32 is far beyond the cap anyway.
    match limit.parse::<u32>() {
        Ok(0) => Some(ValidationError::PeerLimitNotPositive),
        Ok(1..=100) => None,
        Ok(_) | Err(_) => Some(ValidationError::PeerLimitTooLarge),
    }
}
