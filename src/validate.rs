//! Pure validation for the contact form.
//!
//! Verdicts are plain data: malformed input yields `is_valid: false`,
//! never an error. The email check is a minimal presence check (non-empty,
//! contains `@`), not RFC validation.

pub const NAME_REQUIRED: &str = "Name is required and cannot be empty";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_MISSING_AT: &str = "Email must contain \"@\" symbol";

/// Validity result for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_valid: bool,
    /// The message shown when the field is invalid; empty when valid.
    pub message: &'static str,
}

/// Field values captured at submit time, trimmed. Both fields are read
/// before any validation runs, so a partially-validated snapshot is never
/// observable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
}

impl FormSnapshot {
    pub fn capture(name: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        }
    }
}

/// Aggregate result of validating a snapshot. `errors` preserves field
/// order: name first, then email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

pub fn validate_name(name: &str) -> Verdict {
    Verdict {
        is_valid: !name.trim().is_empty(),
        message: NAME_REQUIRED,
    }
}

pub fn validate_email(email: &str) -> Verdict {
    let trimmed = email.trim();

    if trimmed.is_empty() {
        return Verdict {
            is_valid: false,
            message: EMAIL_REQUIRED,
        };
    }

    if !trimmed.contains('@') {
        return Verdict {
            is_valid: false,
            message: EMAIL_MISSING_AT,
        };
    }

    Verdict {
        is_valid: true,
        message: "",
    }
}

pub fn validate_form(snapshot: &FormSnapshot) -> FormValidation {
    let mut errors = Vec::new();

    let name = validate_name(&snapshot.name);
    if !name.is_valid {
        errors.push(name.message);
    }

    let email = validate_email(&snapshot.email);
    if !email.is_valid {
        errors.push(email.message);
    }

    FormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
