use crate::ui::mvi::UiState;

/// The two text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
}

/// Which control currently has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    /// Initial focus lands on the name field.
    #[default]
    Name,
    Email,
    Submit,
}

impl FormFocus {
    /// The field under focus, if focus is on a field at all.
    pub fn field(self) -> Option<FieldId> {
        match self {
            Self::Name => Some(FieldId::Name),
            Self::Email => Some(FieldId::Email),
            Self::Submit => None,
        }
    }
}

/// Idle vs. submitting; drives the submit affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
}

/// State of the contact form surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub focus: FormFocus,
    pub name_invalid: bool,
    pub email_invalid: bool,
    pub phase: SubmissionPhase,
}

impl UiState for FormState {}

impl FormState {
    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
        }
    }

    pub fn field_invalid(&self, id: FieldId) -> bool {
        match id {
            FieldId::Name => self.name_invalid,
            FieldId::Email => self.email_invalid,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Label for the submit control, projected from the phase.
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmissionPhase::Idle => "Submit Form",
            SubmissionPhase::Submitting => "Processing...",
        }
    }
}
