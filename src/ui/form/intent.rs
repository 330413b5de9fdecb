use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Type a character into the focused field.
    Insert(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Move focus forward (name -> email -> submit -> name).
    FocusNext,
    /// Move focus backward.
    FocusPrev,
    /// Clear both field-error markers (submit entry, before validation).
    ClearMarkers,
    /// Mark the individually-invalid fields after a rejected submit.
    MarkInvalid { name: bool, email: bool },
    /// Validation passed; submission is now in flight.
    BeginSubmit,
    /// Simulated submission completed: clear fields, markers, and phase.
    FinishSubmit,
}

impl Intent for FormIntent {}
