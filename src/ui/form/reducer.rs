use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FieldId, FormFocus, FormState, SubmissionPhase};
use crate::ui::mvi::Reducer;
use crate::validate::{validate_email, validate_name};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert(ch) => {
                if let Some(field) = state.focus.field() {
                    match field {
                        FieldId::Name => state.name.push(ch),
                        FieldId::Email => state.email.push(ch),
                    }
                    clear_marker_if_valid(&mut state, field);
                }
                state
            }
            FormIntent::Backspace => {
                if let Some(field) = state.focus.field() {
                    match field {
                        FieldId::Name => {
                            state.name.pop();
                        }
                        FieldId::Email => {
                            state.email.pop();
                        }
                    }
                    clear_marker_if_valid(&mut state, field);
                }
                state
            }
            FormIntent::FocusNext => {
                state.focus = match state.focus {
                    FormFocus::Name => FormFocus::Email,
                    FormFocus::Email => FormFocus::Submit,
                    FormFocus::Submit => FormFocus::Name,
                };
                state
            }
            FormIntent::FocusPrev => {
                state.focus = match state.focus {
                    FormFocus::Name => FormFocus::Submit,
                    FormFocus::Email => FormFocus::Name,
                    FormFocus::Submit => FormFocus::Email,
                };
                state
            }
            FormIntent::ClearMarkers => {
                state.name_invalid = false;
                state.email_invalid = false;
                state
            }
            FormIntent::MarkInvalid { name, email } => {
                state.name_invalid = name;
                state.email_invalid = email;
                state
            }
            FormIntent::BeginSubmit => {
                state.phase = SubmissionPhase::Submitting;
                state
            }
            FormIntent::FinishSubmit => {
                state.name.clear();
                state.email.clear();
                state.name_invalid = false;
                state.email_invalid = false;
                state.phase = SubmissionPhase::Idle;
                state.focus = FormFocus::Name;
                state
            }
        }
    }
}

/// Live re-validation on edit: a marker is cleared as soon as the field
/// becomes valid, but never set here (only a submit sets markers).
fn clear_marker_if_valid(state: &mut FormState, field: FieldId) {
    match field {
        FieldId::Name => {
            if validate_name(&state.name).is_valid {
                state.name_invalid = false;
            }
        }
        FieldId::Email => {
            if validate_email(&state.email).is_valid {
                state.email_invalid = false;
            }
        }
    }
}
