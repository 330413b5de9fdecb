use crate::config::Config;
use crate::ui::alert::{AlertIntent, AlertKind, AlertReducer, AlertState};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::validate::{validate_email, validate_form, validate_name, FormSnapshot};
use std::time::Instant;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns all mutable UI state and the submission flow.
///
/// The flow is: submit trigger -> clear markers and current alert ->
/// capture a snapshot -> validate -> either reject (error alert, field
/// markers, no delay) or accept (affordance disabled, simulated latency,
/// success alert, form reset).
///
/// The two suspending operations (alert auto-hide, simulated submission
/// latency) are deadline timers polled from the event-loop tick. Storing a
/// new deadline replaces the old one, which is how a newer alert cancels
/// the pending hide of the alert it superseded.
pub struct App {
    should_quit: bool,
    config: Config,
    form: FormState,
    alert: AlertState,
    /// Monotonic counter; each shown alert gets the next generation.
    alert_generation: u64,
    /// Pending auto-hide deadline, tagged with the generation it was
    /// scheduled for.
    alert_hide_at: Option<(Instant, u64)>,
    /// Pending simulated-submission completion, carrying the accepted
    /// snapshot for the success message.
    submit_done_at: Option<(Instant, FormSnapshot)>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            config,
            form: FormState::default(),
            alert: AlertState::default(),
            alert_generation: 0,
            alert_hide_at: None,
            submit_done_at: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    pub fn insert_char(&mut self, ch: char) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Insert(ch));
    }

    pub fn backspace(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Backspace);
    }

    pub fn focus_next(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::FocusPrev);
    }

    /// Submit trigger. Ignored while a submission is already in flight;
    /// the disabled affordance is the only throttle.
    pub fn submit(&mut self) {
        if self.form.is_submitting() {
            return;
        }

        dispatch_mvi!(self, form, FormReducer, FormIntent::ClearMarkers);
        self.hide_alert();

        // Both fields are read before any validation runs.
        let snapshot = FormSnapshot::capture(&self.form.name, &self.form.email);
        let validation = validate_form(&snapshot);

        if validation.is_valid {
            tracing::info!(name = %snapshot.name, email = %snapshot.email, "submission accepted");
            dispatch_mvi!(self, form, FormReducer, FormIntent::BeginSubmit);
            let deadline = Instant::now() + self.config.submit_latency();
            self.submit_done_at = Some((deadline, snapshot));
        } else {
            tracing::debug!(errors = validation.errors.len(), "submission rejected");
            dispatch_mvi!(
                self,
                form,
                FormReducer,
                FormIntent::MarkInvalid {
                    name: !validate_name(&snapshot.name).is_valid,
                    email: !validate_email(&snapshot.email).is_valid,
                }
            );
            let text = format!("\u{274c} Error: {}.", validation.errors.join(". "));
            self.show_alert(AlertKind::Error, text);
        }
    }

    /// Show an alert, superseding the current one and its pending
    /// auto-hide.
    pub fn show_alert(&mut self, kind: AlertKind, text: String) {
        self.alert_generation += 1;
        let generation = self.alert_generation;
        dispatch_mvi!(
            self,
            alert,
            AlertReducer,
            AlertIntent::Show {
                kind,
                text,
                generation,
            }
        );
        let deadline = Instant::now() + self.config.alert_duration();
        self.alert_hide_at = Some((deadline, generation));
    }

    /// Hide the alert and cancel its pending auto-hide. Idempotent.
    pub fn hide_alert(&mut self) {
        dispatch_mvi!(self, alert, AlertReducer, AlertIntent::Hide);
        self.alert_hide_at = None;
    }

    /// Event-loop tick: drive pending deadlines.
    pub fn on_tick(&mut self) {
        self.poll_timers(Instant::now());
    }

    /// Fire any deadline that is due at `now`. Split out from `on_tick`
    /// so tests can drive time explicitly.
    pub fn poll_timers(&mut self, now: Instant) {
        // Alert hide first: a hide scheduled by a submission completing in
        // this same poll must wait its full duration.
        if let Some((deadline, generation)) = self.alert_hide_at {
            if now >= deadline {
                self.alert_hide_at = None;
                dispatch_mvi!(self, alert, AlertReducer, AlertIntent::Expire { generation });
            }
        }

        if let Some((deadline, snapshot)) = self.submit_done_at.take() {
            if now >= deadline {
                self.finish_submission(snapshot);
            } else {
                self.submit_done_at = Some((deadline, snapshot));
            }
        }
    }

    fn finish_submission(&mut self, snapshot: FormSnapshot) {
        tracing::info!(name = %snapshot.name, "submission completed");
        let text = format!(
            "\u{2705} Success! Form submitted successfully. Name: {}, Email: {}",
            snapshot.name, snapshot.email
        );
        dispatch_mvi!(self, form, FormReducer, FormIntent::FinishSubmit);
        self.show_alert(AlertKind::Success, text);
    }
}
