use crate::ui::mvi::UiState;

/// Visual kind of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// State of the single shared alert surface.
///
/// Only one alert is live at a time. Each shown alert carries a generation
/// number so that the auto-hide scheduled for an earlier alert can never
/// dismiss a later one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AlertState {
    #[default]
    Hidden,
    Visible {
        kind: AlertKind,
        text: String,
        generation: u64,
    },
}

impl UiState for AlertState {}

impl AlertState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Visible { text, .. } => Some(text),
            Self::Hidden => None,
        }
    }

    pub fn kind(&self) -> Option<AlertKind> {
        match self {
            Self::Visible { kind, .. } => Some(*kind),
            Self::Hidden => None,
        }
    }
}
