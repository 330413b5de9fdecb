use crate::ui::alert::state::AlertKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AlertIntent {
    /// Show an alert, superseding whatever is currently visible.
    Show {
        kind: AlertKind,
        text: String,
        generation: u64,
    },
    /// Hide unconditionally. Idempotent.
    Hide,
    /// Auto-hide deadline fired for the given generation. Ignored when a
    /// newer alert has taken over the surface.
    Expire { generation: u64 },
}

impl Intent for AlertIntent {}
