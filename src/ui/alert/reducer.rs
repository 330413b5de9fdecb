use crate::ui::alert::intent::AlertIntent;
use crate::ui::alert::state::AlertState;
use crate::ui::mvi::Reducer;

pub struct AlertReducer;

impl Reducer for AlertReducer {
    type State = AlertState;
    type Intent = AlertIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AlertIntent::Show {
                kind,
                text,
                generation,
            } => AlertState::Visible {
                kind,
                text,
                generation,
            },
            AlertIntent::Hide => AlertState::Hidden,
            AlertIntent::Expire { generation } => match state {
                AlertState::Visible {
                    generation: live, ..
                } if live == generation => AlertState::Hidden,
                // Stale deadline from a superseded alert: leave the live
                // alert alone.
                other => other,
            },
        }
    }
}
