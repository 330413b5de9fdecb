//! Model-View-Intent primitives for the UI layer.
//!
//! Unidirectional data flow: an intent (user action or timer expiry) goes
//! through a reducer, which returns the next state; the view is a pure
//! projection of state. Reducers are the only place state transitions
//! happen and must be pure functions.

/// Marker trait for UI state objects.
///
/// States are immutable values: a transition clones/moves the old state
/// into a new one. `PartialEq` allows change detection, `Default` gives
/// the initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions, timer expiries, flow events.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
