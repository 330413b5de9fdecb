mod intent;
mod reducer;
mod state;

pub use intent::AlertIntent;
pub use reducer::AlertReducer;
pub use state::{AlertKind, AlertState};
