//! The advice-fetch state machine.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::AdviceIntent;
pub use reducer::AdviceReducer;
pub use state::FetchState;
pub use store::{AdviceStore, Subscription};
