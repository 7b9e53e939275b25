mod store;
mod types;

pub use store::{ProfileStore, HISTORY_KEY, PROFILE_KEY};
pub use types::{UserProfile, WorkoutRecord};
