//! Player state: the accessor trait, the in-memory profile and its save file.

pub mod profile;
pub mod save;
pub mod state;

pub use profile::*;
pub use save::{SaveError, SaveManager};
pub use state::PlayerState;
