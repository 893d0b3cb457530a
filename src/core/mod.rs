//! Core: tuning constants, random rolls and the resolution session.

pub mod constants;
pub mod rolls;
pub mod session;

pub use session::GameSession;
