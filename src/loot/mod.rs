//! Loot resolution: drop-chance modifier and drop tables.

pub mod drops;
pub mod modifier;

pub use drops::*;
pub use modifier::*;
