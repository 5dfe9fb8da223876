//! Cross-cutting helpers shared by the server binary and library crates:
//! log initialisation and the small response bodies that are not records.

pub mod types;
pub mod utils;
