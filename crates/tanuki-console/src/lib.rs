/*
[INPUT]:  Public API exports for tanuki-console crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod controller;

// Re-export main types for convenience
pub use config::ConsoleConfig;
pub use controller::{InteractionState, SubmitError, TaskController};
