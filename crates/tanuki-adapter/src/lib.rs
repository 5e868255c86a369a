/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Tanuki adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod source;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    API_KEY_HEADER,
    ClientConfig,
    Credentials,
    Result,
    TanukiClient,
    TanukiError,
};

// Re-export the task source seam
pub use source::{
    DEFAULT_SIMULATED_DELAY,
    RemoteTaskSource,
    SimulatedBackend,
    TaskSource,
};

// Re-export all types
pub use types::*;
