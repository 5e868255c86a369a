/*
[INPUT]:  Type submodules for API communication
[OUTPUT]: Re-exported request/response/enum types
[POS]:    Data layer - module wiring
[UPDATE]: When adding new type modules
*/

pub mod enums;
pub mod requests;
pub mod responses;

pub use enums::TaskStatus;
pub use requests::TaskRequest;
pub use responses::{ErrorBody, HealthResponse, TaskResponse};
