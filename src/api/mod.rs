//! Lambda entrypoint wiring: handler, orchestration service, and response
//! envelope builders.

pub mod handler;
pub mod helpers;

pub use handler::{QaService, function_handler, handler};
