pub mod error;
pub mod request;
pub mod response;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::ServiceError;
pub use request::InterpretationRequest;
pub use response::InterpretResponse;
pub use service::{Card, InterpretationService};
