//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Errors: Domain-specific errors
//! - Messaging: Payload parsing, backend routing, event dispatching

pub mod errors;
pub mod messaging;
