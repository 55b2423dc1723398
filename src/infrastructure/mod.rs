//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Backends: Reply-generation providers (Dialogflow, Gemini mock)
//! - Adapters: Platform integrations (Messenger Send API)
//! - Server: Webhook HTTP endpoint

pub mod adapters;
pub mod backends;
pub mod config;
pub mod server;
