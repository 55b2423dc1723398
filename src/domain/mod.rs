//! Domain layer - Core business objects with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (InboundEvent, ReplyResult, OutboundMessage)
//! - Traits: Abstractions for infrastructure (MessageSender)

pub mod entities;
pub mod traits;
