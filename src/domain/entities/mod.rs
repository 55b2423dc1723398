//! Domain entities - Core business objects with no external dependencies

pub mod event;

pub use event::{Backend, EventKind, InboundEvent, OutboundMessage, ReplyRequest, ReplyResult};
