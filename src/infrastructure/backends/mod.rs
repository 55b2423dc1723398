//! Reply backends - pluggable text-generation providers

pub mod providers;
pub mod traits;

pub use providers::{DialogflowProvider, GeminiMockProvider, GEMINI_MARKER};
pub use traits::ReplyBackend;
