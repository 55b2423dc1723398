//! Reply backend providers

pub mod dialogflow;
pub mod gemini;

pub use dialogflow::DialogflowProvider;
pub use gemini::{GeminiMockProvider, GEMINI_MARKER};
