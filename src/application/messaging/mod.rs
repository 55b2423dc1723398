//! Message handling - webhook payload parsing, routing and dispatch

pub mod dispatcher;
pub mod parser;
pub mod router;

pub use dispatcher::EventDispatcher;
pub use parser::WebhookPayload;
pub use router::BackendRouter;
