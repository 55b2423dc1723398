//! Domain traits - Abstractions for infrastructure implementations

pub mod sender;

pub use sender::MessageSender;
