//! Platform adapters

pub mod messenger;
