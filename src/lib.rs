//! messenger-relay - thin webhook relay between Facebook Messenger and
//! Dialogflow ES, with a generative-mock backend behind a keyword switch.

pub mod application;
pub mod domain;
pub mod infrastructure;
