pub mod client;
pub mod commands;
pub mod credentials;
pub mod error;
pub mod prompt;
pub mod tasks;
