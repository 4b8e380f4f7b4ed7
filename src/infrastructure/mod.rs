pub mod config;
pub mod diagnostic;
pub mod kafka;
pub mod logger;
