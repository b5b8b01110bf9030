pub mod calculator;
pub mod comments;
pub mod config;
pub mod index;
pub mod lifecycle;
pub mod log;
