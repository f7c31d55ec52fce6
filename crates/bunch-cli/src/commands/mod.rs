//! Command implementations for bunch-cli

pub mod switch;

pub use switch::run_switch;
