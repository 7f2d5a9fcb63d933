pub mod commands;
pub mod config;
pub mod display;
pub mod wallet;
