pub mod app;
pub mod config;
pub mod cpu;
pub mod diagnostics;
pub mod display;
pub mod engine;
pub mod error;
pub mod input;
pub mod instruction;
pub mod quirks;
pub mod state;
