pub mod api;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod render;
pub mod report;
pub mod runner;
pub mod table;
