pub mod factory;
pub mod renderers;
pub mod runner;
