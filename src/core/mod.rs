pub mod plan;
pub mod render;
pub mod runner;
pub mod session;
