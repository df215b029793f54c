pub mod config;
pub mod fetch;
pub mod pipeline;
pub mod render;
