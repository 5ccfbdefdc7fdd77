pub mod config;
pub mod device;
pub mod handlers;
pub mod llm;
pub mod prompt;
pub mod state;
pub mod utils;
