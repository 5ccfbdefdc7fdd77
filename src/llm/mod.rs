pub mod openai;

pub use openai::{create_json_settings, extract_output_text};
