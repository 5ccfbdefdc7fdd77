use std::env;

/// Process configuration, read from the environment once at startup and passed
/// explicitly into the request handlers via `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub port: u16,
    pub log_level: String,
    pub public_dir: String,
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn load() -> Self {
        Self {
            openai_api_key: env_string("OPENAI_API_KEY", ""),
            openai_base_url: env_string("OPENAI_BASE_URL", "https://api.openai.com"),
            openai_model: env_string("OPENAI_MODEL", "gpt-5.1"),
            port: env_u16("PORT", 3000),
            log_level: env_string("LOG_LEVEL", "info"),
            public_dir: env_string("PUBLIC_DIR", "public"),
        }
    }
}
