//! Server configuration read from the environment.

use std::env;

pub struct Config {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Base URL of the platform management API
    pub platform_api_url: String,
    /// Directory the console frontend is served from
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        // A missing .env file is fine; real environments set variables directly
        let _ = dotenvy::dotenv();

        Self {
            listen_addr: env::var("PD_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string()),
            platform_api_url: env::var("PD_PLATFORM_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            static_dir: env::var("PD_STATIC_DIR").unwrap_or_else(|_| "./dist".to_string()),
        }
    }
}
