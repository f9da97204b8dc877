use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables. Every key
/// has a default targeting a local development setup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host for the HTTP listener.
    pub web_host: String,
    /// Bind port for the HTTP listener.
    pub web_port: u16,
    /// Base URL of the external blog service.
    pub blog_api_url: String,
    /// Interpreter executable used to run the posting script.
    pub python_bin: PathBuf,
    /// Directory holding the posting script and its credentials file.
    pub resource_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "8030".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
            blog_api_url: env::var("BLOG_API_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            python_bin: env::var("PYTHON_BIN")
                .unwrap_or_else(|_| "/usr/bin/python3".to_string())
                .into(),
            resource_dir: env::var("RESOURCE_DIR")
                .unwrap_or_else(|_| "resources".to_string())
                .into(),
        }
    }
}
