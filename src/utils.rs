use std::{net::TcpStream, path::PathBuf};

use serde::Deserialize;

use crate::{config::API_URL, errors::TodoError};

/// Client settings stored at ~/todo/config.json
#[derive(Debug, Deserialize, PartialEq)]
pub struct TodoConfig {
    pub api_url: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.clone(),
        }
    }
}

/// Checks if something already listens on the `Todo` server address
///
/// # Arguments
/// * `address` host:port of the server
pub fn is_server_running(address: &str) -> bool {
    TcpStream::connect(address).is_ok()
}

fn config_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push("todo");
    path.push("config.json");

    Some(path)
}

/// Load client config, falling back to `API_URL` when no config file exists
pub fn load_todo_config() -> Result<TodoConfig, TodoError> {
    load_todo_config_from(config_path())
}

fn load_todo_config_from(path: Option<PathBuf>) -> Result<TodoConfig, TodoError> {
    match path {
        Some(path) if path.exists() => {
            let contents = std::fs::read_to_string(path)?;

            let config: TodoConfig = serde_json::from_str(contents.as_str())?;

            if config.api_url.is_empty() {
                return Err(TodoError::ConfigError(String::from("api_url is empty")));
            }

            Ok(config)
        }
        _ => Ok(TodoConfig::default()),
    }
}

/// Prefix a host:port with a scheme unless it already has one
pub fn base_url(api_url: &str) -> String {
    let api_url = api_url.trim_end_matches('/');

    if api_url.starts_with("http://") || api_url.starts_with("https://") {
        String::from(api_url)
    } else {
        format!("http://{}", api_url)
    }
}

/// Escape text for safe interpolation into HTML content and attributes
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
