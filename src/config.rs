lazy_static::lazy_static! {
    pub static ref API_URL: String = std::env::var("API_URL").unwrap_or_else(|_| String::from("localhost:5900"));
}

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "todo_form=debug,actix_web=info,actix_server=info";

/// Header htmx-style clients send so the server answers with fragments
pub const HX_REQUEST_HEADER: &str = "HX-Request";
