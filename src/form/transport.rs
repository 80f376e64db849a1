use reqwest::blocking::{Client, RequestBuilder};

use crate::{
    config::HX_REQUEST_HEADER,
    errors::TodoError,
    form::submitter::TodoSubmission,
    utils::{base_url, load_todo_config},
};

/// Sends a form submission and hands back the response body
pub trait Transport {
    fn post_form(&self, path: &str, payload: &TodoSubmission) -> Result<String, TodoError>;
}

/// Blocking HTTP transport talking to the todo backend
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:5900")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Transport pointed at the configured API url
    pub fn from_config() -> Result<Self, TodoError> {
        let config = load_todo_config()?;

        Ok(Self::new(&base_url(&config.api_url)))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send with the fragment header and read the body of a 2xx response
    fn execute(&self, req: RequestBuilder) -> Result<String, TodoError> {
        let response = req.header(HX_REQUEST_HEADER, "true").send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(TodoError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Fetch an HTML fragment, e.g. the todo list
    pub fn get_fragment(&self, path: &str) -> Result<String, TodoError> {
        self.execute(self.client.get(self.url(path)))
    }

    pub fn post_empty(&self, path: &str, query: &[(&str, &str)]) -> Result<String, TodoError> {
        self.execute(self.client.post(self.url(path)).query(query))
    }

    pub fn delete(&self, path: &str, query: &[(&str, &str)]) -> Result<String, TodoError> {
        self.execute(self.client.delete(self.url(path)).query(query))
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, path: &str, payload: &TodoSubmission) -> Result<String, TodoError> {
        self.execute(self.client.post(self.url(path)).form(payload))
    }
}
