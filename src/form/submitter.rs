use std::fmt;

use serde::Serialize;

use crate::{
    errors::TodoError,
    form::{transport::Transport, view::FormView},
};

/// Which submission the form performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Create,
    Update,
}

impl FormAction {
    pub fn path(&self) -> &'static str {
        match self {
            FormAction::Create => "/todos/",
            FormAction::Update => "/todos/update",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    TitleRequired,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "Title is required!"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Form-encoded body for create and update requests.
///
/// Field order is the wire order: `title`, `description`, `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoSubmission {
    pub title: String,
    pub description: String,
    pub id: String,
}

impl TodoSubmission {
    /// Read the form through the view. The hidden id is only read for updates.
    pub fn from_view<V: FormView>(view: &V, action: FormAction) -> Result<Self, ValidationError> {
        let title = view.title();

        // exact empty check, whitespace-only titles pass
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }

        let id = match action {
            FormAction::Create => String::new(),
            FormAction::Update => view.hidden_id(),
        };

        Ok(Self {
            title,
            description: view.description(),
            id,
        })
    }
}

/// Outcome of a submit that did not fail in transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Request succeeded and the page was reset
    Sent,
    /// Nothing was sent
    Rejected(ValidationError),
}

pub struct FormSubmitter<T: Transport> {
    transport: T,
}

impl<T: Transport> FormSubmitter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate the form, post it, and reset the page on success.
    ///
    /// On a transport or server failure the view is left untouched and the
    /// error is returned.
    pub fn submit<V: FormView>(
        &self,
        view: &mut V,
        action: FormAction,
    ) -> Result<Submission, TodoError> {
        let payload = match TodoSubmission::from_view(view, action) {
            Ok(payload) => payload,
            Err(e) => return Ok(Submission::Rejected(e)),
        };

        let path = action.path();
        log::debug!("Submitting {:?} to {}", action, path);

        let body = self.transport.post_form(path, &payload).map_err(|e| {
            log::warn!("Submit to {} failed: {}", path, e);
            e
        })?;

        view.replace_todos(body);
        view.clear_form();
        view.show_actions();

        Ok(Submission::Sent)
    }
}
