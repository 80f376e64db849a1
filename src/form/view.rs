/// Page surface the form submitter reads from and writes to.
///
/// Stands in for the document: the `#title`, `#description` and hidden `id`
/// inputs on the read side, and the `#todos-container`, `#form-container`
/// and `#actions-container` regions on the write side.
pub trait FormView {
    fn title(&self) -> String;
    fn description(&self) -> String;
    /// Value of the hidden `id` input, empty when the form has none
    fn hidden_id(&self) -> String;

    /// Replace the whole todo list region with a server fragment
    fn replace_todos(&mut self, html: String);
    fn clear_form(&mut self);
    fn show_actions(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub id: Option<String>,
}

impl FormFields {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: String::from(title),
            description: String::from(description),
            id: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(String::from(id));
        self
    }
}

/// In-memory page model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPage {
    pub form: Option<FormFields>,
    pub todos_html: String,
    pub actions: Display,
}

impl TodoPage {
    /// Page right after the "Add Todo" action opened a form
    pub fn with_form(fields: FormFields) -> Self {
        Self {
            form: Some(fields),
            todos_html: String::new(),
            actions: Display::None,
        }
    }
}

impl Default for TodoPage {
    fn default() -> Self {
        Self {
            form: None,
            todos_html: String::new(),
            actions: Display::Block,
        }
    }
}

impl FormView for TodoPage {
    fn title(&self) -> String {
        self.form
            .as_ref()
            .map(|f| f.title.clone())
            .unwrap_or_default()
    }

    fn description(&self) -> String {
        self.form
            .as_ref()
            .map(|f| f.description.clone())
            .unwrap_or_default()
    }

    fn hidden_id(&self) -> String {
        self.form
            .as_ref()
            .and_then(|f| f.id.clone())
            .unwrap_or_default()
    }

    fn replace_todos(&mut self, html: String) {
        self.todos_html = html;
    }

    fn clear_form(&mut self) {
        self.form = None;
    }

    fn show_actions(&mut self) {
        self.actions = Display::Block;
    }
}

#[cfg(test)]
mod view_test {
    use super::*;

    #[test]
    fn test_fields_read_from_open_form() {
        let page = TodoPage::with_form(FormFields::new("Buy milk", "2%").with_id("42"));

        assert_eq!(page.title(), "Buy milk");
        assert_eq!(page.description(), "2%");
        assert_eq!(page.hidden_id(), "42");
        assert_eq!(page.actions, Display::None);
    }

    #[test]
    fn test_missing_form_reads_empty() {
        let page = TodoPage::default();

        assert_eq!(page.title(), "");
        assert_eq!(page.description(), "");
        assert_eq!(page.hidden_id(), "");
    }

    #[test]
    fn test_create_form_has_no_hidden_id() {
        let page = TodoPage::with_form(FormFields::new("Buy milk", ""));

        assert_eq!(page.hidden_id(), "");
    }

    #[test]
    fn test_reset_regions() {
        let mut page = TodoPage::with_form(FormFields::new("a", "b"));

        page.replace_todos(String::from("<ul></ul>"));
        page.clear_form();
        page.show_actions();

        assert_eq!(page.form, None);
        assert_eq!(page.todos_html, "<ul></ul>");
        assert_eq!(page.actions, Display::Block);
    }
}
