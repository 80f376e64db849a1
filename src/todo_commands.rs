use inquire::Text;

use crate::{
    errors::TodoError,
    form::{FormAction, FormFields, FormSubmitter, HttpTransport, Submission, TodoPage},
};

/// Prompt for the form fields, then submit them
fn prompt_and_submit(
    submitter: &FormSubmitter<HttpTransport>,
    action: FormAction,
    id: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let title = Text::new("Title")
        .with_help_message("Title for your todo")
        .prompt()?;

    let description = Text::new("Description")
        .with_help_message("Optional, press enter to skip")
        .prompt()?;

    let mut fields = FormFields::new(&title, &description);
    if let Some(id) = id {
        fields = fields.with_id(id);
    }

    let mut page = TodoPage::with_form(fields);

    match submitter.submit(&mut page, action)? {
        Submission::Sent => {
            println!("{}", page.todos_html);
        }
        Submission::Rejected(e) => return Err(Box::new(e)),
    }

    Ok(())
}

/// Prompt user to create new todo
pub fn create_new_todo(
    submitter: &FormSubmitter<HttpTransport>,
) -> Result<(), Box<dyn std::error::Error>> {
    prompt_and_submit(submitter, FormAction::Create, None)
}

/// Prompt user for new values of an existing todo
pub fn update_todo(
    submitter: &FormSubmitter<HttpTransport>,
    id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    prompt_and_submit(submitter, FormAction::Update, Some(id))
}

/// Print the todo list fragment
pub fn list_todos(transport: &HttpTransport) -> Result<(), TodoError> {
    let list = transport.get_fragment("/todos")?;

    println!("{}", list);

    Ok(())
}

pub fn toggle_todo(transport: &HttpTransport, id: &str) -> Result<(), TodoError> {
    let item = transport.post_empty("/todos/toggle", &[("id", id)])?;

    println!("{}", item);

    Ok(())
}

pub fn delete_todo(transport: &HttpTransport, id: &str) -> Result<(), TodoError> {
    transport.delete("/todos/delete", &[("id", id)])?;

    println!("Deleted {}", id);

    Ok(())
}
