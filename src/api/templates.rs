use crate::{models::todo_model::Todo, utils::escape_html};

/// Path the index loads the form script from
pub const SCRIPT_PATH: &str = "/static/js/script.js";

/// Hides the actions once a form fragment has been swapped in
const OPEN_FORM_HOOK: &str = r#"hx-on::after-request="if (event.detail.successful) document.getElementById('actions-container').style.display = 'none'""#;

/// Full page, served to non-htmx requests
pub fn render_index(todos: &[Todo]) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Todo List</title>
<script src="https://unpkg.com/htmx.org@1.9.12"></script>
<script src="{script}"></script>
</head>
<body>
<h1>Todo List</h1>
<section id="actions-container" class="actions" style="display: block">
<button class="add-btn" hx-get="/todos/form" hx-target="#form-container" hx-swap="innerHTML" {open_hook}>Add Todo</button>
</section>
<div id="form-container"></div>
<div id="todos-container">{list}</div>
</body>
</html>
"##,
        script = SCRIPT_PATH,
        open_hook = OPEN_FORM_HOOK,
        list = render_todo_list(todos)
    )
}

/// Contents of `#todos-container`
pub fn render_todo_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return String::from(r#"<p class="empty">No todos yet</p>"#);
    }

    let mut html = String::from(r#"<ul class="todo-list">"#);

    for todo in todos {
        html.push_str(&render_todo_item(todo));
    }

    html.push_str("</ul>");
    html
}

pub fn render_todo_item(todo: &Todo) -> String {
    let id = escape_html(&todo.id);
    let class = if todo.completed {
        "todo-item completed"
    } else {
        "todo-item"
    };
    let toggle_label = if todo.completed { "Undo" } else { "Done" };

    format!(
        r##"<li id="todo-{id}" class="{class}"><span class="title">{title}</span><p class="description">{description}</p><button hx-post="/todos/toggle?id={id}" hx-target="#todo-{id}" hx-swap="outerHTML">{toggle_label}</button><button hx-get="/todos/form?id={id}" hx-target="#form-container" hx-swap="innerHTML" {open_hook}>Edit</button><button hx-delete="/todos/delete?id={id}" hx-target="#todo-{id}" hx-swap="outerHTML">Delete</button></li>"##,
        id = id,
        class = class,
        title = escape_html(&todo.title),
        description = escape_html(&todo.description),
        toggle_label = toggle_label,
        open_hook = OPEN_FORM_HOOK,
    )
}

/// Create form, or a prefilled update form when `todo` is given
pub fn render_todo_form(todo: Option<&Todo>) -> String {
    let (heading, mode, title, description, hidden, submit) = match todo {
        Some(todo) => (
            "Edit Todo",
            "update",
            escape_html(&todo.title),
            escape_html(&todo.description),
            format!(
                r#"<input type="hidden" name="id" value="{}">"#,
                escape_html(&todo.id)
            ),
            "Update",
        ),
        None => (
            "Create New Todo",
            "create",
            String::new(),
            String::new(),
            String::new(),
            "Create",
        ),
    };

    format!(
        r##"<div class="todo-form"><h2>{heading}</h2><form id="todo-form" onsubmit="event.preventDefault(); submitTodoForm('{mode}')">{hidden}<div class="form-group"><label for="title">Title:</label><input type="text" id="title" name="title" value="{title}"></div><div class="form-group"><label for="description">Description:</label><textarea id="description" name="description">{description}</textarea></div><button type="submit">{submit}</button></form></div>"##,
        heading = heading,
        mode = mode,
        hidden = hidden,
        title = title,
        description = description,
        submit = submit,
    )
}

#[cfg(test)]
mod templates_test {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(render_todo_list(&[]), r#"<p class="empty">No todos yet</p>"#);
    }

    #[test]
    fn test_list_escapes_user_text() {
        let todo = Todo::new(String::from("<script>"), String::from("a & b"));

        let html = render_todo_list(&[todo]);

        assert_eq!(html.contains("&lt;script&gt;"), true);
        assert_eq!(html.contains("<script>"), false);
        assert_eq!(html.contains("a &amp; b"), true);
    }

    #[test]
    fn test_completed_item_class() {
        let mut todo = Todo::new(String::from("Buy milk"), String::new());
        todo.toggle_status();

        let html = render_todo_item(&todo);

        assert_eq!(html.contains(r#"class="todo-item completed""#), true);
        assert_eq!(html.contains(">Undo<"), true);
    }

    #[test]
    fn test_create_form_has_no_hidden_id() {
        let html = render_todo_form(None);

        assert_eq!(html.contains("submitTodoForm('create')"), true);
        assert_eq!(html.contains(r#"name="id""#), false);
    }

    #[test]
    fn test_update_form_prefilled() {
        let todo = Todo::new(String::from("Buy milk"), String::from("2%"));

        let html = render_todo_form(Some(&todo));

        assert_eq!(html.contains("submitTodoForm('update')"), true);
        assert_eq!(
            html.contains(&format!(r#"name="id" value="{}""#, todo.id)),
            true
        );
        assert_eq!(html.contains(r#"value="Buy milk""#), true);
        assert_eq!(html.contains(">2%</textarea>"), true);
    }

    #[test]
    fn test_index_wraps_list() {
        let html = render_index(&[]);

        assert_eq!(
            html.contains(r#"<div id="todos-container"><p class="empty">No todos yet</p></div>"#),
            true
        );
        assert_eq!(html.contains(r#"id="form-container""#), true);
        assert_eq!(html.contains(r#"id="actions-container""#), true);
        assert_eq!(
            html.contains(r#"<script src="/static/js/script.js"></script>"#),
            true
        );
    }

    #[test]
    fn test_opening_a_form_hides_actions() {
        let todo = Todo::new(String::from("Buy milk"), String::new());

        for html in [render_index(&[]), render_todo_item(&todo)] {
            assert_eq!(html.contains(OPEN_FORM_HOOK), true);
        }
    }
}
