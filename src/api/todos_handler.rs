use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};

use super::dtos::todo::{TodoFormDTO, TodoIdQuery};
use super::errors::TodoApiError;
use super::storage::TodoStorage;
use super::templates::{render_index, render_todo_form, render_todo_item, render_todo_list};
use crate::config::HX_REQUEST_HEADER;
use crate::models::todo_model::Todo;

fn is_hx_request(req: &HttpRequest) -> bool {
    req.headers()
        .get(HX_REQUEST_HEADER)
        .map(|v| v.as_bytes() == b"true")
        .unwrap_or(false)
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// Client script behind the create and update forms
const FORM_SCRIPT: &str = include_str!("../../static/js/script.js");

/// All todos, incomplete ones first, oldest first within each group
fn sorted_todos(store: &dyn TodoStorage) -> Result<Vec<Todo>, TodoApiError> {
    let mut list = store.get_all().map_err(|e| {
        log::error!("Error getting todos: {}", e);
        TodoApiError::from(e)
    })?;

    list.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then(a.created_at.cmp(&b.created_at))
            .then(a.id.cmp(&b.id))
    });

    Ok(list)
}

/// List todos as a fragment for htmx requests, as the full page otherwise
pub async fn list_todos(
    req: HttpRequest,
    store: web::Data<dyn TodoStorage>,
) -> Result<HttpResponse, TodoApiError> {
    let list = sorted_todos(store.get_ref())?;

    if is_hx_request(&req) {
        Ok(html(render_todo_list(&list)))
    } else {
        Ok(html(render_index(&list)))
    }
}

pub async fn form_script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/javascript; charset=utf-8")
        .body(FORM_SCRIPT)
}

/// Create form, or the edit form of the todo named by `?id=`
pub async fn get_todo_form(
    query: web::Query<TodoIdQuery>,
    store: web::Data<dyn TodoStorage>,
) -> Result<HttpResponse, TodoApiError> {
    if query.id.is_empty() {
        return Ok(html(render_todo_form(None)));
    }

    let todo = store.get(&query.id)?;

    Ok(html(render_todo_form(Some(&todo))))
}

pub async fn create_todo(
    form: web::Form<TodoFormDTO>,
    store: web::Data<dyn TodoStorage>,
) -> Result<HttpResponse, TodoApiError> {
    let form = form.into_inner();

    if form.title.is_empty() {
        log::warn!("Rejected create: title is required");
        return Err(TodoApiError::BadRequest(String::from("Title is required")));
    }

    let todo = Todo::new(form.title, form.description);
    log::debug!("Creating todo {}", todo.id);

    store.create(todo).map_err(|e| {
        log::error!("Error creating todo: {}", e);
        TodoApiError::from(e)
    })?;

    let list = sorted_todos(store.get_ref())?;

    Ok(html(render_todo_list(&list)))
}

pub async fn update_todo(
    form: web::Form<TodoFormDTO>,
    store: web::Data<dyn TodoStorage>,
) -> Result<HttpResponse, TodoApiError> {
    let form = form.into_inner();

    if form.id.is_empty() {
        log::warn!("Rejected update: id is required");
        return Err(TodoApiError::BadRequest(String::from("ID is required")));
    }

    let mut todo = store.get(&form.id).map_err(|e| {
        log::warn!("Error getting todo with id {}: {}", form.id, e);
        TodoApiError::from(e)
    })?;

    if form.title.is_empty() {
        log::warn!("Rejected update of {}: title is required", form.id);
        return Err(TodoApiError::BadRequest(String::from("Title is required")));
    }

    todo.update(form.title, form.description);

    store.update(todo).map_err(|e| {
        log::error!("Error updating todo {}: {}", form.id, e);
        TodoApiError::from(e)
    })?;

    let list = sorted_todos(store.get_ref())?;

    Ok(html(render_todo_list(&list)))
}

/// Flip completion and answer with the re-rendered item
pub async fn toggle_todo_status(
    query: web::Query<TodoIdQuery>,
    store: web::Data<dyn TodoStorage>,
) -> Result<HttpResponse, TodoApiError> {
    if query.id.is_empty() {
        return Err(TodoApiError::BadRequest(String::from("ID is required")));
    }

    let mut todo = store.get(&query.id)?;
    todo.toggle_status();

    store.update(todo.clone())?;

    Ok(html(render_todo_item(&todo)))
}

pub async fn delete_todo(
    query: web::Query<TodoIdQuery>,
    store: web::Data<dyn TodoStorage>,
) -> Result<HttpResponse, TodoApiError> {
    if query.id.is_empty() {
        return Err(TodoApiError::BadRequest(String::from("ID is required")));
    }

    store.delete(&query.id)?;

    Ok(HttpResponse::Ok().finish())
}
