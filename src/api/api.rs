use std::{net::TcpListener, sync::Arc};

use actix_web::{self, dev::Server, web, App, HttpServer};

use crate::config::{API_URL, DEFAULT_LOG_FILTER};

use super::{
    storage::{MemoryStorage, TodoStorage},
    templates::SCRIPT_PATH,
    todos_handler,
};

/// Route table shared by the server and handler tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(todos_handler::list_todos))
        .route(SCRIPT_PATH, web::get().to(todos_handler::form_script))
        .service(
            web::scope("/todos")
                .route("", web::get().to(todos_handler::list_todos))
                .route("", web::post().to(todos_handler::create_todo))
                .route("/", web::get().to(todos_handler::list_todos))
                .route("/", web::post().to(todos_handler::create_todo))
                .route("/form", web::get().to(todos_handler::get_todo_form))
                .route("/update", web::post().to(todos_handler::update_todo))
                .route("/toggle", web::post().to(todos_handler::toggle_todo_status))
                .route("/delete", web::delete().to(todos_handler::delete_todo)),
        );
}

/// Serve the todo backend on an already bound listener
pub fn run(listener: TcpListener, store: Arc<dyn TodoStorage>) -> std::io::Result<Server> {
    let store = web::Data::from(store);

    let server = HttpServer::new(move || App::new().app_data(store.clone()).configure(configure))
        .workers(1) // Num of threads
        .listen(listener)?
        .run();

    Ok(server)
}

#[actix_web::main]
pub async fn start_server() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .try_init()
        .ok();

    let listener = TcpListener::bind(API_URL.as_str())?;
    log::info!("Serving todos on {}", listener.local_addr()?);

    let store: Arc<dyn TodoStorage> = Arc::new(MemoryStorage::new());

    run(listener, store)?.await
}

#[cfg(test)]
mod api_test {
    use std::{net::TcpListener, sync::Arc, thread};

    use super::run;
    use crate::{
        api::storage::{MemoryStorage, TodoStorage},
        form::{view::Display, FormAction, FormFields, FormSubmitter, HttpTransport, Submission, TodoPage},
    };

    /// Start the backend on a random port and return its base url
    fn spawn_server(store: Arc<dyn TodoStorage>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        thread::spawn(move || {
            actix_web::rt::System::new().block_on(async move {
                run(listener, store).unwrap().await.unwrap();
            })
        });

        format!("http://{}", address)
    }

    #[test]
    fn test_submit_create_then_update_against_server() {
        let store = Arc::new(MemoryStorage::new());
        let base_url = spawn_server(store.clone());
        let submitter = FormSubmitter::new(HttpTransport::new(&base_url));

        let mut page = TodoPage::with_form(FormFields::new("Buy milk", ""));
        let res = submitter.submit(&mut page, FormAction::Create).unwrap();

        assert_eq!(res, Submission::Sent);
        assert_eq!(page.form, None);
        assert_eq!(page.actions, Display::Block);
        assert_eq!(page.todos_html.contains("Buy milk"), true);

        let id = store.get_all().unwrap()[0].id.clone();

        let mut page = TodoPage::with_form(FormFields::new("Buy milk", "2%").with_id(&id));
        let res = submitter.submit(&mut page, FormAction::Update).unwrap();

        assert_eq!(res, Submission::Sent);
        assert_eq!(page.todos_html.contains("2%"), true);
        assert_eq!(store.get(&id).unwrap().description, "2%");
        assert_eq!(store.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_server_rejection_keeps_form() {
        let store = Arc::new(MemoryStorage::new());
        let base_url = spawn_server(store);
        let submitter = FormSubmitter::new(HttpTransport::new(&base_url));

        let mut page = TodoPage::with_form(FormFields::new("Buy milk", "").with_id("unknown"));
        let before = page.clone();

        let res = submitter.submit(&mut page, FormAction::Update);

        assert_eq!(res.is_err(), true);
        assert_eq!(page, before);
    }
}
