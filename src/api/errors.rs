use actix_web::{
    body::BoxBody,
    http::{
        self,
        header::{self, HeaderValue},
    },
    HttpResponse, ResponseError,
};
use derive_more::Display;

#[derive(Debug, Display, PartialEq)]
pub enum StorageError {
    #[display(fmt = "todo not found")]
    NotFound,

    #[display(fmt = "storage lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Display)]
pub enum TodoApiError {
    #[display(fmt = "Internal Server Error")]
    InternalServerError,

    #[display(fmt = "{}", _0)]
    BadRequest(String),

    #[display(fmt = "{} not found", _0)]
    NotFound(String),
}

impl ResponseError for TodoApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            TodoApiError::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
            TodoApiError::BadRequest(_) => http::StatusCode::BAD_REQUEST,
            TodoApiError::NotFound(_) => http::StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let mut res = HttpResponse::new(self.status_code());

        res.headers_mut().append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );

        res.set_body(BoxBody::new(format!("{}\n", self)))
    }
}

impl From<StorageError> for TodoApiError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound => TodoApiError::NotFound(String::from("Todo")),
            StorageError::LockPoisoned => TodoApiError::InternalServerError,
        }
    }
}
