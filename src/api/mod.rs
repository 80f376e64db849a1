pub mod api;
mod dtos;
pub(crate) mod errors;
pub mod storage;
mod templates;
mod todos_handler;
