pub mod todo_model;
