#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl Todo {
    pub fn new(title: String, description: String) -> Self {
        let now = chrono::Local::now().naive_local();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            description,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn toggle_status(&mut self) {
        self.completed = !self.completed;
        self.updated_at = chrono::Local::now().naive_local();
    }

    pub fn update(&mut self, title: String, description: String) {
        self.title = title;
        self.description = description;
        self.updated_at = chrono::Local::now().naive_local();
    }
}

#[cfg(test)]
mod todo_model_test {
    use super::Todo;

    #[test]
    fn test_new_todo_is_incomplete() {
        let todo = Todo::new(String::from("Buy milk"), String::new());

        assert_eq!(todo.completed, false);
        assert_eq!(todo.created_at, todo.updated_at);
        assert_eq!(uuid::Uuid::parse_str(&todo.id).is_ok(), true);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Todo::new(String::from("a"), String::new());
        let b = Todo::new(String::from("a"), String::new());

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_toggle_and_update() {
        let mut todo = Todo::new(String::from("Buy milk"), String::new());

        todo.toggle_status();
        assert_eq!(todo.completed, true);
        todo.toggle_status();
        assert_eq!(todo.completed, false);

        todo.update(String::from("Buy oat milk"), String::from("2%"));
        assert_eq!(todo.title, "Buy oat milk");
        assert_eq!(todo.description, "2%");
        assert_eq!(todo.updated_at >= todo.created_at, true);
    }
}
