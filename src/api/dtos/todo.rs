use serde::Deserialize;

/// Body of create and update posts
#[derive(Debug, Deserialize)]
pub struct TodoFormDTO {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub id: String,
}

/// `?id=` query of form, toggle and delete
#[derive(Debug, Deserialize)]
pub struct TodoIdQuery {
    #[serde(default)]
    pub id: String,
}
