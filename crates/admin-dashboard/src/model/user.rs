use serde::{Deserialize, Serialize};

/// A registered user as listed by `GET /users`.
///
/// `created_at` is kept as the server's string; the dashboard only displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the backend
    /// * `username` - Display name
    /// * `email` - Contact address
    /// * `created_at` - Creation timestamp as sent by the backend
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            created_at: created_at.into(),
        }
    }
}
