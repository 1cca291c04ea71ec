//! DTOs for users_sea adapter.

/// DTO for creating a user profile.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub sub: String,
    pub display_name: String,
    pub email: Option<String>,
}

impl UserCreate {
    pub fn new(sub: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            display_name: display_name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
