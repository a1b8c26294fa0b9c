use uuid::Uuid;

/// Per-visit identity handed to the API client
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub auth_token: Option<String>,
}

impl Session {
    pub fn new(auth_token: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            auth_token,
        }
    }
}
