use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub deleted_role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_response() {
        let json = r#"{"access_token":"abc.def","token_type":"bearer","user":{"id":1,"email":"a@b.c","username":"ada","full_name":"Ada Lovelace","created_at":"2024-01-01T00:00:00"}}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "abc.def");
        assert_eq!(resp.user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = User {
            id: 1,
            email: "a@b.c".to_string(),
            username: "ada".to_string(),
            full_name: Some("  ".to_string()),
            created_at: None,
        };
        assert_eq!(user.display_name(), "ada");
    }
}
