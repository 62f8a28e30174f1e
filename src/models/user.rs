use serde::{Deserialize, Serialize};

/// Registration payload, echoed back by the service on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(rename = "fullName", alias = "fullname")]
    pub full_name: String,
    pub password: String,
    pub mail: String,
}

impl UserRecord {
    pub fn new(
        username: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
        mail: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            full_name: full_name.into(),
            password: password.into(),
            mail: mail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let user = UserRecord::new("alice", "Alice Example", "hunter2", "alice@example.com");
        let json = serde_json::to_value(&user).expect("serialize user");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["fullName"], "Alice Example");
        assert_eq!(json["mail"], "alice@example.com");
    }

    #[test]
    fn test_accepts_lowercase_fullname_alias() {
        let json = r#"{"username":"bob","fullname":"Bob B","password":"pw","mail":"b@x.com"}"#;
        let user: UserRecord = serde_json::from_str(json).expect("parse user echo");
        assert_eq!(user.full_name, "Bob B");
    }
}
