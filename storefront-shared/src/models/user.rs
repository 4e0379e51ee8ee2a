use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Represents a signed-in storefront member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the member.
    pub id: uuid::Uuid,

    /// The member's username.
    pub username: String,

    /// The member's email address.
    pub email: String,

    /// Optional display name shown in place of the username.
    pub display_name: Option<String>,

    /// When the account was created.
    pub created_at: Timestamp,
}

impl User {
    /// Name the UI greets the member with.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json;
    use uuid::Uuid;

    fn member() -> User {
        User {
            id: Uuid::new_v4(),
            username: "mei".to_string(),
            email: "mei@example.com".to_string(),
            display_name: None,
            created_at: Timestamp(Utc::now()),
        }
    }

    #[test]
    fn test_user_creation() {
        let user = member();

        assert!(!user.id.is_nil(), "User ID should not be nil");
        assert_eq!(user.username, "mei");
        assert_eq!(user.email, "mei@example.com");
        assert_eq!(user.display_name, None);
    }

    #[test]
    fn test_user_equality() {
        let user1 = member();
        let user2 = user1.clone();
        let user3 = User {
            id: Uuid::new_v4(),
            ..user1.clone()
        };

        assert_eq!(user1, user2, "Users with the same data should be equal");
        assert_ne!(user1, user3, "Users with different ids should not be equal");
    }

    #[test]
    fn test_user_serialization() {
        let id = Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap();
        let user = User {
            id,
            ..member()
        };

        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, user);
        assert_eq!(deserialized.id, id);
        assert_eq!(deserialized.username, "mei");
    }

    #[test]
    fn greeting_name_prefers_display_name() {
        let mut user = member();
        assert_eq!(user.greeting_name(), "mei");

        user.display_name = Some("Mei-Ling".to_string());
        assert_eq!(user.greeting_name(), "Mei-Ling");
    }
}
