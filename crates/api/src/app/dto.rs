//! Response payloads for use-case results.
//!
//! Request DTOs are the use-case DTOs themselves (they derive `Deserialize`).
//! The password never appears here.

use serde_json::{Value as JsonValue, json};

use hireboard_core::Entity;
use hireboard_offers::Offer;
use hireboard_users::{Role, User};

/// Conversion of a use-case result into the success payload.
pub trait IntoPayload {
    fn into_payload(self) -> Option<JsonValue>;
}

impl IntoPayload for () {
    fn into_payload(self) -> Option<JsonValue> {
        None
    }
}

impl IntoPayload for User {
    fn into_payload(self) -> Option<JsonValue> {
        Some(json!({
            "id": self.id().to_string(),
            "username": self.username().as_str(),
            "email": self.email().as_str(),
            "contextType": self.context_type().as_str(),
            "roleIds": self.role_ids().iter().map(ToString::to_string).collect::<Vec<_>>(),
            "createdAt": self.created_at().to_rfc3339(),
        }))
    }
}

impl IntoPayload for Role {
    fn into_payload(self) -> Option<JsonValue> {
        Some(json!({
            "id": self.id().to_string(),
            "name": self.name().as_str(),
            "permissions": self.permissions().iter().map(|p| p.as_str()).collect::<Vec<_>>(),
            "createdAt": self.created_at().to_rfc3339(),
        }))
    }
}

impl IntoPayload for Offer {
    fn into_payload(self) -> Option<JsonValue> {
        Some(json!({
            "id": self.id().to_string(),
            "title": self.title(),
            "description": self.description(),
            "technology": self.technology().as_str(),
            "employmentType": self.employment_type().as_str(),
            "level": self.level().as_str(),
            "salaryMin": self.salary_min(),
            "salaryMax": self.salary_max(),
            "createdAt": self.created_at().to_rfc3339(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hireboard_core::UserId;
    use hireboard_users::UserProps;

    #[test]
    fn user_payload_omits_the_password() {
        let user = User::create(
            UserId::new(),
            UserProps {
                username: "bob".to_string(),
                email: "Bob@Bob.com".to_string(),
                password: "test123".to_string(),
                context_type: "brand".to_string(),
                role_ids: vec![],
                created_at: Utc::now(),
            },
        )
        .unwrap();

        let payload = user.into_payload().unwrap();
        assert_eq!(payload["email"], "bob@bob.com");
        assert_eq!(payload["contextType"], "brand");
        assert!(payload.get("password").is_none());
        assert!(!payload.to_string().contains("test123"));
    }
}
