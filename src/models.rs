//! Frontend Models
//!
//! Data structures matching backend records.

use serde::{Deserialize, Serialize};

/// Signed-in user record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
}

/// Editable copy of the account fields, sent to the update endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub user_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub avatar: String,
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            avatar: user.avatar.clone(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::UserName => self.user_name = value,
            DraftField::Email => self.email = value,
            DraftField::Password => self.password = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::UserName => &self.user_name,
            DraftField::Email => &self.email,
            DraftField::Password => &self.password,
        }
    }
}

/// Text inputs of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    UserName,
    Email,
    Password,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::UserName, DraftField::Email, DraftField::Password];

    /// (input type, placeholder)
    pub fn input_attrs(self) -> (&'static str, &'static str) {
        match self {
            DraftField::UserName => ("text", "userName"),
            DraftField::Email => ("email", "email"),
            DraftField::Password => ("password", "password"),
        }
    }
}

/// Listing as shown on the profile page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl ListingSummary {
    pub fn cover(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        serde_json::from_value(json!({
            "_id": "u1",
            "userName": "alice",
            "email": "alice@example.com",
            "avatar": "https://img/a.png",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn user_reads_backend_field_names() {
        let u = user();
        assert_eq!(u.id, "u1");
        assert_eq!(u.user_name, "alice");
        assert_eq!(u.password, "");
    }

    #[test]
    fn draft_omits_empty_password() {
        let draft = ProfileDraft::from_user(&user());
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body, json!({
            "userName": "alice",
            "email": "alice@example.com",
            "avatar": "https://img/a.png"
        }));
    }

    #[test]
    fn draft_sends_new_password() {
        let mut draft = ProfileDraft::from_user(&user());
        draft.set(DraftField::Password, "hunter2".to_string());
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["password"], "hunter2");
        assert_eq!(draft.get(DraftField::Password), "hunter2");
    }

    #[test]
    fn listing_cover_is_first_image() {
        let listing: ListingSummary = serde_json::from_value(json!({
            "_id": "L1",
            "name": "Beach house",
            "imageUrls": ["a.jpg", "b.jpg"]
        }))
        .unwrap();
        assert_eq!(listing.cover(), Some("a.jpg"));

        let bare = ListingSummary { id: "L2".into(), name: "Loft".into(), image_urls: vec![] };
        assert_eq!(bare.cover(), None);
    }
}
