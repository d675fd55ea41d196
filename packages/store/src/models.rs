//! # Domain records persisted in the ReceitaHub database
//!
//! Everything the client knows lives in one [`Database`] document. The structs
//! here are the explicit shape of that document; serde rejects anything that
//! does not match, which is how [`crate::Store::load`] detects a malformed slot.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Database`] | Root object: every user, every recipe, and the current session. |
//! | [`User`] | A registered account. The password is stored verbatim. |
//! | [`Recipe`] | A published recipe, with author id/name copied at creation time. |
//! | [`Registration`] | Input to [`crate::accounts::register`]. |
//! | [`RecipeDraft`] | Input to [`crate::recipes::publish_recipe`], as submitted by the form. |
//!
//! Field names are serialized in camelCase (`loggedInUser`, `authorId`, ...) so
//! documents written by earlier releases of the web client load unchanged.

use serde::{Deserialize, Serialize};

/// Ids are millisecond timestamps taken at creation.
pub type Id = i64;

/// The single persisted root object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    /// Registration order.
    pub users: Vec<User>,
    /// Publication order.
    pub recipes: Vec<Recipe>,
    /// Copy of the logged-in user, if any.
    #[serde(default)]
    pub logged_in_user: Option<User>,
}

impl Database {
    pub fn user_by_id(&self, id: Id) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn recipe_by_id(&self, id: Id) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Largest id handed out so far across users and recipes.
    pub fn max_id(&self) -> Option<Id> {
        self.users
            .iter()
            .map(|u| u.id)
            .chain(self.recipes.iter().map(|r| r.id))
            .max()
    }
}

/// A registered account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A published recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Id,
    pub title: String,
    /// Entry order, significant for display.
    pub ingredients: Vec<String>,
    /// May contain line breaks; rendered with whitespace preserved.
    pub instructions: String,
    pub author_id: Id,
    pub author_name: String,
    /// Local calendar date at creation, `dd/mm/yyyy`.
    pub created_at: String,
    /// `data:<mime>;base64,...` payload.
    #[serde(default)]
    pub image: Option<String>,
}

/// Registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Recipe composition form input, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    /// Raw ingredient fields, blanks included.
    pub ingredients: Vec<String>,
    pub instructions: String,
    /// Already-encoded data URI, see [`crate::image::to_data_uri`].
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_camel_case_document() {
        let raw = r#"{
            "users": [{"id": 1, "username": "ana", "email": "a@x.com", "password": "p1"}],
            "recipes": [{
                "id": 2, "title": "Bolo", "ingredients": ["ovo"], "instructions": "misture",
                "authorId": 1, "authorName": "ana", "createdAt": "01/02/2024", "image": null
            }],
            "loggedInUser": null
        }"#;
        let db: Database = serde_json::from_str(raw).unwrap();
        assert_eq!(db.users[0].username, "ana");
        assert_eq!(db.recipes[0].author_id, 1);
        assert!(db.recipes[0].image.is_none());
        assert!(db.logged_in_user.is_none());
    }

    #[test]
    fn test_rejects_wrong_shape() {
        let raw = r#"{"users": [{"id": "not-a-number"}], "recipes": []}"#;
        assert!(serde_json::from_str::<Database>(raw).is_err());
    }

    #[test]
    fn test_max_id_spans_users_and_recipes() {
        let mut db = Database::default();
        assert_eq!(db.max_id(), None);
        db.users.push(User {
            id: 10,
            username: "a".into(),
            email: "a@x".into(),
            password: "p".into(),
        });
        db.recipes.push(Recipe {
            id: 30,
            title: "t".into(),
            ingredients: vec!["i".into()],
            instructions: "s".into(),
            author_id: 10,
            author_name: "a".into(),
            created_at: "01/01/2024".into(),
            image: None,
        });
        assert_eq!(db.max_id(), Some(30));
    }
}
