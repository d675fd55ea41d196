//! # Recipe use cases — publish, list, get
//!
//! Publishing validates the submitted [`RecipeDraft`], drops blank ingredient
//! entries, stamps the author and date, and appends the [`Recipe`]. Reads never
//! write.

use chrono::Local;
use tracing::info;

use crate::db::{KeyValueStore, Store};
use crate::error::{AppError, Field, Result};
use crate::models::{Id, Recipe, RecipeDraft, User};

/// Format of [`Recipe::created_at`].
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Publish a recipe on behalf of `author`, the current session user.
///
/// Fails with [`AppError::ValidationFailed`] when the title or instructions
/// are blank, when an ingredient field was left completely empty, or when no
/// ingredient remains after whitespace-only entries are dropped. Nothing is
/// written on failure.
pub fn publish_recipe<K: KeyValueStore>(
    store: &Store<K>,
    author: &User,
    draft: RecipeDraft,
) -> Result<Recipe> {
    let RecipeDraft {
        title,
        ingredients,
        instructions,
        image,
    } = draft;

    if title.trim().is_empty() {
        return Err(AppError::ValidationFailed(Field::Title));
    }
    if instructions.trim().is_empty() {
        return Err(AppError::ValidationFailed(Field::Instructions));
    }
    if ingredients.iter().any(|i| i.is_empty()) {
        return Err(AppError::ValidationFailed(Field::Ingredients));
    }
    let ingredients: Vec<String> = ingredients
        .into_iter()
        .filter(|i| !i.trim().is_empty())
        .collect();
    if ingredients.is_empty() {
        return Err(AppError::ValidationFailed(Field::Ingredients));
    }

    store.update(|db| {
        let recipe = Recipe {
            id: Store::<K>::next_id(db),
            title,
            ingredients,
            instructions,
            author_id: author.id,
            author_name: author.username.clone(),
            created_at: Local::now().format(DATE_FORMAT).to_string(),
            image,
        };
        db.recipes.push(recipe.clone());
        info!(
            recipe_id = recipe.id,
            author_id = recipe.author_id,
            has_image = recipe.image.is_some(),
            "published recipe"
        );
        Ok(recipe)
    })
}

/// All recipes, newest first.
pub fn list_recipes<K: KeyValueStore>(store: &Store<K>) -> Result<Vec<Recipe>> {
    let mut recipes = store.load()?.recipes;
    recipes.sort_by(|a, b| b.id.cmp(&a.id));
    Ok(recipes)
}

/// The recipe with exactly this id, or `None`.
pub fn get_recipe<K: KeyValueStore>(store: &Store<K>, id: Id) -> Result<Option<Recipe>> {
    Ok(store.load()?.recipe_by_id(id).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Database;
    use proptest::prelude::*;

    fn author() -> User {
        User {
            id: 7,
            username: "ana".to_string(),
            email: "a@x.com".to_string(),
            password: "p1".to_string(),
        }
    }

    fn draft(title: &str, ingredients: &[&str], instructions: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: instructions.to_string(),
            image: None,
        }
    }

    fn recipe(id: Id) -> Recipe {
        Recipe {
            id,
            title: format!("r{id}"),
            ingredients: vec!["x".to_string()],
            instructions: "y".to_string(),
            author_id: 7,
            author_name: "ana".to_string(),
            created_at: "01/01/2024".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_publish_stamps_author_and_date() {
        let store = Store::new(MemoryStore::new());
        let mut d = draft("Bolo", &["ovo", "farinha"], "misture\nasse");
        d.image = Some("data:image/png;base64,AAAA".to_string());

        let published = publish_recipe(&store, &author(), d).unwrap();
        assert_eq!(published.author_id, 7);
        assert_eq!(published.author_name, "ana");
        assert_eq!(published.instructions, "misture\nasse");
        assert_eq!(published.image.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(
            published.created_at,
            Local::now().format(DATE_FORMAT).to_string()
        );
        assert_eq!(store.load().unwrap().recipes, vec![published]);
    }

    #[test]
    fn test_whitespace_ingredients_dropped_in_order() {
        let store = Store::new(MemoryStore::new());
        let published =
            publish_recipe(&store, &author(), draft("Bolo", &["ovo", "  ", "farinha", "\t"], "misture"))
                .unwrap();
        assert_eq!(published.ingredients, vec!["ovo", "farinha"]);
    }

    #[test]
    fn test_validation_failures_do_not_persist() {
        let store = Store::new(MemoryStore::new());
        let cases = [
            (draft("", &["ovo"], "misture"), Field::Title),
            (draft("   ", &["ovo"], "misture"), Field::Title),
            (draft("Bolo", &["ovo"], ""), Field::Instructions),
            (draft("Bolo", &["ovo"], " \n\t "), Field::Instructions),
            (draft("Bolo", &["ovo", ""], "misture"), Field::Ingredients),
            (draft("Bolo", &[" ", "  "], "misture"), Field::Ingredients),
            (draft("Bolo", &[], "misture"), Field::Ingredients),
        ];
        for (d, field) in cases {
            let err = publish_recipe(&store, &author(), d).unwrap_err();
            assert!(
                matches!(err, AppError::ValidationFailed(f) if f == field),
                "expected {field}, got {err}"
            );
        }
        assert!(store.load().unwrap().recipes.is_empty());
    }

    #[test]
    fn test_list_newest_first() {
        let store = Store::new(MemoryStore::new());
        let first = publish_recipe(&store, &author(), draft("A", &["x"], "y")).unwrap();
        let second = publish_recipe(&store, &author(), draft("B", &["x"], "y")).unwrap();

        let listed = list_recipes(&store).unwrap();
        assert_eq!(listed, vec![second, first]);
    }

    #[test]
    fn test_get_recipe() {
        let store = Store::new(MemoryStore::new());
        let published = publish_recipe(&store, &author(), draft("A", &["x"], "y")).unwrap();

        assert_eq!(get_recipe(&store, published.id).unwrap(), Some(published.clone()));
        assert_eq!(get_recipe(&store, published.id + 1).unwrap(), None);
    }

    #[test]
    fn test_get_recipe_on_empty_store() {
        let store = Store::new(MemoryStore::new());
        assert!(get_recipe(&store, 42).unwrap().is_none());
        assert!(list_recipes(&store).unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn list_is_strictly_descending(ids in proptest::collection::hash_set(0i64..1_000_000, 0..40)) {
            let store = Store::new(MemoryStore::new());
            let db = Database {
                recipes: ids.iter().copied().map(recipe).collect(),
                ..Database::default()
            };
            store.save(&db).unwrap();

            let listed = list_recipes(&store).unwrap();
            prop_assert_eq!(listed.len(), ids.len());
            for pair in listed.windows(2) {
                prop_assert!(pair[0].id > pair[1].id);
            }
        }
    }
}
