use dioxus::prelude::*;
use store::{Id, Recipe};

use crate::make_store;

/// Landing page: every recipe, newest first.
#[component]
pub fn RecipeListView(on_open: EventHandler<Id>) -> Element {
    // Read once per mount; navigating back remounts and re-reads.
    let recipes = use_signal(|| match store::list_recipes(&make_store()) {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::error!("Failed to load recipes: {}", e);
            Vec::new()
        }
    });

    rsx! {
        div {
            class: "home-container",
            h1 { "Receitas da Comunidade" }
            if recipes.read().is_empty() {
                p { class: "empty-state", "Ainda não há receitas cadastradas. Seja o primeiro!" }
            } else {
                div {
                    class: "recipe-grid",
                    for recipe in recipes() {
                        RecipeCard {
                            key: "{recipe.id}",
                            recipe: recipe.clone(),
                            on_open: on_open,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecipeCard(recipe: Recipe, on_open: EventHandler<Id>) -> Element {
    let id = recipe.id;

    rsx! {
        div {
            class: "recipe-card",
            onclick: move |_| on_open.call(id),
            if let Some(src) = &recipe.image {
                img { class: "recipe-card-image", src: "{src}", alt: "{recipe.title}" }
            } else {
                div {
                    class: "recipe-card-image-placeholder",
                    span { "Sem Imagem" }
                }
            }
            div {
                class: "recipe-card-content",
                h3 { "{recipe.title}" }
                p { "por {recipe.author_name}" }
                span { "{recipe.created_at}" }
            }
        }
    }
}
