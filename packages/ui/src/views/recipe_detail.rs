use dioxus::prelude::*;
use store::Id;

use crate::make_store;

/// Full recipe page.
#[component]
pub fn RecipeDetailView(id: Id) -> Element {
    let recipe = match store::get_recipe(&make_store(), id) {
        Ok(recipe) => recipe,
        Err(e) => {
            tracing::error!("Failed to load recipe {}: {}", id, e);
            None
        }
    };

    let Some(recipe) = recipe else {
        return rsx! {
            div {
                class: "container",
                h2 { "Receita não encontrada!" }
            }
        };
    };

    rsx! {
        div {
            class: "container recipe-detail",
            if let Some(src) = &recipe.image {
                img { class: "recipe-detail-image", src: "{src}", alt: "{recipe.title}" }
            }
            h1 { "{recipe.title}" }
            p {
                class: "author-info",
                "Enviada por: "
                strong { "{recipe.author_name}" }
                " em {recipe.created_at}"
            }
            div {
                class: "recipe-content",
                div {
                    class: "ingredients-list",
                    h3 { "Ingredientes" }
                    ul {
                        for (index, ingredient) in recipe.ingredients.iter().enumerate() {
                            li { key: "{index}", "{ingredient}" }
                        }
                    }
                }
                div {
                    class: "instructions",
                    h3 { "Modo de Preparo" }
                    p { style: "white-space: pre-wrap;", "{recipe.instructions}" }
                }
            }
        }
    }
}
