use dioxus::prelude::*;
use store::Id;
use ui::use_session;
use ui::views::{LoginView, RecipeDetailView, RecipeFormView, RecipeListView};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        RecipeListView {
            on_open: move |id: Id| {
                nav.push(Route::RecipeDetail { id });
            },
        }
    }
}

#[component]
pub fn RecipeDetail(id: Id) -> Element {
    rsx! {
        RecipeDetailView { id }
    }
}

/// Composition form, or the login form when nobody is logged in.
#[component]
pub fn NewRecipe() -> Element {
    let session = use_session();
    let nav = use_navigator();

    rsx! {
        if let Some(author) = session().user {
            RecipeFormView {
                author,
                on_published: move |_| {
                    nav.push(Route::Home {});
                },
            }
        } else {
            // Stays on this route; the form appears once the session is set.
            LoginView {
                on_success: move |_| {},
                on_register: move |_| {
                    nav.push(Route::Register {});
                },
            }
        }
    }
}
