use dioxus::prelude::*;

use crate::Route;

/// Navbar above the routed page.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "app",
            ui::Navbar {
                on_home: move |_| {
                    nav.push(Route::Home {});
                },
                on_login: move |_| {
                    nav.push(Route::Login {});
                },
                on_register: move |_| {
                    nav.push(Route::Register {});
                },
                on_new_recipe: move |_| {
                    nav.push(Route::NewRecipe {});
                },
                on_logged_out: move |_| {
                    nav.replace(Route::Home {});
                },
            }
            main {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
