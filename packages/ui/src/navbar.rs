use dioxus::prelude::*;

use crate::{use_session, LogoutButton};

/// Top bar. Platform packages supply the navigation callbacks.
#[component]
pub fn Navbar(
    on_home: EventHandler<()>,
    on_login: EventHandler<()>,
    on_register: EventHandler<()>,
    on_new_recipe: EventHandler<()>,
    on_logged_out: EventHandler<()>,
) -> Element {
    let session = use_session();

    rsx! {
        nav {
            class: "navbar",
            button {
                class: "nav-logo",
                onclick: move |_| on_home.call(()),
                "ReceitaHub"
            }
            div {
                class: "nav-links",
                if let Some(user) = session().user {
                    button {
                        class: "nav-link",
                        onclick: move |_| on_new_recipe.call(()),
                        "Nova Receita"
                    }
                    span { class: "nav-user", "Olá, {user.username}!" }
                    LogoutButton {
                        class: "nav-logout-btn",
                        on_logged_out: on_logged_out,
                    }
                } else {
                    button {
                        class: "nav-link",
                        onclick: move |_| on_login.call(()),
                        "Login"
                    }
                    button {
                        class: "nav-link",
                        onclick: move |_| on_register.call(()),
                        "Cadastrar"
                    }
                }
            }
        }
    }
}
