use dioxus::prelude::*;
use ui::{use_session, views::LoginView};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already logged in
    if session().user.is_some() {
        nav.replace(Route::Home {});
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.push(Route::Home {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
