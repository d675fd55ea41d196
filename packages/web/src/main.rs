use dioxus::prelude::*;

use store::Id;
use ui::SessionProvider;
use views::{Home, Login, NewRecipe, RecipeDetail, Register, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/receita/:id")]
        RecipeDetail { id: Id },
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/nova-receita")]
        NewRecipe {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
