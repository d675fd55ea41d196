use dioxus::prelude::*;

use store::Id;
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

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Using data directory {}", ui::data_dir().display());
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}
