//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod repo;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub use repo::data_dir;
pub use repo::{load_config, make_store};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod navbar;
pub use navbar::Navbar;

mod session;
pub use session::{use_session, LogoutButton, SessionProvider, SessionState};

mod messages;
pub use messages::error_message;
