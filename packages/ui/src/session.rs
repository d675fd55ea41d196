//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::User;

use crate::make_store;

/// Session state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that restores the persisted session on startup.
/// Wrap your app with this component to enable the session hooks.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| {
        // Loading also drops a session whose user has disappeared.
        match store::current_user(&make_store()) {
            Ok(user) => SessionState { user },
            Err(e) => {
                tracing::error!("Failed to restore session: {}", e);
                SessionState::default()
            }
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// On the web the page is reloaded at `/` so no protected view keeps stale
/// state; elsewhere `on_logged_out` is expected to navigate home.
#[component]
pub fn LogoutButton(
    #[props(default = "Sair".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logged_out: EventHandler<()>,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| match store::logout(&make_store()) {
        Ok(()) => {
            session.set(SessionState::default());
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            }
            on_logged_out.call(());
        }
        Err(e) => tracing::error!("Failed to log out: {}", e),
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
