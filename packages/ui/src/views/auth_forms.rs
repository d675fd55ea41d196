//! Login and registration forms.

use dioxus::prelude::*;
use store::{Registration, User};

use crate::{error_message, make_store, use_session, SessionState};

/// E-mail/password login form. On success the session signal is updated and
/// `on_success` receives the user.
#[component]
pub fn LoginView(on_success: EventHandler<User>, on_register: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        match store::login(&make_store(), &email(), &password()) {
            Ok(user) => {
                session.set(SessionState {
                    user: Some(user.clone()),
                });
                on_success.call(user);
            }
            Err(e) => error.set(Some(error_message(&e))),
        }
    };

    rsx! {
        div {
            class: "form-container",
            form {
                class: "auth-form",
                onsubmit: handle_login,
                h2 { "Login" }
                if let Some(err) = error() {
                    p { class: "error-message", "{err}" }
                }
                input {
                    r#type: "email",
                    placeholder: "E-mail",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Senha",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button { r#type: "submit", "Entrar" }
                p {
                    class: "form-footer",
                    "Não tem conta? "
                    button {
                        r#type: "button",
                        class: "link-btn",
                        onclick: move |_| on_register.call(()),
                        "Cadastre-se"
                    }
                }
            }
        }
    }
}

/// Account creation form. `on_success` fires after the user is stored; the
/// caller routes to the login form.
#[component]
pub fn RegisterView(on_success: EventHandler<User>, on_login: EventHandler<()>) -> Element {
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let input = Registration {
            username: username(),
            email: email(),
            password: password(),
        };
        match store::register(&make_store(), input) {
            Ok(user) => on_success.call(user),
            Err(e) => error.set(Some(error_message(&e))),
        }
    };

    rsx! {
        div {
            class: "form-container",
            form {
                class: "auth-form",
                onsubmit: handle_register,
                h2 { "Crie sua Conta" }
                if let Some(err) = error() {
                    p { class: "error-message", "{err}" }
                }
                input {
                    r#type: "text",
                    placeholder: "Nome de usuário",
                    required: true,
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "E-mail",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Senha",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button { r#type: "submit", "Cadastrar" }
                p {
                    class: "form-footer",
                    "Já tem conta? "
                    button {
                        r#type: "button",
                        class: "link-btn",
                        onclick: move |_| on_login.call(()),
                        "Entrar"
                    }
                }
            }
        }
    }
}
