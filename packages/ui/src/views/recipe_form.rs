use dioxus::prelude::*;
use store::{Recipe, RecipeDraft, User};

use crate::{error_message, load_config, make_store};

/// Recipe composition form. Only mounted when a session exists; `author` is
/// the session user.
#[component]
pub fn RecipeFormView(author: User, on_published: EventHandler<Recipe>) -> Element {
    let mut title = use_signal(String::new);
    let mut ingredients = use_signal(|| vec![String::new()]);
    let mut instructions = use_signal(String::new);
    let mut image = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let max_bytes = use_hook(|| load_config().images.max_bytes);

    let handle_image = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            image.set(None);
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => match store::image::to_data_uri(&name, &bytes, max_bytes) {
                Ok(uri) => {
                    error.set(None);
                    image.set(Some(uri));
                }
                Err(e) => {
                    image.set(None);
                    error.set(Some(error_message(&e)));
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", name, e);
                image.set(None);
                error.set(Some("Não foi possível ler a imagem.".to_string()));
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = RecipeDraft {
            title: title(),
            ingredients: ingredients(),
            instructions: instructions(),
            image: image(),
        };
        match store::publish_recipe(&make_store(), &author, draft) {
            Ok(recipe) => on_published.call(recipe),
            Err(e) => error.set(Some(error_message(&e))),
        }
    };

    rsx! {
        div {
            class: "form-container",
            form {
                class: "recipe-form",
                onsubmit: handle_submit,
                h2 { "Cadastre sua Receita" }
                if let Some(err) = error() {
                    p { class: "error-message", "{err}" }
                }
                input {
                    r#type: "text",
                    placeholder: "Título da Receita",
                    required: true,
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }

                div {
                    class: "image-upload-section",
                    label {
                        class: "image-upload-label",
                        r#for: "image-upload",
                        "Selecionar Imagem da Receita"
                    }
                    input {
                        id: "image-upload",
                        r#type: "file",
                        accept: store::image::ACCEPT,
                        style: "display: none;",
                        onchange: handle_image,
                    }
                    if let Some(src) = image() {
                        div {
                            class: "image-preview",
                            img { src: "{src}", alt: "Prévia da receita" }
                        }
                    }
                }

                div {
                    class: "ingredients-section",
                    h3 { "Ingredientes" }
                    for (index, value) in ingredients().into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "ingredient-input",
                            input {
                                r#type: "text",
                                placeholder: format!("Ingrediente {}", index + 1),
                                value: value,
                                oninput: move |evt: FormEvent| {
                                    if let Some(slot) = ingredients.write().get_mut(index) {
                                        *slot = evt.value();
                                    }
                                },
                            }
                            button {
                                r#type: "button",
                                class: "remove-btn",
                                onclick: move |_| {
                                    let mut list = ingredients.write();
                                    if index < list.len() {
                                        list.remove(index);
                                    }
                                },
                                "X"
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "add-btn",
                        onclick: move |_| ingredients.write().push(String::new()),
                        "+ Adicionar Ingrediente"
                    }
                }

                h3 { "Modo de Preparo" }
                textarea {
                    placeholder: "Descreva o passo a passo...",
                    required: true,
                    value: instructions(),
                    oninput: move |evt: FormEvent| instructions.set(evt.value()),
                }

                button { r#type: "submit", "Publicar Receita" }
            }
        }
    }
}
