//! User-facing text for use-case errors, shown inline on the form that failed.

use store::{AppError, Field};

pub fn error_message(err: &AppError) -> String {
    match err {
        AppError::DuplicateEmail => "Este e-mail já está em uso.".to_string(),
        AppError::DuplicateUsername => "Este nome de usuário já está em uso.".to_string(),
        AppError::InvalidCredentials => "E-mail ou senha inválidos.".to_string(),
        AppError::ValidationFailed(Field::Ingredients) => {
            "Preencha todos os ingredientes (ao menos um).".to_string()
        }
        AppError::ValidationFailed(_) => "Por favor, preencha todos os campos.".to_string(),
        AppError::UnsupportedImage(_) => "Selecione uma imagem PNG ou JPEG.".to_string(),
        AppError::ImageTooLarge { limit, .. } => {
            format!("A imagem deve ter no máximo {} KB.", limit / 1024)
        }
        AppError::Store(e) => {
            tracing::error!("Storage failure: {}", e);
            "Não foi possível salvar os dados neste navegador.".to_string()
        }
    }
}
