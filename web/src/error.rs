//! Web adapter error types.

use thiserror::Error;
use vet_site::SiteError;
use wasm_bindgen::JsValue;

/// Result type for DOM wiring.
pub type WebResult<T> = Result<T, WebError>;

/// Errors raised while wiring the document.
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("Missing browser global: {0}")]
    MissingGlobal(&'static str),

    #[error("DOM error: {message}")]
    Dom { message: String },
}

impl WebError {
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Dom {
            message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for WebError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Dom {
            message: e.to_string(),
        }
    }
}

impl From<vet_model::ModelError> for WebError {
    fn from(e: vet_model::ModelError) -> Self {
        Self::Site(e.into())
    }
}

impl From<vet_validation::ValidationError> for WebError {
    fn from(e: vet_validation::ValidationError) -> Self {
        Self::Site(e.into())
    }
}

impl From<WebError> for JsValue {
    fn from(e: WebError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
