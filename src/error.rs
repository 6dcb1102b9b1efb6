//! Error types for the browser-facing layer

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while acquiring the page resources the network draws into.
/// All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id `{0}`")]
    CanvasNotFound(String),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("2d drawing context is unavailable")]
    ContextUnavailable,

    #[error("window size is not a number")]
    InvalidViewport,

    #[error("JavaScript error: {0}")]
    Js(String),
}

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, NetworkError>;

impl From<JsValue> for NetworkError {
    fn from(value: JsValue) -> Self {
        NetworkError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<NetworkError> for JsValue {
    fn from(err: NetworkError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
