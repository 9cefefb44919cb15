/// Errors raised while mounting the widget into a page
use mascot_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("window not available")]
    NoWindow,
    #[error("document not available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not an HTML element")]
    NotHtmlElement(String),
    #[error("invalid panel selector `{0}`")]
    Selector(String),
    #[error("invalid widget options: {0}")]
    Config(#[from] ConfigError),
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
