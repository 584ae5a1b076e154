use canvas::config::ConfigError;
use wasm_bindgen::JsValue;

/// Errors raised while mounting the app onto the page.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// No browser window or document (e.g. running in a worker).
    #[error("no window/document available")]
    NoDocument,
    /// A required element is missing from the page.
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    /// An element exists but has the wrong type.
    #[error("element #{0} is not a {1}")]
    WrongElement(&'static str, &'static str),
    /// The JSON config was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A DOM call failed.
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
