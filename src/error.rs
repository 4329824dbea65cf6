use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("no section matches `{0}`")]
    MissingSection(String),

    #[error("intersection observer unavailable: {0}")]
    Observer(String),

    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

impl SiteError {
    pub fn observer(value: JsValue) -> Self {
        SiteError::Observer(format!("{:?}", value))
    }
}
