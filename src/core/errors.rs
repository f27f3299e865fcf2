use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanadrillError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for KanadrillError {
    fn from(error: std::io::Error) -> Self {
        KanadrillError::Io(Box::new(error))
    }
}
