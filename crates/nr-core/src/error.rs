use thiserror::Error;

#[derive(Error, Debug)]
pub enum NrError {
    #[error("Template unavailable: {path} ({reason})")]
    TemplateUnavailable { path: String, reason: String },
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Sink write failure: {0}")]
    SinkWrite(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NrError {
    pub fn template(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::TemplateUnavailable { path: path.into(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, NrError>;
