use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("HTTP request failed: {0}")]
    Transport(String),
    #[error("Telegram error: {body}")]
    Rejected { status: u16, body: String },
}

impl SendError {
    pub fn transport<T: std::fmt::Display>(err: T) -> Self {
        Self::Transport(err.to_string())
    }

    pub(crate) fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }
}
