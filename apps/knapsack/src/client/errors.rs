use thiserror::Error;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status. `message` is the server's own text when it sent one.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Cannot render graph: {0}")]
    Render(String),
}
