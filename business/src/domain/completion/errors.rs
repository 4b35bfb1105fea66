/// Errors raised while producing a chat completion.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompletionError {
    #[error("completion.invalid_config")]
    InvalidConfig,
    /// The request could not be sent or the reply could not be read.
    #[error("completion.transport: {0}")]
    Transport(String),
    /// The endpoint answered with a status other than 200.
    #[error("completion.remote: {status}, {body}")]
    Remote { status: u16, body: String },
    /// Status 200, but the body lacks `choices[0].message.content`.
    #[error("completion.malformed_response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    pub fn transport(message: impl Into<String>) -> Self {
        CompletionError::Transport(message.into())
    }
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        CompletionError::Remote {
            status,
            body: body.into(),
        }
    }
    pub fn malformed_response(message: impl Into<String>) -> Self {
        CompletionError::MalformedResponse(message.into())
    }
}
