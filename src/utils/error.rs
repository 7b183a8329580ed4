use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("invalid request field '{field}': {reason}")]
    InvalidRequest { field: String, reason: String },

    #[error("invalid registration period: {value} {unit}")]
    InvalidPeriod { value: i64, unit: String },

    #[error("unknown verification provider '{provider}'")]
    UnknownProvider { provider: String },

    #[error("provider '{provider}' rejected the contact id")]
    ProviderValidationFailed { provider: String },

    #[error("domain '{name}' is already registered")]
    DuplicateName { name: String },

    #[error("domain '{name}' not found")]
    NotFound { name: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl RegistrarError {
    /// Status-code hint for the HTTP collaborator. The engine never formats
    /// responses itself; this keeps the agreed mapping in one place.
    pub fn http_status(&self) -> u16 {
        match self {
            RegistrarError::InvalidRequest { .. }
            | RegistrarError::InvalidPeriod { .. }
            | RegistrarError::UnknownProvider { .. } => 400,
            RegistrarError::NotFound { .. } => 404,
            RegistrarError::ProviderValidationFailed { .. } => 406,
            RegistrarError::DuplicateName { .. } => 409,
            RegistrarError::Internal { .. } => 500,
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        RegistrarError::Internal {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
